//! # fakewatch-core - Core Domain Types
//!
//! Foundation crate for fakewatch. Provides the verdict domain types, error
//! handling, the rolling score series, and logging initialization.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`verdict`)
//! - [`Verdict`] - A scored news item (title, score, url, reason)
//! - [`Payload`] - The wire envelope carrying an optional `result` verdict
//!
//! ### Rolling Chart Data (`series`)
//! - [`ScoreSeries`] - Fixed-capacity FIFO of (timestamp label, score) pairs
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with fatal classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`

pub mod error;
pub mod logging;
pub mod series;
pub mod verdict;

/// Prelude for common imports used throughout all fakewatch crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use error::{Error, Result};
pub use series::{ScoreSeries, SCORE_SERIES_CAPACITY};
pub use verdict::{Payload, Verdict};
