//! Verdict domain types
//!
//! The scoring pipeline wraps each scored news item in an envelope:
//! `{ "result": { "title": ..., "score": ..., "url": ..., "reason": ... } }`.
//! Frames without a usable `result` are discarded by the decode step.

use serde::{Deserialize, Serialize};

/// A single scored news item from the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Verdict {
    /// Headline of the news item.
    pub title: String,
    /// Fakeness score assigned by the analyzer. Higher is faker.
    pub score: f64,
    /// Link to the original article or post.
    pub url: String,
    /// The analyzer's explanation for the score.
    pub reason: String,
}

impl Verdict {
    /// Score rendered without a trailing `.0` for whole numbers,
    /// matching how the upstream emits integral scores.
    pub fn score_display(&self) -> String {
        if self.score.fract() == 0.0 {
            format!("{}", self.score as i64)
        } else {
            format!("{:.1}", self.score)
        }
    }
}

/// Wire envelope around a [`Verdict`].
///
/// The `result` field is optional on the wire; envelopes without one are
/// treated as absent data, not as errors.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Payload {
    #[serde(default)]
    pub result: Option<Verdict>,
}
