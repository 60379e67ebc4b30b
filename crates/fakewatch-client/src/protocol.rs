//! Frame cleanup and payload extraction
//!
//! Upstream frames are not clean JSON: the scoring pipeline wraps the payload
//! in prose and leaves literal `\n` and `\'` escape sequences behind. The
//! decode step here is a deliberate, lossy repair heuristic, not a general
//! JSON-escape processor: it grabs the outermost brace-delimited span, strips
//! exactly those two escapes, and hands the rest to a strict JSON parse.
//! Anything that still fails to parse is dropped without surfacing an error.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use fakewatch_core::{Payload, Verdict};

/// Greedy first-`{` to last-`}` span, newlines included.
static JSON_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("valid span regex"));

/// Extract the brace-delimited span from a raw frame and repair it.
///
/// Returns `None` when the frame contains no `{...}` span. The repair step
/// removes literal two-character `\n` sequences entirely and un-escapes `\'`
/// to `'`. No other malformed escapes are handled.
fn clean_json_span(input: &str) -> Option<String> {
    let span = JSON_SPAN.find(input)?.as_str();
    Some(span.replace("\\n", "").replace("\\'", "'"))
}

/// Extract and parse the payload envelope embedded in a raw frame.
///
/// Returns `None` on any failure: no brace span, or the repaired span is not
/// valid JSON. Failures are traced at debug level only; nothing propagates.
pub fn extract_payload(input: &str) -> Option<Payload> {
    let cleaned = clean_json_span(input)?;
    match serde_json::from_str::<Payload>(&cleaned) {
        Ok(payload) => Some(payload),
        Err(err) => {
            debug!("Dropping unparseable frame: {}", err);
            None
        }
    }
}

/// Decode a raw frame into a [`Verdict`].
///
/// Combines [`extract_payload`] with the envelope validity check: frames
/// whose payload lacks a non-null `result` are treated as absent data and
/// ignored.
pub fn decode_frame(input: &str) -> Option<Verdict> {
    extract_payload(input)?.result
}
