//! Response parsing and sanitizing: turns free-form model text into the
//! structured shapes the client renders.
//!
//! Two strategies, chosen per endpoint:
//! - `structured`: JSON embedded in text (context, imagery, verse).
//! - `delimited`: sentinel-wrapped fields (interpretation, poem, story).
//!
//! Every prose value passes through `sanitize` before it leaves this module's
//! callers.

use thiserror::Error;

pub mod delimited;
pub mod sanitize;
pub mod structured;

pub use delimited::{extract_field, extract_or, strip_block, Markers};
pub use sanitize::clean_text;
pub use structured::parse_clean;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("model output is not valid JSON: {0}")]
    Json(serde_json::Error),

    #[error("model output has the wrong shape: {0}")]
    Shape(serde_json::Error),

    #[error("model output has the wrong shape: {0}")]
    Incomplete(String),
}
