//! HTTP client for the analysis backend.
//!
//! The backend owns the text analysis; this crate only knows how to ask for the
//! current word list (`GET /api/analysis`) and how to request a fresh
//! recomputation (`POST /api/rebuild`). Both answer with a JSON array of
//! [`WordStat`].

mod client;
mod error;
mod model;

pub use client::{AnalysisClient, ANALYSIS_PATH, REBUILD_PATH};
pub use error::{ApiError, ApiResult};
pub use model::WordStat;
