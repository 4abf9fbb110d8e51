use std::sync::Arc;

use crate::ats::ResumeAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable scorer. Default: LocalAtsAnalyzer.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
}
