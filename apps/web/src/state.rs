use crate::config::Config;
use crate::report::layout::PageConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Layout page config — font metrics and page dimensions for PDF report rendering.
    /// Defaults to Helvetica at 11pt on US letter with 1" margins.
    pub page_config: PageConfig,
}
