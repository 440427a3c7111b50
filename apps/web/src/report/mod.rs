// Feedback report generation: layout metrics, PDF rendering, and the
// /api/generate-pdf handler.

pub mod handlers;
pub mod layout;
pub mod pdf;

pub use layout::{default_page_config, PageConfig};
