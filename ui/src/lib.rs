//! Shared UI crate for Wordglass: the word cloud renderer, the analysis page
//! and everything the web and desktop launchers have in common.

pub mod cloud;
pub mod core;
pub mod export;
pub mod i18n;
pub mod shell;

pub mod components {
    pub mod app_header;
    pub use app_header::AppHeader;
}

pub use crate::core::config::AppConfig;
pub use shell::AnalysisView;

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
