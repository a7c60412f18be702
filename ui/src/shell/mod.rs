//! Application shell: page state, the reducer driving it and the view that
//! wires the reducer to the API client and the word cloud.

mod state;
mod view;

pub use state::{Command, ShellEvent, StatusMessage, ViewState};
pub use view::AnalysisView;
