//! Platform detection and task spawning helpers.

use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
        }
    }
}

/// Fire-and-forget a future on the Dioxus runtime of the calling component.
///
/// Must be called from inside a component, event handler or coroutine.
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    let _task = dioxus::prelude::spawn(future);
}
