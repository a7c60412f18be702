use std::cell::RefCell;
use std::rc::Rc;

use api::{AnalysisClient, ApiError, ApiResult};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;
use tracing::{info, warn};

use super::state::{Command, ShellEvent, StatusMessage, ViewState};
use crate::cloud::{RenderedCloud, WordCloud};
use crate::core::config::AppConfig;
use crate::core::platform::{self, Platform};
use crate::core::timing;
use crate::export::ExportBar;
use crate::i18n;
use crate::t;

type SenderSlot = Rc<RefCell<Option<UnboundedSender<ShellEvent>>>>;

#[component]
pub fn AnalysisView() -> Element {
    let config =
        use_hook(|| try_consume_context::<AppConfig>().unwrap_or_else(AppConfig::from_env));
    let client: Rc<Result<AnalysisClient, ApiError>> = use_hook(|| {
        let client = AnalysisClient::new(&config.api_base);
        match &client {
            Ok(c) => info!(
                platform = Platform::current().label(),
                base = %c.base_url(),
                "analysis view mounted"
            ),
            Err(err) => warn!(base = %config.api_base, error = %err, "unusable API base"),
        }
        Rc::new(client)
    });

    i18n::use_language();
    let state = use_signal(|| ViewState::new().with_status_clear_ms(config.status_clear_ms));
    let mut rendered = use_signal(|| Option::<Rc<RenderedCloud>>::None);

    let sender_slot: SenderSlot = use_hook(|| Rc::new(RefCell::new(None)));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<ShellEvent>| {
        let sender_slot = sender_slot_for_loop.clone();
        let client = client.clone();
        let mut state_signal = state;

        async move {
            while let Some(event) = rx.next().await {
                let commands = state_signal.with_mut(|view| view.apply(event));
                for command in commands {
                    run_command(command, client.clone(), sender_slot.clone());
                }
            }
        }
    });

    sender_slot.borrow_mut().replace(coroutine.tx());
    {
        let coroutine = coroutine.clone();
        use_hook(move || coroutine.send(ShellEvent::Mounted));
    }

    // Exports must never offer a cloud that is no longer on screen.
    use_effect(move || {
        if !state.read().shows_cloud() {
            rendered.set(None);
        }
    });

    let words = use_memo(move || state.read().words.clone());
    let epoch = use_memo(move || state.read().layout_epoch);

    let view = state.read();
    let loading = view.loading;
    let error = view.error.clone();
    let shows_cloud = view.shows_cloud();
    let status_text = view.status.map(|status| match status {
        StatusMessage::Recomputed { .. } => t!("status-recomputed"),
    });
    drop(view);

    let max_words = config.max_words;

    rsx! {
        section { class: "page page-analysis",
            div { class: "analysis__header",
                h1 { class: "analysis__title", {t!("app-title")} }
                button {
                    r#type: "button",
                    class: "button button--primary analysis__rebuild",
                    disabled: loading,
                    onclick: move |_| coroutine.send(ShellEvent::RebuildRequested),
                    {t!("rebuild-button")}
                }
            }

            if loading {
                p { class: "analysis__loading", {t!("loading")} }
            }

            if let Some(err) = error {
                p { class: "analysis__error", role: "alert", "{err}" }
            }

            if shows_cloud {
                div { class: "analysis__stage",
                    WordCloud {
                        words,
                        epoch,
                        max_words,
                        onrender: move |cloud: Option<Rc<RenderedCloud>>| rendered.set(cloud),
                    }
                }
                if let Some(cloud) = rendered() {
                    ExportBar { cloud }
                }
            }

            if let Some(text) = status_text {
                p { class: "analysis__status", role: "status", "{text}" }
            }
        }
    }
}

fn run_command(
    command: Command,
    client: Rc<Result<AnalysisClient, ApiError>>,
    sender_slot: SenderSlot,
) {
    let Some(sender) = sender_slot.borrow().as_ref().cloned() else {
        return;
    };

    platform::spawn_future(async move {
        let event = match command {
            Command::FetchAnalysis => match ready(&client) {
                Ok(c) => match c.fetch_analysis().await {
                    Ok(words) => ShellEvent::FetchSucceeded(words),
                    Err(err) => ShellEvent::FetchFailed(err.to_string()),
                },
                Err(err) => ShellEvent::FetchFailed(err.to_string()),
            },
            Command::RebuildAnalysis => match ready(&client) {
                Ok(c) => match c.rebuild_analysis().await {
                    Ok(words) => ShellEvent::RebuildSucceeded(words),
                    Err(err) => ShellEvent::RebuildFailed(err.to_string()),
                },
                Err(err) => ShellEvent::RebuildFailed(err.to_string()),
            },
            Command::ScheduleStatusClear { ticket, after_ms } => {
                timing::sleep_ms(after_ms).await;
                ShellEvent::StatusExpired { ticket }
            }
        };
        let _ = sender.unbounded_send(event);
    });
}

fn ready(client: &Result<AnalysisClient, ApiError>) -> ApiResult<&AnalysisClient> {
    client.as_ref().map_err(Clone::clone)
}
