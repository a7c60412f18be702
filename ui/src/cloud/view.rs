use std::rc::Rc;

use api::WordStat;
use dioxus::prelude::*;
use tracing::debug;

use super::{CloudPlan, LayoutGate, LayoutTicket, RenderedCloud, MAX_WORDS};
use crate::i18n;
use crate::t;

/// Circular glass word cloud.
///
/// Lays the words out again whenever `words` or `epoch` changes. A layout that
/// finishes after a newer one has started is thrown away, so only the latest
/// run ever reaches the screen. `onrender` receives every drawn cloud (or
/// `None` once the list is empty) so siblings such as the export bar can reuse it.
#[component]
pub fn WordCloud(
    words: ReadOnlySignal<Vec<WordStat>>,
    epoch: ReadOnlySignal<u64>,
    #[props(default = MAX_WORDS)] max_words: usize,
    onrender: Option<EventHandler<Option<Rc<RenderedCloud>>>>,
) -> Element {
    i18n::use_language();
    let gate = use_hook(|| Rc::new(LayoutGate::default()));
    let drawn = use_signal(|| Option::<Rc<RenderedCloud>>::None);

    let _layout = use_resource(move || {
        let gate = gate.clone();
        let mut drawn = drawn;
        let words = words();
        let epoch = epoch();
        let ticket = gate.issue();

        async move {
            let Some(plan) = CloudPlan::new(&words, max_words) else {
                drawn.set(None);
                if let Some(handler) = onrender {
                    handler.call(None);
                }
                return;
            };

            let Some(cloud) = draw_if_current(&gate, ticket, plan, rand::random()).await else {
                return;
            };
            debug!(epoch, "word cloud epoch drawn");
            let cloud = Rc::new(cloud);
            drawn.set(Some(cloud.clone()));
            if let Some(handler) = onrender {
                handler.call(Some(cloud));
            }
        }
    });

    let markup = drawn
        .read()
        .as_ref()
        .map(|cloud| cloud.markup.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "word-cloud",
            role: "img",
            aria_label: t!("cloud-aria-label"),
            dangerous_inner_html: "{markup}",
        }
    }
}

/// Lay out `plan` and keep the result only if `ticket` is still the latest run.
async fn draw_if_current(
    gate: &LayoutGate,
    ticket: LayoutTicket,
    plan: CloudPlan,
    seed: u64,
) -> Option<RenderedCloud> {
    let scene = plan.render(seed).await;
    if !gate.is_current(ticket) {
        debug!(ticket = ticket.get(), "discarding stale layout");
        return None;
    }
    debug!(
        ticket = ticket.get(),
        placed = scene.words.len(),
        "word cloud drawn"
    );
    Some(RenderedCloud::new(scene, plan.selected))
}
