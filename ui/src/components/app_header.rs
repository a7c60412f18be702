use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::i18n;
use crate::t;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Page header with the brand and a locale switcher.
///
/// If the platform provides a `Signal<String>` language code through context,
/// the selected tag is written into it; every component that calls
/// [`i18n::use_language`] then re-renders with fresh strings.
#[component]
pub fn AppHeader() -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    i18n::use_language();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                debug!(lang = %val, "language switched");
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!(lang = %val, error = %err, "language switch failed"),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        header { id: "app-header", class: "app-header",
            div { class: "app-header__inner",
                div { class: "app-header__brand",
                    span { class: "app-header__brand-spark", aria_hidden: "true" }
                    span { class: "app-header__brand-mark", {t!("app-brand")} }
                    span { class: "app-header__brand-subtitle", {t!("app-tagline")} }
                }

                if show_switcher {
                    div { class: "app-header__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs() {
                                option {
                                    key: "{code}",
                                    value: "{code}",
                                    selected: code == current_lang(),
                                    {language_name(&code)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Native display name for the embedded locales; other tags show as-is.
fn language_name(tag: &str) -> String {
    match tag {
        "en-US" => "English".to_string(),
        "ja-JP" => "日本語".to_string(),
        other => other.to_string(),
    }
}
