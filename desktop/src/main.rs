#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::tao::{dpi::LogicalSize, window::WindowBuilder};
#[cfg(feature = "desktop")]
use dioxus::desktop::Config;
use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::{AnalysisView, AppConfig};

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Wordglass – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(900.0, 960.0)),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let config = use_context_provider(AppConfig::from_env);
    use_hook(move || tracing::info!(api_base = %config.api_base, "desktop shell starting"));

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        // The packaged app has no asset directory, so the theme ships inline.
        document::Style { "{MAIN_CSS_INLINE}" }

        AppHeader {}
        main {
            AnalysisView {}
        }
    }
}
