use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::{AnalysisView, AppConfig};

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    use_context_provider(AppConfig::from_env);
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        AppHeader {}
        main {
            AnalysisView {}
        }
    }
}
