use yew::prelude::*;

use crate::config::AppConfig;
use crate::i18n::use_i18n;

#[function_component(Footer)]
pub fn footer() -> Html {
    let i18n = use_i18n();
    let config = use_context::<AppConfig>().expect("AppConfig context not found");

    html! {
        <footer class="app-footer">
            <span>{i18n.t_with("footer.backend", &[("url", config.api_base_url.as_str())])}</span>
        </footer>
    }
}
