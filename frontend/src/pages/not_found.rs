use yew::prelude::*;

use crate::i18n::use_i18n;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let i18n = use_i18n();
    html! {
        <div class="not-found-page">
            <h1>{i18n.t("not_found.title")}</h1>
            <p>{i18n.t("not_found.body")}</p>
        </div>
    }
}
