use yew::prelude::*;

use crate::i18n::use_i18n;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ViewPageProps {
    pub route: Route,
}

/// Shell for a routed screen. The screens themselves live outside this crate.
#[function_component(ViewPage)]
pub fn view_page(props: &ViewPageProps) -> Html {
    let i18n = use_i18n();
    let title = i18n.t(props.route.title_key());
    let body = i18n.t_with("view.placeholder", &[("name", title.as_str())]);

    html! {
        <section class={classes!("view-page", props.route.view_class())}>
            <h1>{title}</h1>
            <p>{body}</p>
        </section>
    }
}
