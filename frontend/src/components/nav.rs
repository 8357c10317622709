use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::use_i18n;
use crate::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    let i18n = use_i18n();
    let current_route = use_route::<Route>().unwrap_or(Route::Home);
    let items = Route::nav_items();

    html! {
        <nav class="main-nav">
            <Link<Route> to={Route::Home} classes={classes!("brand")}>{i18n.t("app.title")}</Link<Route>>
            <ul>
                { for items.iter().map(|route| {
                    let active = *route == current_route;
                    html! {
                        <li class={classes!(active.then_some("active"))}>
                            <Link<Route> to={route.clone()}>{i18n.t(route.title_key())}</Link<Route>>
                        </li>
                    }
                }) }
            </ul>
        </nav>
    }
}
