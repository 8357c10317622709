use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use crate::components::nav::Nav;
use crate::components::footer::Footer;
use crate::config::AppConfig;
use crate::i18n::I18n;

pub mod api;
pub mod components;
pub mod config;
pub mod i18n;
pub mod pages {
    pub mod not_found;
    pub mod view;
}

use pages::{not_found::NotFound, view::ViewPage};

// Unit test modules only
#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/items")]
    Items,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/profile")]
    Profile,
    #[at("/users")]
    Users,
    #[at("/categories")]
    Categories,
    #[at("/settings")]
    Settings,
    #[at("/display")]
    Display,
    #[at("/widget")]
    Widget,
    #[at("/schedules")]
    Schedules,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes shown in the navigation bar, in display order.
    pub fn nav_items() -> [Route; 11] {
        [
            Route::Home,
            Route::Items,
            Route::Login,
            Route::Register,
            Route::Profile,
            Route::Users,
            Route::Categories,
            Route::Settings,
            Route::Display,
            Route::Widget,
            Route::Schedules,
        ]
    }

    /// Message key for the view's title.
    pub fn title_key(&self) -> &'static str {
        match self {
            Route::Home => "nav.home",
            Route::Items => "nav.items",
            Route::Login => "nav.login",
            Route::Register => "nav.register",
            Route::Profile => "nav.profile",
            Route::Users => "nav.users",
            Route::Categories => "nav.categories",
            Route::Settings => "nav.settings",
            Route::Display => "nav.display",
            Route::Widget => "nav.widget",
            Route::Schedules => "nav.schedules",
            Route::NotFound => "not_found.title",
        }
    }

    pub fn view_class(&self) -> &'static str {
        match self {
            Route::Home => "home-page",
            Route::Items => "items-page",
            Route::Login => "login-page",
            Route::Register => "register-page",
            Route::Profile => "profile-page",
            Route::Users => "users-page",
            Route::Categories => "categories-page",
            Route::Settings => "settings-page",
            Route::Display => "display-page",
            Route::Widget => "widget-page",
            Route::Schedules => "schedules-page",
            Route::NotFound => "not-found-page",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
    pub i18n: I18n,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    debug!("App component rendering");
    html! {
        <ContextProvider<AppConfig> context={props.config.clone()}>
            <ContextProvider<I18n> context={props.i18n.clone()}>
                <BrowserRouter>
                    <div class="app-container">
                        <Nav />
                        <main class="flex-1">
                            <Switch<Route> render={switch} />
                        </main>
                        <Footer />
                    </div>
                </BrowserRouter>
            </ContextProvider<I18n>>
        </ContextProvider<AppConfig>>
    }
}

fn switch(route: Route) -> Html {
    debug!("Route switch: {:?}", route);
    match route {
        Route::NotFound => {
            debug!("Rendering 404 Not Found");
            html! { <NotFound /> }
        },
        route => html! { <ViewPage route={route} /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();

    let config = AppConfig::detect();
    let i18n = I18n::bundled().map_err(|e| {
        error!("Failed to load bundled messages: {}", e);
        JsValue::from_str(&e.to_string())
    })?;
    info!("Locale '{}', backend {}", i18n.locale(), config.api_base_url);

    let props = AppProps { config, i18n };
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("app"));

    match root {
        Some(root) => {
            info!("Mounting application to #app");
            yew::Renderer::<App>::with_root_and_props(root, props).render();
        }
        None => {
            info!("No #app element, mounting application to body");
            yew::Renderer::<App>::with_props(props).render();
        }
    }

    Ok(())
}

// Add a start function that Trunk can call
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
