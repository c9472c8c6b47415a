use std::ops::Deref;

use pearl_catalog::Catalog;
use pearl_core::{PearlConfig, Route, Tone};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Event};
use yew::prelude::*;

use crate::pages::{
    HomePage, PatientDetailPage, PredictorPage, SearchCasesPage, SearchPatientsPage, TrendsPage,
};
use crate::styles;
use crate::widgets::Notice;

/// Pushes a new route onto the browser history and re-renders the shell.
#[derive(Clone, Default, PartialEq)]
pub struct Navigator(Callback<Route>);

impl Navigator {
    pub fn push(&self, route: Route) {
        self.0.emit(route);
    }

    /// Click handler navigating to `route`.
    pub fn to<E: 'static>(&self, route: Route) -> Callback<E> {
        let navigator = self.clone();
        Callback::from(move |_| navigator.push(route.clone()))
    }
}

#[hook]
pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().unwrap_or_default()
}

/// The loaded dataset, compared by identity so pages do not diff it.
#[derive(Clone, Copy)]
pub struct CatalogRef(pub &'static Catalog);

impl PartialEq for CatalogRef {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl Deref for CatalogRef {
    type Target = Catalog;

    fn deref(&self) -> &Catalog {
        self.0
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: PearlConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    use_effect_with((), |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Err(err) = styles::ensure_styles(&document) {
                    console::error_1(&err);
                }
            }
        }
        || ()
    });

    let route = use_state(current_route);

    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn Fn(Event)>::new(move |_: Event| route.set(current_route()));
            let window = web_sys::window();
            if let Some(window) = &window {
                if let Err(err) = window
                    .add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
                {
                    console::error_1(&err);
                }
            }
            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "popstate",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let navigator = {
        let route = route.clone();
        Navigator(Callback::from(move |next: Route| {
            if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
                if let Err(err) =
                    history.push_state_with_url(&JsValue::NULL, "", Some(&next.path()))
                {
                    console::error_1(&err);
                }
            }
            route.set(next);
        }))
    };

    let body = match Catalog::shared() {
        Ok(catalog) => render_route(&route, CatalogRef(catalog), &props.config),
        Err(err) => {
            console::error_1(&JsValue::from_str(&err.to_string()));
            html! {
                <main class="pearl-page">
                    <Notice tone={Tone::Danger} title="The sample dataset could not be loaded">
                        { err.to_string() }
                    </Notice>
                </main>
            }
        }
    };

    html! {
        <ContextProvider<Navigator> context={navigator}>
            <div class="pearl-root">
                <Navbar active={(*route).clone()} />
                { body }
            </div>
        </ContextProvider<Navigator>>
    }
}

fn render_route(route: &Route, catalog: CatalogRef, config: &PearlConfig) -> Html {
    match route {
        Route::Home => html! { <HomePage {catalog} config={config.clone()} /> },
        Route::PatientDetail { id } => {
            html! { <PatientDetailPage key={id.clone()} {catalog} id={id.clone()} /> }
        }
        Route::TreatmentPredictor => {
            html! { <PredictorPage {catalog} config={config.clone()} /> }
        }
        Route::SearchPatients => html! { <SearchPatientsPage {catalog} /> },
        Route::SearchCaseStudies => html! { <SearchCasesPage {catalog} /> },
        Route::Trends => html! { <TrendsPage {catalog} /> },
        // Unknown paths keep the navbar and render no page.
        Route::NotFound => Html::default(),
    }
}

fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Route::parse(&path))
        .unwrap_or(Route::Home)
}

#[derive(Properties, PartialEq)]
struct NavbarProps {
    active: Route,
}

#[function_component(Navbar)]
fn navbar(props: &NavbarProps) -> Html {
    let navigator = use_navigator();

    html! {
        <nav class="pearl-navbar">
            <div class="pearl-brand">
                <span class="pearl-brand-mark" aria-hidden="true"></span>
                <span>{"Sanofi Pearl"}</span>
                <span class="pearl-chip" data-tone={Tone::Primary.as_str()}>{"ITP Research Platform"}</span>
            </div>
            <div class="pearl-nav-links">
                {
                    for Route::NAVIGATION.into_iter().map(|(route, label)| {
                        let is_active = route == props.active;
                        html! {
                            <button
                                type="button"
                                class={classes!("pearl-nav-link", is_active.then_some("is-active"))}
                                onclick={navigator.to::<MouseEvent>(route)}
                            >
                                { label }
                            </button>
                        }
                    })
                }
            </div>
        </nav>
    }
}
