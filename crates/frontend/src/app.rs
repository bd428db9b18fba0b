//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use ui_state::Screen;

use crate::pages::{AdminPage, AuthPage, DashboardPage};
use crate::toaster::ToastProvider;

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Auth,
    #[at("/dashboard")]
    Dashboard,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// The route a screen lives at.
pub fn route_for(screen: Screen) -> Route {
    match screen {
        Screen::Auth => Route::Auth,
        Screen::Dashboard => Route::Dashboard,
        Screen::Admin => Route::Admin,
    }
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Auth => html! { <AuthPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Admin => html! { <AdminPage /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - Page Not Found"}</h1>
                <p>{"This page doesn't exist. The app lives at /, /dashboard, and /admin."}</p>
            </div>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <Switch<Route> render={switch} />
            </ToastProvider>
        </BrowserRouter>
    }
}
