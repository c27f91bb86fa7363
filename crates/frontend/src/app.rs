use crate::routes::routes::AppRoutes;
use crate::system::pages::global_error::GlobalError;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! { <GlobalError errors=errors /> }>
            <Router>
                <AppRoutes />
            </Router>
        </ErrorBoundary>
    }
}
