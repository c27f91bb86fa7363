use super::meta::use_page_meta;
use contracts::shared::routes::RouteGroup;
use leptos::prelude::*;

/// Layout of the sign-in pages.
///
/// Children render inside a `Suspense` with an empty fallback: while any
/// resource read below is pending the layout shows only its background.
#[component]
pub fn AuthLayout(children: Children) -> impl IntoView {
    use_page_meta(RouteGroup::Auth.metadata());

    view! {
        <div class="auth-layout">
            <Suspense fallback=|| ()>
                {children()}
            </Suspense>
        </div>
    }
}
