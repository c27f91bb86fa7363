use crate::shared::icons::icon;
use contracts::shared::page_meta::APP_NAME;
use contracts::shared::routes::{RouteGroup, SIGN_IN_PATH};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Title of the section owning `path`, empty outside any section.
pub fn section_title(path: &str) -> &'static str {
    RouteGroup::resolve(path)
        .map(|group| group.label())
        .unwrap_or_default()
}

/// Top bar of the dashboard group: brand, current section title and the
/// sign-in shortcut.
#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let title = move || section_title(&location.pathname.get());

    view! {
        <header data-zone="header" class="top-header">
            <div class="top-header__brand">
                <span class="top-header__app">{APP_NAME}</span>
                <span class="top-header__title">{title}</span>
            </div>
            <div class="top-header__actions">
                <A href=SIGN_IN_PATH attr:class="top-header__icon-btn" attr:title="Sign in">
                    {icon("log-in")}
                </A>
            </div>
        </header>
    }
}
