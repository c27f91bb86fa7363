//! Dashboard sidebar: one entry per navigable route group.

use crate::shared::icons::icon;
use contracts::shared::page_meta::APP_NAME;
use contracts::shared::routes::RouteGroup;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let active_group = Memo::new(move |_| RouteGroup::resolve(&location.pathname.get()));

    view! {
        // Always mounted; `app-sidebar--desktop` hides it below the md breakpoint.
        <aside data-zone="left" class="app-sidebar app-sidebar--desktop">
            <div class="app-sidebar__brand">
                {icon("stethoscope")}
                <span>{APP_NAME}</span>
            </div>
            <nav class="app-sidebar__content">
                {RouteGroup::navigation().into_iter().map(|group| {
                    view! {
                        <A href=group.path() attr:class="app-sidebar__link">
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || active_group.get() == Some(group)
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon())}
                                    <span>{group.label()}</span>
                                </div>
                            </div>
                        </A>
                    }
                }).collect_view()}
            </nav>
        </aside>
    }
}
