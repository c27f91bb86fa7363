//! Section layouts nested inside the dashboard group. Each one only wraps
//! its page and applies the section's metadata.

use super::meta::use_page_meta;
use contracts::shared::routes::RouteGroup;
use leptos::prelude::*;

#[component]
fn SectionLayout(group: RouteGroup, children: Children) -> impl IntoView {
    use_page_meta(group.metadata());
    let section = group.path().trim_start_matches('/');

    view! {
        <section class="section-layout" data-section=section>
            {children()}
        </section>
    }
}

#[component]
pub fn AppointmentsLayout(children: Children) -> impl IntoView {
    view! { <SectionLayout group=RouteGroup::Appointments>{children()}</SectionLayout> }
}

#[component]
pub fn CalendarLayout(children: Children) -> impl IntoView {
    view! { <SectionLayout group=RouteGroup::Calendar>{children()}</SectionLayout> }
}

#[component]
pub fn PatientsLayout(children: Children) -> impl IntoView {
    view! { <SectionLayout group=RouteGroup::Patients>{children()}</SectionLayout> }
}

#[component]
pub fn ReportsLayout(children: Children) -> impl IntoView {
    view! { <SectionLayout group=RouteGroup::Reports>{children()}</SectionLayout> }
}
