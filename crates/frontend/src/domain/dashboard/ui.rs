use crate::shared::components::ui::Card;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use contracts::shared::routes::RouteGroup;
use leptos::prelude::*;
use leptos_router::components::A;

/// Sections linked from the overview, in sidebar order.
pub fn dashboard_sections() -> Vec<RouteGroup> {
    RouteGroup::navigation()
        .into_iter()
        .filter(|group| *group != RouteGroup::Dashboard)
        .collect()
}

/// Overview page: one card per clinic section.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let sections = dashboard_sections();

    view! {
        <div class="page page--dashboard">
            <PageHeader group=RouteGroup::Dashboard />
            <div class="card-grid">
                {sections.into_iter().map(|group| {
                    let meta = group.metadata();
                    view! {
                        <A href=group.path() attr:class="card-grid__link">
                            <Card title=meta.title>
                                <div class="card__icon">{icon(group.icon())}</div>
                                <p class="card__text">{meta.description}</p>
                            </Card>
                        </A>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_links_every_other_section() {
        assert_eq!(
            dashboard_sections(),
            vec![
                RouteGroup::Appointments,
                RouteGroup::Calendar,
                RouteGroup::Patients,
                RouteGroup::Reports,
            ]
        );
    }
}
