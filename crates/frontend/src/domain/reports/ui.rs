use crate::shared::components::ui::{Card, TabItem, Tabs};
use crate::shared::components::PageHeader;
use contracts::shared::routes::RouteGroup;
use leptos::prelude::*;

const PERIODS: [(&str, &str); 3] = [("daily", "Daily"), ("weekly", "Weekly"), ("monthly", "Monthly")];

#[component]
pub fn ReportsPage() -> impl IntoView {
    let period = RwSignal::new(PERIODS[0].0.to_string());
    let tabs = PERIODS
        .iter()
        .map(|(value, label)| TabItem::new(*value, *label))
        .collect::<Vec<_>>();

    view! {
        <div class="page">
            <PageHeader group=RouteGroup::Reports />
            <Tabs tabs=tabs value=period on_change=Callback::new(move |value: String| period.set(value)) />
            <Card>
                <p class="card__text">
                    {move || format!("No {} report available yet.", period.get())}
                </p>
            </Card>
        </div>
    }
}
