use crate::shared::api_utils::api_url;
use crate::shared::components::ui::Card;
use crate::shared::components::PageHeader;
use contracts::shared::routes::RouteGroup;
use leptos::prelude::*;

#[component]
pub fn PatientsPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader group=RouteGroup::Patients />
            <Card title="No patient records yet">
                <p class="card__text">
                    "Patient records appear here once they are available from "
                    <code>{api_url("/patients")}</code>
                    "."
                </p>
            </Card>
        </div>
    }
}
