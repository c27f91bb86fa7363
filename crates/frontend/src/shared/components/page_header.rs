use contracts::shared::routes::RouteGroup;
use leptos::prelude::*;

/// Heading of a section page: the group's title and description, with room
/// for page actions on the right.
#[component]
pub fn PageHeader(
    group: RouteGroup,
    /// Page actions, rendered on the right
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let meta = group.metadata();

    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{meta.title}</h1>
                <div class="page-header__subtitle">{meta.description}</div>
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
