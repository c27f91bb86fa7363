use crate::shared::components::ui::button::button_class;
use contracts::shared::routes::{DASHBOARD_PATH, SIGN_IN_PATH};
use leptos::prelude::*;
use leptos_router::components::A;

/// The two ways out of an unknown route: (label, path, button variant).
pub const NOT_FOUND_ACTIONS: [(&str, &str, &str); 2] = [
    ("Go to dashboard", DASHBOARD_PATH, "primary"),
    ("Sign in", SIGN_IN_PATH, "secondary"),
];

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="fallback-page">
            <p class="fallback-page__code">"404"</p>
            <h1 class="fallback-page__title">"Page not found"</h1>
            <p class="fallback-page__text">
                "The page you are looking for does not exist or has been moved."
            </p>
            <div class="fallback-page__actions">
                {NOT_FOUND_ACTIONS.into_iter().map(|(label, href, variant)| view! {
                    <A href=href attr:class=button_class(Some(variant), None, None)>{label}</A>
                }).collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_two_actions() {
        assert_eq!(NOT_FOUND_ACTIONS.len(), 2);
        let paths: Vec<&str> = NOT_FOUND_ACTIONS.iter().map(|(_, path, _)| *path).collect();
        assert_eq!(paths, vec!["/dashboard", "/sign-in"]);
    }
}
