//! Card: thin wrapper over Thaw [`thaw::Card`] with an optional heading.

use leptos::prelude::*;
use thaw::Card as ThawCard;

#[component]
pub fn Card(
    /// Heading rendered above the content
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let full_class = move || match class.get() {
        Some(extra) if !extra.is_empty() => format!("card {}", extra),
        _ => "card".to_string(),
    };

    view! {
        <div class=full_class>
            <ThawCard>
                {move || title.get().map(|t| view! { <h3 class="card__title">{t}</h3> })}
                {children()}
            </ThawCard>
        </div>
    }
}
