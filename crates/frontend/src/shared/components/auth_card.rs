use leptos::prelude::*;

/// Subtitle to render, `None` when absent or empty.
pub fn visible_subtitle(subtitle: Option<String>) -> Option<String> {
    subtitle.filter(|s| !s.is_empty())
}

/// Centered card used by the sign-in pages.
#[component]
pub fn AuthCard(
    #[prop(into)]
    title: String,
    /// Omitted from the output entirely when empty
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-card">
            <div class="auth-card__header">
                <h1 class="auth-card__title">{title}</h1>
                {move || visible_subtitle(subtitle.get()).map(|s| view! {
                    <p class="auth-card__subtitle">{s}</p>
                })}
            </div>
            <div class="auth-card__body">
                {children()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtitle_omitted_when_falsy() {
        assert_eq!(visible_subtitle(None), None);
        assert_eq!(visible_subtitle(Some(String::new())), None);
    }

    #[test]
    fn test_whitespace_subtitle_is_rendered() {
        assert_eq!(visible_subtitle(Some("  ".to_string())), Some("  ".to_string()));
    }

    #[test]
    fn test_subtitle_kept() {
        assert_eq!(
            visible_subtitle(Some("Welcome back".to_string())),
            Some("Welcome back".to_string())
        );
    }
}
