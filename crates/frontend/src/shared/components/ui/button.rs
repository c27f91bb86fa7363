use leptos::prelude::*;

/// Class list for a button, e.g. `"button button--secondary button--small"`.
pub fn button_class(variant: Option<&str>, size: Option<&str>, extra: Option<&str>) -> String {
    let variant_class = match variant.unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };

    let mut class = format!("button {}", variant_class);
    if size == Some("sm") {
        class.push_str(" button--small");
    }
    if let Some(extra) = extra.filter(|c| !c.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Button component with variants (primary, secondary, ghost) and sizes (sm, md)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default) or "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let full_class = move || {
        button_class(
            variant.get().as_deref(),
            size.get().as_deref(),
            class.get().as_deref(),
        )
    };
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=full_class
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_variant_is_primary() {
        assert_eq!(button_class(None, None, None), "button button--primary");
        assert_eq!(button_class(Some("unknown"), Some("md"), None), "button button--primary");
    }

    #[test]
    fn test_variant_size_and_extra() {
        assert_eq!(
            button_class(Some("ghost"), Some("sm"), Some("w-full")),
            "button button--ghost button--small w-full"
        );
        assert_eq!(button_class(Some("secondary"), None, Some("")), "button button--secondary");
    }
}
