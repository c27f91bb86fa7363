use leptos::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

/// One tab: the identifier reported on click and the visible label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub value: String,
    pub label: String,
}

impl TabItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Position of the tab whose value equals `value`. First match wins, so at
/// most one tab is ever active.
pub fn active_index(values: &[String], value: &str) -> Option<usize> {
    values.iter().position(|v| v == value)
}

/// Reports the value of the tab at `index` through `on_change`. Out-of-range
/// indexes are ignored.
pub fn select_tab(values: &[String], index: usize, on_change: Callback<String>) {
    if let Some(value) = values.get(index) {
        on_change.run(value.clone());
    }
}

pub fn has_unique_values(tabs: &[TabItem]) -> bool {
    let mut seen = HashSet::new();
    tabs.iter().all(|tab| seen.insert(tab.value.as_str()))
}

/// Horizontal tab strip. Selection is owned by the caller: the strip shows
/// `value` as active and reports clicks through `on_change`.
#[component]
pub fn Tabs(
    /// Tabs in display order; values must be unique
    tabs: Vec<TabItem>,
    /// Value of the active tab
    #[prop(into)]
    value: Signal<String>,
    /// Called with the clicked tab's value
    on_change: Callback<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    debug_assert!(has_unique_values(&tabs), "tab values must be unique");

    let values: Arc<Vec<String>> = Arc::new(tabs.iter().map(|tab| tab.value.clone()).collect());
    let active = {
        let values = Arc::clone(&values);
        Memo::new(move |_| value.with(|current| active_index(&values, current)))
    };
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("tabs {}", additional_class()).trim_end().to_string() role="tablist">
            {tabs.into_iter().enumerate().map(|(index, tab)| {
                let is_active = move || active.get() == Some(index);
                let values = Arc::clone(&values);
                view! {
                    <button
                        type="button"
                        role="tab"
                        class="tabs__item"
                        class:tabs__item--active=is_active
                        aria-selected=move || if is_active() { "true" } else { "false" }
                        on:click=move |_| select_tab(&values, index, on_change)
                    >
                        {tab.label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
