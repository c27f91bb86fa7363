use crate::shared::components::ui::{Button, Card, TabItem, Tabs, Textarea};
use crate::shared::components::PageHeader;
use contracts::shared::routes::RouteGroup;
use leptos::prelude::*;

pub const UPCOMING: &str = "upcoming";
pub const PAST: &str = "past";
pub const CANCELLED: &str = "cancelled";

fn appointment_tabs() -> Vec<TabItem> {
    vec![
        TabItem::new(UPCOMING, "Upcoming"),
        TabItem::new(PAST, "Past"),
        TabItem::new(CANCELLED, "Cancelled"),
    ]
}

/// Empty-state text for a tab value.
pub fn empty_state_text(tab: &str) -> &'static str {
    match tab {
        PAST => "No past appointments to show.",
        CANCELLED => "No cancelled appointments.",
        _ => "No upcoming appointments scheduled.",
    }
}

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    let active_tab = RwSignal::new(UPCOMING.to_string());
    let notes = RwSignal::new(String::new());

    let on_tab_change = Callback::new(move |value: String| active_tab.set(value));
    let on_notes_change = Callback::new(move |ev: leptos::ev::Event| notes.set(event_target_value(&ev)));
    let on_clear = Callback::new(move |_: leptos::ev::MouseEvent| notes.set(String::new()));

    view! {
        <div class="page">
            <PageHeader group=RouteGroup::Appointments />

            <Tabs tabs=appointment_tabs() value=active_tab on_change=on_tab_change />

            <Card>
                <p class="card__text">{move || empty_state_text(&active_tab.get())}</p>
            </Card>

            <Card title="Visit notes">
                <Textarea
                    label="Notes for the next visit"
                    name="visit_notes"
                    value=notes
                    on_change=on_notes_change
                    placeholder="Symptoms, follow-ups, reminders…"
                />
                <Button variant="ghost" size="sm" on_click=on_clear>"Clear"</Button>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::ui::tabs::has_unique_values;

    #[test]
    fn test_tabs_are_unique() {
        assert!(has_unique_values(&appointment_tabs()));
    }

    #[test]
    fn test_empty_state_text_per_tab() {
        assert_eq!(empty_state_text(PAST), "No past appointments to show.");
        assert_eq!(empty_state_text(CANCELLED), "No cancelled appointments.");
        assert_eq!(empty_state_text(UPCOMING), empty_state_text("unknown"));
    }
}
