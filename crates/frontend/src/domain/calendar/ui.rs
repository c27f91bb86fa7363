use crate::shared::components::ui::{Button, Card};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use chrono::{Datelike, NaiveDate};
use contracts::shared::calendar::{shift_month, MonthGrid, WEEKDAY_LABELS};
use contracts::shared::routes::RouteGroup;
use leptos::prelude::*;

/// Day number to highlight in the displayed month, if today falls in it.
pub fn highlighted_day(today: NaiveDate, year: i32, month: u32) -> Option<u32> {
    (today.year() == year && today.month() == month).then(|| today.day())
}

/// Month view starting at the current month.
#[component]
pub fn CalendarPage() -> impl IntoView {
    let today = chrono::Local::now().date_naive();
    let shown = RwSignal::new((today.year(), today.month()));

    let grid = Memo::new(move |_| {
        let (year, month) = shown.get();
        MonthGrid::new(year, month)
    });

    let step = move |delta: i32| {
        Callback::new(move |_: leptos::ev::MouseEvent| {
            shown.update(|(year, month)| (*year, *month) = shift_month(*year, *month, delta));
        })
    };

    view! {
        <div class="page">
            <PageHeader group=RouteGroup::Calendar>
                <Button variant="ghost" size="sm" on_click=step(-1)>{icon("chevron-left")}</Button>
                <Button variant="ghost" size="sm" on_click=step(1)>{icon("chevron-right")}</Button>
            </PageHeader>
            <Card>
                {move || grid.get().map(|grid| {
                    let today_day = highlighted_day(today, grid.year, grid.month);
                    view! {
                        <h2 class="calendar__title">{grid.title()}</h2>
                        <table class="calendar">
                            <thead>
                                <tr>
                                    {WEEKDAY_LABELS.into_iter().map(|label| view! { <th>{label}</th> }).collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {grid.weeks.into_iter().map(|week| view! {
                                    <tr>
                                        {week.into_iter().map(|day| view! {
                                            <td
                                                class="calendar__day"
                                                class:calendar__day--today=day.is_some() && day == today_day
                                            >
                                                {day.map(|d| d.to_string()).unwrap_or_default()}
                                            </td>
                                        }).collect_view()}
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    }
                })}
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlighted_day() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(highlighted_day(today, 2026, 10), Some(19));
        assert_eq!(highlighted_day(today, 2026, 11), None);
        assert_eq!(highlighted_day(today, 2025, 10), None);
    }
}
