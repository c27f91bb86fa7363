use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

/// One week of a month view, Monday first. `None` pads days that belong to
/// the neighbouring months.
pub type Week = [Option<u32>; 7];

/// Month laid out as calendar rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

impl MonthGrid {
    /// Builds the grid, `None` for an out-of-range month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let days = days_in_month(year, month)?;
        let offset = first.weekday().num_days_from_monday() as usize;

        let mut weeks = Vec::new();
        let mut week: Week = [None; 7];
        for day in 1..=days {
            let slot = (offset + day as usize - 1) % 7;
            week[slot] = Some(day);
            if slot == 6 {
                weeks.push(week);
                week = [None; 7];
            }
        }
        if week.iter().any(Option::is_some) {
            weeks.push(week);
        }

        Some(Self { year, month, weeks })
    }

    /// Heading such as `"October 2026"`.
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = shift_month(year, month, 1);
    let next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    Some(next.signed_duration_since(first).num_days() as u32)
}

/// Moves `(year, month)` by `delta` months across year boundaries.
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let index = year * 12 + (month as i32 - 1) + delta;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(grid: &MonthGrid) -> Vec<u32> {
        grid.weeks.iter().flatten().flatten().copied().collect()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2026, 2), Some(28));
        assert_eq!(days_in_month(2026, 12), Some(31));
        assert_eq!(days_in_month(2026, 13), None);
    }

    #[test]
    fn test_shift_month() {
        assert_eq!(shift_month(2026, 12, 1), (2027, 1));
        assert_eq!(shift_month(2026, 1, -1), (2025, 12));
        assert_eq!(shift_month(2026, 10, -22), (2024, 12));
        assert_eq!(shift_month(2026, 10, 0), (2026, 10));
    }

    #[test]
    fn test_grid_starts_on_weekday_column() {
        // 1 October 2026 is a Thursday.
        let grid = MonthGrid::new(2026, 10).unwrap();
        assert_eq!(grid.weeks[0], [None, None, None, Some(1), Some(2), Some(3), Some(4)]);
        assert_eq!(grid.weeks.len(), 5);
        assert_eq!(days(&grid), (1..=31).collect::<Vec<_>>());
        assert_eq!(grid.weeks[4][5], Some(31));
        assert_eq!(grid.weeks[4][6], None);
    }

    #[test]
    fn test_grid_without_padding() {
        // February 2021 starts on Monday and fills exactly four rows.
        let grid = MonthGrid::new(2021, 2).unwrap();
        assert_eq!(grid.weeks.len(), 4);
        assert_eq!(grid.weeks[0][0], Some(1));
        assert_eq!(grid.weeks[3][6], Some(28));
    }

    #[test]
    fn test_invalid_month() {
        assert!(MonthGrid::new(2026, 0).is_none());
        assert_eq!(month_name(0), "");
        assert_eq!(MonthGrid::new(2026, 10).unwrap().title(), "October 2026");
    }
}
