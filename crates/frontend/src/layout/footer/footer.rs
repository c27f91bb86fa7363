use chrono::Datelike;
use contracts::shared::page_meta::APP_NAME;
use leptos::prelude::*;
use leptos_router::components::A;

const DEFAULT_CLASS: &str = "status-bar";

pub const FOOTER_LINKS: [(&str, &str); 2] = [("Privacy", "/privacy"), ("Terms", "/terms")];

/// Year shown in the copyright line for the moment `now`.
pub fn copyright_year(now: impl Datelike) -> i32 {
    now.year()
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, APP_NAME)
}

#[component]
pub fn Footer(
    /// Replaces the default footer class
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let footer_class = move || class.get().unwrap_or_else(|| DEFAULT_CLASS.to_string());

    view! {
        <footer data-zone="footer" class=footer_class>
            <span class="status-bar__copyright">{copyright_line(copyright_year(chrono::Local::now()))}</span>
            <nav class="status-bar__links">
                {FOOTER_LINKS.into_iter().map(|(label, href)| view! {
                    <A href=href attr:class="status-bar__link">{label}</A>
                }).collect_view()}
            </nav>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2026), "© 2026 Clinic Manager. All rights reserved.");
    }

    #[test]
    fn test_year_changes_across_new_year() {
        let new_years_eve = NaiveDate::from_ymd_opt(2025, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let new_year = NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        assert_eq!(copyright_line(copyright_year(new_years_eve)), "© 2025 Clinic Manager. All rights reserved.");
        assert_eq!(copyright_line(copyright_year(new_year)), "© 2026 Clinic Manager. All rights reserved.");
    }

    #[test]
    fn test_two_static_links() {
        assert_eq!(FOOTER_LINKS.len(), 2);
        assert!(FOOTER_LINKS.iter().all(|(_, href)| href.starts_with('/')));
    }
}
