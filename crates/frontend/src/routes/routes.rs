use crate::domain::appointments::ui::AppointmentsPage;
use crate::domain::calendar::ui::CalendarPage;
use crate::domain::dashboard::ui::DashboardPage;
use crate::domain::patients::ui::PatientsPage;
use crate::domain::reports::ui::ReportsPage;
use crate::layout::auth::AuthLayout;
use crate::layout::dashboard::DashboardLayout;
use crate::layout::sections::{AppointmentsLayout, CalendarLayout, PatientsLayout, ReportsLayout};
use crate::system::pages::not_found::NotFound;
use crate::system::pages::sign_in::SignInPage;
use contracts::shared::routes::DASHBOARD_PATH;
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Routes};
use leptos_router::path;

/// Route table.
///
/// ```text
/// /                -> redirect to /dashboard
/// (dashboard)      DashboardLayout
///   /dashboard       DashboardPage
///   /appointments    AppointmentsLayout > AppointmentsPage
///   /calendar        CalendarLayout     > CalendarPage
///   /patients        PatientsLayout     > PatientsPage
///   /reports         ReportsLayout      > ReportsPage
/// (auth)           AuthLayout
///   /sign-in         SignInPage
/// *                NotFound
/// ```
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFound /> }>
            <Route path=path!("/") view=|| view! { <Redirect path=DASHBOARD_PATH /> } />

            <ParentRoute
                path=path!("")
                view=|| view! { <DashboardLayout><Outlet /></DashboardLayout> }
            >
                <Route path=path!("/dashboard") view=DashboardPage />
                <ParentRoute
                    path=path!("/appointments")
                    view=|| view! { <AppointmentsLayout><Outlet /></AppointmentsLayout> }
                >
                    <Route path=path!("") view=AppointmentsPage />
                </ParentRoute>
                <ParentRoute
                    path=path!("/calendar")
                    view=|| view! { <CalendarLayout><Outlet /></CalendarLayout> }
                >
                    <Route path=path!("") view=CalendarPage />
                </ParentRoute>
                <ParentRoute
                    path=path!("/patients")
                    view=|| view! { <PatientsLayout><Outlet /></PatientsLayout> }
                >
                    <Route path=path!("") view=PatientsPage />
                </ParentRoute>
                <ParentRoute
                    path=path!("/reports")
                    view=|| view! { <ReportsLayout><Outlet /></ReportsLayout> }
                >
                    <Route path=path!("") view=ReportsPage />
                </ParentRoute>
            </ParentRoute>

            <ParentRoute
                path=path!("")
                view=|| view! { <AuthLayout><Outlet /></AuthLayout> }
            >
                <Route path=path!("/sign-in") view=SignInPage />
            </ParentRoute>
        </Routes>
    }
}
