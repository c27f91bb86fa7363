use super::footer::Footer;
use super::header::Navbar;
use super::left::Sidebar;
use super::meta::use_route_meta;
use contracts::shared::routes::RouteGroup;
use leptos::prelude::*;

/// Dashboard chrome.
///
/// ```text
/// +-----------+------------------------------+
/// |           |  Navbar                      |
/// |  Sidebar  +------------------------------+
/// |           |  children                    |
/// |           +------------------------------+
/// |           |  Footer                      |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    use_route_meta(RouteGroup::Dashboard);

    view! {
        <div class="app-layout">
            <Sidebar />
            <div class="app-body">
                <Navbar />
                <main data-zone="center" class="app-main">
                    {children()}
                </main>
                <Footer />
            </div>
        </div>
    }
}
