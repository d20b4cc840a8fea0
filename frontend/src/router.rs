use leptos::*;
use leptos_router::*;

use crate::pages::{employee::EmployeePortalPage, home::HomePage, hr::HrDashboardPage};

pub const ROUTE_PATHS: &[&str] = &["/", "/employee", "/hr"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/employee" view=EmployeePortalPage/>
                <Route path="/hr" view=HrDashboardPage/>
            </Routes>
        </Router>
    }
}
