use crate::pages::hr::{
    components::{
        AttendancePanel, EmployeesPanel, LeaveRequestsPanel, OverviewPanel, PayrollPlaceholder,
    },
    layout::HrFrame,
    utils::{attendance_months, HrTab, LeaveCounts},
    view_model::use_hr_view_model,
};
use leptos::*;

#[component]
pub fn HrDashboardPage() -> impl IntoView {
    let vm = use_hr_view_model();
    let state = vm.state;
    let stats = vm.stats();
    let visible_employees = vm.visible_employees();
    let visible_leaves = vm.visible_leave_requests();
    let visible_attendance = vm.visible_attendance();
    let leave_counts = Signal::derive(move || state.leave_requests.with(|l| LeaveCounts::compute(l)));
    let months = Signal::derive(move || state.attendance.with(|r| attendance_months(r)));
    let on_decide = vm.decide();
    let on_position_change = vm.change_position();

    view! {
        <HrFrame
            active_tab=vm.active_tab
            profile=state.profile
            stats=stats
            search=vm.search_query
        >
            {move || match vm.active_tab.get() {
                HrTab::Overview => view! {
                    <OverviewPanel stats=stats active_tab=vm.active_tab/>
                }
                .into_view(),
                HrTab::Employees => view! {
                    <EmployeesPanel
                        employees=visible_employees
                        on_position_change=on_position_change
                    />
                }
                .into_view(),
                HrTab::Attendance => view! {
                    <AttendancePanel
                        records=visible_attendance
                        months=months
                        selected_month=vm.attendance_month
                    />
                }
                .into_view(),
                HrTab::Leaves => view! {
                    <LeaveRequestsPanel
                        leave_requests=visible_leaves
                        counts=leave_counts
                        filter=vm.leave_filter
                        pending=vm.decision_action.pending()
                        on_decide=on_decide
                    />
                }
                .into_view(),
                HrTab::Payroll => view! { <PayrollPlaceholder/> }.into_view(),
            }}
        </HrFrame>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::{ApiClient, ApiService, HrProfile};
    use crate::components::layout::PortalTab;
    use crate::pages::hr::{repository::HrRepository, view_model::HrViewModel};
    use crate::test_support::ssr::render_to_string;

    const PANEL_IDS: [&str; 5] = [
        "panel-overview",
        "panel-employees",
        "panel-attendance",
        "panel-leaves",
        "panel-payroll",
    ];

    fn render_tab(server: &MockServer, tab: HrTab) -> String {
        let base = server.url("/api");
        render_to_string(move || {
            provide_context(HrRepository::with_token(
                ApiClient::new_with_base_url(ApiService::Hr, base),
                "token",
            ));
            let vm = HrViewModel::new();
            vm.select_tab(tab);
            provide_context(vm);
            view! { <HrDashboardPage/> }
        })
    }

    #[test]
    fn exactly_one_panel_renders_per_tab() {
        let server = MockServer::start();
        for tab in HrTab::all() {
            let html = render_tab(&server, *tab);
            let expected = format!("panel-{}", tab.id());
            let rendered: Vec<&str> = PANEL_IDS
                .iter()
                .copied()
                .filter(|id| html.contains(id))
                .collect();
            assert_eq!(rendered, vec![expected.as_str()]);
            assert!(html.contains(tab.title()));
        }
        assert_eq!(server.total_hits(), 0);
    }

    #[test]
    fn header_shows_default_hr_profile_and_search() {
        let server = MockServer::start();
        let html = render_tab(&server, HrTab::Overview);
        let profile = HrProfile::default();
        assert!(html.contains(&profile.name));
        assert!(html.contains(&profile.email));
        assert!(html.contains("search-box"));
        assert!(html.contains("Leave Requests"));
    }
}
