use crate::pages::employee::{
    components::{DashboardPanel, LeavesPanel, PayrollPanel, ProfilePanel},
    layout::EmployeeFrame,
    utils::EmployeeTab,
    view_model::use_employee_view_model,
};
use leptos::*;

#[component]
pub fn EmployeePortalPage() -> impl IntoView {
    let vm = use_employee_view_model();
    let state = vm.state;
    let on_leave_submit = Callback::new(vm.handle_leave_submit());
    let on_profile_submit = Callback::new(vm.handle_profile_submit());
    let on_profile_cancel = Callback::new(move |_: ()| vm.handle_profile_cancel());

    view! {
        <EmployeeFrame
            active_tab=vm.active_tab
            personal_info=state.personal_info
            leave_history=state.leave_history
        >
            {move || match vm.active_tab.get() {
                EmployeeTab::Dashboard => view! {
                    <DashboardPanel
                        personal_info=state.personal_info
                        leave_history=state.leave_history
                        payroll_history=state.payroll_history
                        leave_days_available=vm.leave_days_available
                        active_tab=vm.active_tab
                    />
                }
                .into_view(),
                EmployeeTab::Leaves => view! {
                    <LeavesPanel
                        form=vm.leave_form
                        message=vm.leave_message
                        leave_history=state.leave_history
                        pending=vm.leave_action.pending()
                        on_submit=on_leave_submit
                    />
                }
                .into_view(),
                EmployeeTab::Payroll => view! {
                    <PayrollPanel payroll_history=state.payroll_history/>
                }
                .into_view(),
                EmployeeTab::Profile => view! {
                    <ProfilePanel
                        form=vm.profile_form
                        pending=vm.profile_action.pending()
                        on_submit=on_profile_submit
                        on_cancel=on_profile_cancel
                    />
                }
                .into_view(),
            }}
        </EmployeeFrame>
    }
}
