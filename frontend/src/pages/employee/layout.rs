use crate::api::{LeaveRequest, PersonalInfo};
use crate::components::layout::PortalShell;
use crate::pages::employee::utils::{avatar_initial, pending_count, welcome_name, EmployeeTab};
use leptos::*;

#[component]
pub fn EmployeeFrame(
    active_tab: RwSignal<EmployeeTab>,
    personal_info: RwSignal<PersonalInfo>,
    leave_history: RwSignal<Vec<LeaveRequest>>,
    children: Children,
) -> impl IntoView {
    view! {
        <PortalShell
            portal_name="Employee Portal"
            portal_icon="fa-user"
            active_tab=active_tab
            user_name=Signal::derive(move || personal_info.with(welcome_name))
            user_detail=Signal::derive(|| "Employee".to_string())
            notification_count=Signal::derive(move || leave_history.with(|h| pending_count(h)).to_string())
            avatar=Signal::derive(move || personal_info.with(|p| avatar_initial(&p.name)))
        >
            {children()}
        </PortalShell>
    }
}
