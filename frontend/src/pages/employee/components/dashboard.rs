use crate::api::{LeaveRequest, PayrollRecord, PersonalInfo};
use crate::components::cards::StatCard;
use crate::pages::employee::utils::{current_salary_label, pending_count, welcome_name, EmployeeTab};
use leptos::*;

#[component]
pub fn DashboardPanel(
    personal_info: RwSignal<PersonalInfo>,
    leave_history: RwSignal<Vec<LeaveRequest>>,
    payroll_history: RwSignal<Vec<PayrollRecord>>,
    leave_days_available: RwSignal<u32>,
    active_tab: RwSignal<EmployeeTab>,
) -> impl IntoView {
    let quick_action = move |tab: EmployeeTab, icon: &'static str, label: &'static str| {
        view! {
            <button class="action-btn" type="button" on:click=move |_| active_tab.set(tab)>
                <i class=format!("fas {}", icon)></i>
                <span>{label}</span>
            </button>
        }
    };

    view! {
        <div class="dashboard-content" id="panel-dashboard">
            <div class="welcome-card">
                <h2>{move || format!("Welcome, {}!", personal_info.with(welcome_name))}</h2>
                <p>"Here's a quick overview of your information"</p>
            </div>

            <div class="stats-cards">
                <StatCard
                    icon="fa-calendar-check"
                    label="Leave Days Available"
                    value=Signal::derive(move || leave_days_available.get().to_string())
                />
                <StatCard
                    icon="fa-calendar-times"
                    label="Pending Leave Requests"
                    value=Signal::derive(move || leave_history.with(|h| pending_count(h)).to_string())
                    tone="warning"
                />
                <StatCard
                    icon="fa-money-bill-wave"
                    label="Current Salary"
                    value=Signal::derive(move || payroll_history.with(|p| current_salary_label(p)))
                    tone="success"
                />
            </div>

            <div class="quick-actions">
                <h2>"Quick Actions"</h2>
                <div class="action-buttons">
                    {quick_action(EmployeeTab::Leaves, "fa-calendar-plus", "Apply for Leave")}
                    {quick_action(EmployeeTab::Payroll, "fa-file-invoice-dollar", "View Payslips")}
                    {quick_action(EmployeeTab::Profile, "fa-user-edit", "Update Profile")}
                </div>
            </div>
        </div>
    }
}
