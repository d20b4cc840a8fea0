use crate::components::cards::StatCard;
use crate::pages::hr::utils::{HrStats, HrTab};
use leptos::*;

#[component]
pub fn OverviewPanel(stats: Signal<HrStats>, active_tab: RwSignal<HrTab>) -> impl IntoView {
    let stat = move |read: fn(&HrStats) -> usize| Signal::derive(move || stats.with(read).to_string());

    view! {
        <div class="dashboard-content" id="panel-overview">
            <div class="stats-cards">
                <StatCard icon="fa-users" label="Total Employees" value=stat(|s| s.total_employees)/>
                <StatCard
                    icon="fa-user-check"
                    label="Active Employees"
                    value=stat(|s| s.active_employees)
                    tone="success"
                />
                <StatCard icon="fa-calendar-minus" label="On Leave" value=stat(|s| s.on_leave) tone="warning"/>
                <StatCard icon="fa-building" label="Departments" value=stat(|s| s.departments)/>
                <StatCard
                    icon="fa-calendar-day"
                    label="Pending Leaves"
                    value=stat(|s| s.pending_leaves)
                    tone="danger"
                />
            </div>

            <div class="pending-actions">
                <h2>"Pending Actions"</h2>
                <div class="action-cards">
                    <div class="action-card">
                        <div class="action-icon">
                            <i class="fas fa-calendar-day"></i>
                        </div>
                        <div class="action-details">
                            <h3>{move || stats.with(|s| s.pending_leaves)}</h3>
                            <p>"Pending Leave Requests"</p>
                            <button type="button" on:click=move |_| active_tab.set(HrTab::Leaves)>
                                "Review Now"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
