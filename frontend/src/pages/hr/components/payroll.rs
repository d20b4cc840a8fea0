use crate::components::empty_state::EmptyState;
use leptos::*;

#[component]
pub fn PayrollPlaceholder() -> impl IntoView {
    view! {
        <div class="tab-content" id="panel-payroll">
            <EmptyState
                title="Payroll Management"
                description="This section contains payroll management features."
            />
        </div>
    }
}
