use crate::api::PayrollRecord;
use crate::components::{cards::StatusBadge, empty_state::EmptyTableRow};
use leptos::*;

#[component]
pub fn PayrollPanel(payroll_history: RwSignal<Vec<PayrollRecord>>) -> impl IntoView {
    view! {
        <div class="payroll-content" id="panel-payroll">
            <div class="content-section">
                <h2>"Payroll History"</h2>
                <div class="payroll-history">
                    <table>
                        <thead>
                            <tr>
                                <th>"Month"</th>
                                <th>"Salary"</th>
                                <th>"Status"</th>
                                <th>"Payslip"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show
                                when=move || payroll_history.with(|p| !p.is_empty())
                                fallback=|| view! { <EmptyTableRow colspan=4 message="No payroll records yet"/> }
                            >
                                <For
                                    each=move || payroll_history.get()
                                    key=|record| record.id.to_string()
                                    children=move |record| {
                                        view! {
                                            <tr>
                                                <td>{record.month.clone()}</td>
                                                <td>{record.salary_label()}</td>
                                                <td>
                                                    <StatusBadge
                                                        class=record.status.to_lowercase()
                                                        label=record.status.clone()
                                                    />
                                                </td>
                                                <td>
                                                    <button class="view-btn" type="button">
                                                        <i class="fas fa-download"></i>
                                                        " Download"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </Show>
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
