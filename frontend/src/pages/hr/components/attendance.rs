use crate::api::AttendanceRecord;
use crate::components::{cards::StatusBadge, empty_state::EmptyTableRow};
use crate::pages::hr::utils::{month_label, status_badge_class};
use leptos::*;

#[component]
pub fn AttendancePanel(
    records: Signal<Vec<AttendanceRecord>>,
    months: Signal<Vec<String>>,
    selected_month: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="attendance-content" id="panel-attendance">
            <div class="content-header">
                <h2>"Attendance Records"</h2>
                <div class="filter-options">
                    <select
                        prop:value=move || selected_month.get()
                        on:change=move |ev| selected_month.set(event_target_value(&ev))
                    >
                        <option value="">"All months"</option>
                        {move || {
                            months
                                .get()
                                .into_iter()
                                .map(|month| view! { <option value=month.clone()>{month_label(&month)}</option> })
                                .collect_view()
                        }}
                    </select>
                </div>
            </div>

            <div class="attendance-table">
                <table>
                    <thead>
                        <tr>
                            <th>"Employee"</th>
                            <th>"Date"</th>
                            <th>"Status"</th>
                            <th>"Check In"</th>
                            <th>"Check Out"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || records.with(|list| !list.is_empty())
                            fallback=|| view! { <EmptyTableRow colspan=6 message="No attendance records"/> }
                        >
                            <For
                                each=move || records.get()
                                key=|record| record.id.to_string()
                                children=move |record| {
                                    view! {
                                        <tr>
                                            <td>{record.attendee()}</td>
                                            <td>{record.date.clone()}</td>
                                            <td>
                                                <StatusBadge
                                                    class=status_badge_class(&record.status)
                                                    label=record.status.clone()
                                                />
                                            </td>
                                            <td>{record.check_in.clone().unwrap_or_default()}</td>
                                            <td>{record.check_out.clone().unwrap_or_default()}</td>
                                            <td>
                                                <div class="action-buttons">
                                                    <button class="action-btn edit" type="button" title="Edit">
                                                        <i class="fas fa-edit"></i>
                                                    </button>
                                                </div>
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
    }
}
