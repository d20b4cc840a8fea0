use crate::api::{Employee, RecordId};
use crate::components::{cards::StatusBadge, empty_state::EmptyTableRow};
use crate::pages::hr::utils::{avatar_initial, employee_status_label, status_badge_class, POSITION_OPTIONS};
use leptos::*;

#[component]
pub fn EmployeesPanel(
    employees: Signal<Vec<Employee>>,
    on_position_change: Callback<(RecordId, String)>,
) -> impl IntoView {
    view! {
        <div class="employees-content" id="panel-employees">
            <div class="content-header">
                <h2>"Employee Directory"</h2>
            </div>
            <div class="employees-table">
                <table>
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Department"</th>
                            <th>"Position"</th>
                            <th>"Status"</th>
                            <th>"Join Date"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || employees.with(|list| !list.is_empty())
                            fallback=|| view! { <EmptyTableRow colspan=7 message="No employees found"/> }
                        >
                            <For
                                each=move || employees.get()
                                key=|employee| (employee.id.to_string(), employee.position.clone())
                                children=move |employee| view! {
                                    <EmployeeRow employee=employee on_position_change=on_position_change/>
                                }
                            />
                        </Show>
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn EmployeeRow(employee: Employee, on_position_change: Callback<(RecordId, String)>) -> impl IntoView {
    let id = employee.id.clone();
    let current = employee.position.clone();
    let listed = POSITION_OPTIONS.contains(&current.as_str());

    view! {
        <tr>
            <td>{employee.id.to_string()}</td>
            <td>
                <div class="employee-info">
                    <div class="avatar">{avatar_initial(&employee.name)}</div>
                    <div>
                        <div class="name">{employee.name.clone()}</div>
                        <div class="email">{employee.email.clone()}</div>
                    </div>
                </div>
            </td>
            <td>{employee.department.clone()}</td>
            <td>
                <select
                    prop:value=current.clone()
                    on:change=move |ev| on_position_change.call((id.clone(), event_target_value(&ev)))
                >
                    {(!listed).then(|| view! { <option value=current.clone()>{current.clone()}</option> })}
                    {POSITION_OPTIONS
                        .iter()
                        .map(|position| view! {
                            <option value=*position selected={*position == employee.position}>{*position}</option>
                        })
                        .collect_view()}
                </select>
            </td>
            <td>
                <StatusBadge
                    class=status_badge_class(&employee.status)
                    label=employee_status_label(&employee.status)
                />
            </td>
            <td>{employee.join_date.clone()}</td>
            <td>
                <div class="action-buttons">
                    <button class="action-btn view" type="button" title="View">
                        <i class="fas fa-eye"></i>
                    </button>
                </div>
            </td>
        </tr>
    }
}
