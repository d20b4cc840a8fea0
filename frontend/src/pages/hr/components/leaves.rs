use crate::api::{LeaveRequest, LeaveStatus, RecordId};
use crate::components::{cards::StatusBadge, empty_state::EmptyTableRow};
use crate::pages::hr::utils::{LeaveCounts, LeaveStatusFilter};
use leptos::*;

#[component]
pub fn LeaveRequestsPanel(
    leave_requests: Signal<Vec<LeaveRequest>>,
    counts: Signal<LeaveCounts>,
    filter: RwSignal<LeaveStatusFilter>,
    #[prop(into)] pending: Signal<bool>,
    on_decide: Callback<(RecordId, LeaveStatus)>,
) -> impl IntoView {
    let count = move |read: fn(&LeaveCounts) -> usize| move || counts.with(read);

    view! {
        <div class="leave-content" id="panel-leaves">
            <div class="content-header">
                <h2>"Leave Management"</h2>
                <div class="filter-options">
                    <select
                        prop:value=move || filter.get().as_value()
                        on:change=move |ev| filter.set(LeaveStatusFilter::from_value(&event_target_value(&ev)))
                    >
                        {LeaveStatusFilter::OPTIONS
                            .iter()
                            .map(|option| view! { <option value=option.as_value()>{option.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="leave-stats">
                <div class="leave-stat">
                    <span class="stat-count">{count(|c| c.total)}</span>
                    <span class="stat-label">"Total Requests"</span>
                </div>
                <div class="leave-stat">
                    <span class="stat-count">{count(|c| c.pending)}</span>
                    <span class="stat-label">"Pending"</span>
                </div>
                <div class="leave-stat">
                    <span class="stat-count">{count(|c| c.approved)}</span>
                    <span class="stat-label">"Approved"</span>
                </div>
                <div class="leave-stat">
                    <span class="stat-count">{count(|c| c.rejected)}</span>
                    <span class="stat-label">"Rejected"</span>
                </div>
            </div>

            <div class="leave-requests">
                <h3>"Recent Leave Requests"</h3>
                <table>
                    <thead>
                        <tr>
                            <th>"Employee"</th>
                            <th>"Leave Type"</th>
                            <th>"From"</th>
                            <th>"To"</th>
                            <th>"Reason"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || leave_requests.with(|list| !list.is_empty())
                            fallback=|| view! { <EmptyTableRow colspan=7 message="No leave requests"/> }
                        >
                            <For
                                each=move || leave_requests.get()
                                key=|request| (request.id.to_string(), request.status.to_string())
                                children=move |request| view! {
                                    <LeaveRequestRow request=request pending=pending on_decide=on_decide/>
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
fn LeaveRequestRow(
    request: LeaveRequest,
    pending: Signal<bool>,
    on_decide: Callback<(RecordId, LeaveStatus)>,
) -> impl IntoView {
    let actions = if request.status.is_pending() {
        let approve_id = request.id.clone();
        let reject_id = request.id.clone();
        view! {
            <div class="action-buttons">
                <button
                    class="action-btn approve"
                    type="button"
                    disabled=move || pending.get()
                    on:click=move |_| on_decide.call((approve_id.clone(), LeaveStatus::Approved))
                >
                    <i class="fas fa-check"></i>
                    " Approve"
                </button>
                <button
                    class="action-btn reject"
                    type="button"
                    disabled=move || pending.get()
                    on:click=move |_| on_decide.call((reject_id.clone(), LeaveStatus::Rejected))
                >
                    <i class="fas fa-times"></i>
                    " Reject"
                </button>
            </div>
        }
        .into_view()
    } else {
        view! { <span class="processed-text">"Processed"</span> }.into_view()
    };

    view! {
        <tr>
            <td>{request.requester()}</td>
            <td>{request.leave_type.clone()}</td>
            <td>{request.start_date.clone()}</td>
            <td>{request.end_date.clone()}</td>
            <td>{request.reason.clone()}</td>
            <td>
                <StatusBadge class=request.status.badge_class() label=request.status.to_string()/>
            </td>
            <td>{actions}</td>
        </tr>
    }
}
