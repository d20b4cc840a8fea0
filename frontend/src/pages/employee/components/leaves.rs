use crate::api::LeaveRequest;
use crate::components::{
    cards::StatusBadge, empty_state::EmptyTableRow, error::InlineErrorMessage,
    layout::SuccessMessage,
};
use crate::pages::employee::utils::{LeaveFormState, MessageState, LEAVE_TYPES};
use leptos::*;

#[component]
pub fn LeavesPanel(
    form: LeaveFormState,
    message: RwSignal<MessageState>,
    leave_history: RwSignal<Vec<LeaveRequest>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<ev::SubmitEvent>,
) -> impl IntoView {
    let leave_type = form.leave_type_signal();
    let start_signal = form.start_signal();
    let end_signal = form.end_signal();
    let reason_signal = form.reason_signal();
    let error = Signal::derive(move || message.get().error);

    view! {
        <div class="leave-content" id="panel-leaves">
            <div class="content-section">
                <h2>"Apply for Leave"</h2>
                <Show when=move || message.with(|m| m.success.is_some())>
                    <SuccessMessage message=message.get().success.unwrap_or_default()/>
                </Show>
                <InlineErrorMessage error=error/>
                <form class="leave-form" on:submit=move |ev| on_submit.call(ev)>
                    <div class="form-row">
                        <div class="form-group">
                            <label>"Leave Type"</label>
                            <select
                                name="type"
                                prop:value=move || leave_type.get()
                                on:change=move |ev| leave_type.set(event_target_value(&ev))
                            >
                                <option value="">"Select Leave Type"</option>
                                {LEAVE_TYPES
                                    .iter()
                                    .map(|kind| view! { <option value=*kind>{*kind}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>"Start Date"</label>
                            <input
                                type="date"
                                name="startDate"
                                prop:value=move || start_signal.get()
                                on:input=move |ev| start_signal.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"End Date"</label>
                            <input
                                type="date"
                                name="endDate"
                                prop:value=move || end_signal.get()
                                on:input=move |ev| end_signal.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div class="form-row">
                        <div class="form-group full-width">
                            <label>"Reason"</label>
                            <textarea
                                name="reason"
                                prop:value=move || reason_signal.get()
                                on:input=move |ev| reason_signal.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                    </div>
                    <button type="submit" class="submit-btn" disabled=move || pending.get()>
                        {move || if pending.get() { "Submitting..." } else { "Submit Leave Request" }}
                    </button>
                </form>
            </div>

            <div class="content-section">
                <h2>"Leave History"</h2>
                <div class="leave-history">
                    <table>
                        <thead>
                            <tr>
                                <th>"Type"</th>
                                <th>"Start Date"</th>
                                <th>"End Date"</th>
                                <th>"Reason"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show
                                when=move || leave_history.with(|h| !h.is_empty())
                                fallback=|| view! { <EmptyTableRow colspan=5 message="No leave requests yet"/> }
                            >
                                <For
                                    each=move || leave_history.get()
                                    key=|leave| (leave.id.to_string(), leave.status.to_string())
                                    children=move |leave| {
                                        view! {
                                            <tr>
                                                <td>{leave.leave_type.clone()}</td>
                                                <td>{leave.start_date.clone()}</td>
                                                <td>{leave.end_date.clone()}</td>
                                                <td>{leave.reason.clone()}</td>
                                                <td>
                                                    <StatusBadge
                                                        class=leave.status.badge_class()
                                                        label=leave.status.to_string()
                                                    />
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
