use crate::api::{ApiError, AttendanceRecord, Employee, LeaveRequest, LeaveStatus, RecordId};
use crate::pages::hr::{
    repository::HrRepository,
    utils::{
        apply_optional_decision_result, apply_optional_position_result, filter_attendance,
        filter_employees, filter_leave_requests, HrStats, HrTab, LeaveDecision,
        LeaveStatusFilter, PositionChange,
    },
};
use crate::state::hr::{self as hr_state, HrState};
use leptos::*;

#[derive(Clone, Copy)]
pub struct HrViewModel {
    pub active_tab: RwSignal<HrTab>,
    pub state: HrState,
    pub search_query: RwSignal<String>,
    pub leave_filter: RwSignal<LeaveStatusFilter>,
    pub attendance_month: RwSignal<String>,
    pub decision_action: Action<LeaveDecision, Result<LeaveDecision, ApiError>>,
    pub position_action: Action<PositionChange, Result<PositionChange, ApiError>>,
}

/// Sends one position change and patches that employee on success.
pub async fn submit_position_change(
    repo: &HrRepository,
    employees: RwSignal<Vec<Employee>>,
    change: PositionChange,
) -> Result<PositionChange, ApiError> {
    let result = repo
        .update_position(&change.id, &change.position)
        .await
        .map(|_| change);
    apply_optional_position_result(Some(result.clone()), employees);
    result
}

impl HrViewModel {
    pub fn new() -> Self {
        let repository = store_value(use_context::<HrRepository>().unwrap_or_default());

        let active_tab = create_rw_signal(HrTab::default());
        let state = HrState::default();
        let search_query = create_rw_signal(String::new());
        let leave_filter = create_rw_signal(LeaveStatusFilter::default());
        let attendance_month = create_rw_signal(String::new());

        let decision_action = create_action(move |decision: &LeaveDecision| {
            let repo = repository.get_value();
            let decision = decision.clone();
            async move {
                repo.decide_leave(&decision.id, decision.status.clone())
                    .await?;
                Ok::<_, ApiError>(decision)
            }
        });

        let position_action = create_action(move |change: &PositionChange| {
            let repo = repository.get_value();
            let change = change.clone();
            async move { submit_position_change(&repo, state.employees, change).await }
        });

        {
            create_effect(move |_| {
                apply_optional_decision_result(
                    decision_action.value().get(),
                    state.leave_requests,
                );
            });
        }

        {
            create_effect(move |_| {
                let repo = repository.get_value();
                spawn_local(async move {
                    hr_state::load_all(&repo, state).await;
                });
            });
        }

        Self {
            active_tab,
            state,
            search_query,
            leave_filter,
            attendance_month,
            decision_action,
            position_action,
        }
    }

    pub fn select_tab(&self, tab: HrTab) {
        self.active_tab.set(tab);
    }

    pub fn stats(&self) -> Signal<HrStats> {
        let state = self.state;
        Signal::derive(move || {
            state.employees.with(|employees| {
                state
                    .leave_requests
                    .with(|leaves| HrStats::compute(employees, leaves))
            })
        })
    }

    pub fn visible_employees(&self) -> Signal<Vec<Employee>> {
        let employees = self.state.employees;
        let query = self.search_query;
        Signal::derive(move || employees.with(|list| filter_employees(list, &query.get())))
    }

    pub fn visible_leave_requests(&self) -> Signal<Vec<LeaveRequest>> {
        let leaves = self.state.leave_requests;
        let filter = self.leave_filter;
        Signal::derive(move || leaves.with(|list| filter_leave_requests(list, filter.get())))
    }

    pub fn visible_attendance(&self) -> Signal<Vec<AttendanceRecord>> {
        let records = self.state.attendance;
        let month = self.attendance_month;
        Signal::derive(move || records.with(|list| filter_attendance(list, &month.get())))
    }

    pub fn decide(&self) -> Callback<(RecordId, LeaveStatus)> {
        let action = self.decision_action;
        Callback::new(move |(id, status): (RecordId, LeaveStatus)| {
            if action.pending().get_untracked() {
                return;
            }
            action.dispatch(LeaveDecision { id, status });
        })
    }

    pub fn change_position(&self) -> Callback<(RecordId, String)> {
        let action = self.position_action;
        Callback::new(move |(id, position): (RecordId, String)| {
            action.dispatch(PositionChange { id, position });
        })
    }
}

pub fn use_hr_view_model() -> HrViewModel {
    match use_context::<HrViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = HrViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
