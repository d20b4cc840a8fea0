use crate::api::{ApiError, CreateLeaveRequest, LeaveRequest, PersonalInfo};
use crate::config::{self, DEFAULT_LEAVE_DAYS_AVAILABLE};
use crate::pages::employee::{
    repository::EmployeeRepository,
    utils::{
        apply_optional_leave_result, apply_optional_profile_result, EmployeeTab, LeaveFormState,
        MessageState, ProfileFormState,
    },
};
use crate::state::employee::{self as employee_state, EmployeeState};
use leptos::{ev::SubmitEvent, *};

#[derive(Clone, Copy)]
pub struct EmployeeViewModel {
    pub active_tab: RwSignal<EmployeeTab>,
    pub state: EmployeeState,
    pub leave_form: LeaveFormState,
    pub leave_message: RwSignal<MessageState>,
    pub profile_form: ProfileFormState,
    pub leave_days_available: RwSignal<u32>,
    pub leave_action: Action<CreateLeaveRequest, Result<LeaveRequest, ApiError>>,
    pub profile_action: Action<PersonalInfo, Result<PersonalInfo, ApiError>>,
}

/// Validates the leave form. A blank field is reported inline and nothing is
/// returned for dispatch.
fn prepare_leave_submission(
    form: LeaveFormState,
    message: RwSignal<MessageState>,
) -> Option<CreateLeaveRequest> {
    match form.to_payload() {
        Ok(payload) => {
            message.update(|msg| msg.clear());
            Some(payload)
        }
        Err(err) => {
            message.update(|msg| msg.set_error(err));
            None
        }
    }
}

/// Mount-time load: the three fetchers, then the profile draft and the
/// configured leave allowance.
pub async fn load_initial(
    repo: &EmployeeRepository,
    state: EmployeeState,
    profile_form: ProfileFormState,
    leave_days_available: RwSignal<u32>,
) {
    if let Some(profile) = employee_state::load_all(repo, state).await {
        profile_form.load(profile);
    }
    let runtime = config::await_runtime_config().await;
    leave_days_available.set(runtime.leave_days());
}

impl EmployeeViewModel {
    pub fn new() -> Self {
        let repository = store_value(use_context::<EmployeeRepository>().unwrap_or_default());

        let active_tab = create_rw_signal(EmployeeTab::default());
        let state = EmployeeState::default();
        let leave_form = LeaveFormState::default();
        let leave_message = create_rw_signal(MessageState::default());
        let profile_form = ProfileFormState::default();
        let leave_days_available = create_rw_signal(DEFAULT_LEAVE_DAYS_AVAILABLE);

        let leave_action = create_action(move |payload: &CreateLeaveRequest| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.submit_leave(payload).await }
        });

        let profile_action = create_action(move |info: &PersonalInfo| {
            let repo = repository.get_value();
            let info = info.clone();
            async move { repo.update_profile(info).await }
        });

        {
            create_effect(move |_| {
                apply_optional_leave_result(
                    leave_action.value().get(),
                    state.leave_history,
                    leave_form,
                    leave_message,
                );
            });
        }

        {
            create_effect(move |_| {
                apply_optional_profile_result(
                    profile_action.value().get(),
                    state.personal_info,
                    profile_form,
                );
            });
        }

        {
            create_effect(move |_| {
                let repo = repository.get_value();
                spawn_local(async move {
                    load_initial(&repo, state, profile_form, leave_days_available).await;
                });
            });
        }

        Self {
            active_tab,
            state,
            leave_form,
            leave_message,
            profile_form,
            leave_days_available,
            leave_action,
            profile_action,
        }
    }

    pub fn select_tab(&self, tab: EmployeeTab) {
        self.active_tab.set(tab);
    }

    pub fn handle_leave_submit(&self) -> impl Fn(SubmitEvent) {
        let leave_action = self.leave_action;
        let leave_form = self.leave_form;
        let leave_message = self.leave_message;
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if leave_action.pending().get_untracked() {
                return;
            }
            if let Some(payload) = prepare_leave_submission(leave_form, leave_message) {
                leave_action.dispatch(payload);
            }
        }
    }

    pub fn handle_profile_submit(&self) -> impl Fn(SubmitEvent) {
        let profile_action = self.profile_action;
        let profile_form = self.profile_form;
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if profile_action.pending().get_untracked() || !profile_form.is_editing() {
                return;
            }
            profile_action.dispatch(profile_form.to_payload());
        }
    }

    pub fn handle_profile_cancel(&self) {
        self.profile_form
            .cancel(self.state.personal_info.get_untracked());
    }
}

pub fn use_employee_view_model() -> EmployeeViewModel {
    match use_context::<EmployeeViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = EmployeeViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
