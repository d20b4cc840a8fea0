use crate::api::{ApiError, CreateLeaveRequest, LeaveRequest, PayrollRecord, PersonalInfo};
use crate::components::layout::PortalTab;
use crate::utils::dialog;
use leptos::*;
use serde_json::json;

pub const LEAVE_TYPES: [&str; 4] = ["Vacation", "Sick Leave", "Personal", "Emergency"];

pub const LEAVE_SUBMITTED_MESSAGE: &str = "Leave request submitted successfully!";
pub const PROFILE_UPDATED_MESSAGE: &str = "Personal information updated successfully!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmployeeTab {
    #[default]
    Dashboard,
    Leaves,
    Payroll,
    Profile,
}

impl PortalTab for EmployeeTab {
    fn all() -> &'static [Self] {
        &[
            EmployeeTab::Dashboard,
            EmployeeTab::Leaves,
            EmployeeTab::Payroll,
            EmployeeTab::Profile,
        ]
    }

    fn id(self) -> &'static str {
        match self {
            EmployeeTab::Dashboard => "dashboard",
            EmployeeTab::Leaves => "leaves",
            EmployeeTab::Payroll => "payroll",
            EmployeeTab::Profile => "profile",
        }
    }

    fn label(self) -> &'static str {
        match self {
            EmployeeTab::Dashboard => "Dashboard",
            EmployeeTab::Leaves => "Leave Management",
            EmployeeTab::Payroll => "Payroll",
            EmployeeTab::Profile => "Profile",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            EmployeeTab::Dashboard => "fa-home",
            EmployeeTab::Leaves => "fa-calendar-alt",
            EmployeeTab::Payroll => "fa-money-bill-wave",
            EmployeeTab::Profile => "fa-user-cog",
        }
    }

    fn title(self) -> &'static str {
        match self {
            EmployeeTab::Dashboard => "Employee Dashboard",
            EmployeeTab::Leaves => "Leave Management",
            EmployeeTab::Payroll => "Payroll Information",
            EmployeeTab::Profile => "Personal Profile",
        }
    }
}

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    leave_type: RwSignal<String>,
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    reason: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            leave_type: create_rw_signal(String::new()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl LeaveFormState {
    pub fn leave_type_signal(&self) -> RwSignal<String> {
        self.leave_type
    }

    pub fn start_signal(&self) -> RwSignal<String> {
        self.start_date
    }

    pub fn end_signal(&self) -> RwSignal<String> {
        self.end_date
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn reset(&self) {
        self.leave_type.set(String::new());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.reason.set(String::new());
    }

    /// All four fields are required. Dates are passed through as entered.
    pub fn to_payload(self) -> Result<CreateLeaveRequest, ApiError> {
        let leave_type = self.leave_type.get_untracked();
        let start_date = self.start_date.get_untracked();
        let end_date = self.end_date.get_untracked();
        let reason = self.reason.get_untracked();

        let missing: Vec<&str> = [
            ("Leave Type", &leave_type),
            ("Start Date", &start_date),
            ("End Date", &end_date),
            ("Reason", &reason),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect();
        if !missing.is_empty() {
            return Err(
                ApiError::validation("Please fill in all required fields")
                    .with_details(json!({ "fields": missing })),
            );
        }

        Ok(CreateLeaveRequest {
            leave_type,
            start_date,
            end_date,
            reason,
        })
    }
}

/// Editable copy of the personal information. The confirmed values live in
/// the page state; the draft is what the inputs are bound to.
#[derive(Clone, Copy)]
pub struct ProfileFormState {
    draft: RwSignal<PersonalInfo>,
    is_editing: RwSignal<bool>,
}

impl Default for ProfileFormState {
    fn default() -> Self {
        Self {
            draft: create_rw_signal(PersonalInfo::default()),
            is_editing: create_rw_signal(false),
        }
    }
}

impl ProfileFormState {
    pub fn draft_signal(&self) -> RwSignal<PersonalInfo> {
        self.draft
    }

    pub fn editing_signal(&self) -> RwSignal<bool> {
        self.is_editing
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing.get()
    }

    pub fn load(&self, confirmed: PersonalInfo) {
        self.draft.set(confirmed);
    }

    pub fn begin_edit(&self) {
        self.is_editing.set(true);
    }

    pub fn cancel(&self, confirmed: PersonalInfo) {
        self.draft.set(confirmed);
        self.is_editing.set(false);
    }

    pub fn set_name(&self, value: String) {
        self.draft.update(|info| info.name = value);
    }

    pub fn set_email(&self, value: String) {
        self.draft.update(|info| info.email = value);
    }

    pub fn set_phone(&self, value: String) {
        self.draft.update(|info| info.phone = value);
    }

    pub fn to_payload(&self) -> PersonalInfo {
        self.draft.get_untracked()
    }
}

#[derive(Clone, Default)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: ApiError) {
        self.error = Some(msg);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

pub fn pending_count(history: &[LeaveRequest]) -> usize {
    history.iter().filter(|leave| leave.status.is_pending()).count()
}

/// Salary of the most recent payroll record, `-` when there is none.
pub fn current_salary_label(payroll: &[PayrollRecord]) -> String {
    payroll
        .last()
        .map(PayrollRecord::salary_label)
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| "-".to_string())
}

pub fn welcome_name(info: &PersonalInfo) -> String {
    if info.username.is_empty() {
        "Loading...".to_string()
    } else {
        info.username.clone()
    }
}

pub fn avatar_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

pub fn apply_optional_leave_result(
    result: Option<Result<LeaveRequest, ApiError>>,
    leave_history: RwSignal<Vec<LeaveRequest>>,
    form: LeaveFormState,
    message: RwSignal<MessageState>,
) {
    if let Some(result) = result {
        match result {
            Ok(created) => {
                leave_history.update(|history| history.push(created));
                form.reset();
                message.update(|msg| msg.set_success(LEAVE_SUBMITTED_MESSAGE));
                dialog::alert(LEAVE_SUBMITTED_MESSAGE);
            }
            Err(err) => log::error!("Error submitting leave request: {}", err),
        }
    }
}

pub fn apply_optional_profile_result(
    result: Option<Result<PersonalInfo, ApiError>>,
    personal_info: RwSignal<PersonalInfo>,
    profile_form: ProfileFormState,
) {
    if let Some(result) = result {
        match result {
            Ok(updated) => {
                personal_info.set(updated.clone());
                profile_form.cancel(updated);
                dialog::alert(PROFILE_UPDATED_MESSAGE);
            }
            Err(err) => log::error!("Error updating personal information: {}", err),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{LeaveStatus, RecordId};
    use crate::test_support::ssr::with_runtime;
    use serde_json::Value;

    fn leave(id: i64, status: LeaveStatus) -> LeaveRequest {
        LeaveRequest {
            id: RecordId::Number(id),
            leave_type: "Vacation".into(),
            start_date: "2025-03-01".into(),
            end_date: "2025-03-02".into(),
            reason: "rest".into(),
            status,
            emp_id: None,
            employee: None,
        }
    }

    fn fill(form: LeaveFormState) {
        form.leave_type_signal().set("Sick Leave".into());
        form.start_signal().set("2025-03-10".into());
        form.end_signal().set("2025-03-11".into());
        form.reason_signal().set("flu".into());
    }

    #[test]
    fn tab_metadata_matches_headings() {
        let titles: Vec<_> = EmployeeTab::all().iter().map(|t| t.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Employee Dashboard",
                "Leave Management",
                "Payroll Information",
                "Personal Profile"
            ]
        );
        assert_eq!(EmployeeTab::default(), EmployeeTab::Dashboard);
    }

    #[test]
    fn leave_form_reports_each_blank_field() {
        with_runtime(|| {
            let form = LeaveFormState::default();
            form.leave_type_signal().set("Vacation".into());
            form.reason_signal().set("   ".into());
            let err = form.to_payload().unwrap_err();
            assert_eq!(err.code, "VALIDATION_ERROR");
            assert_eq!(
                err.details.and_then(|d| d.get("fields").cloned()),
                Some(json!(["Start Date", "End Date", "Reason"]))
            );
        });
    }

    #[test]
    fn leave_form_accepts_any_date_order() {
        with_runtime(|| {
            let form = LeaveFormState::default();
            fill(form);
            form.end_signal().set("2025-03-01".into());
            let payload = form.to_payload().unwrap();
            assert_eq!(payload.leave_type, "Sick Leave");
            assert_eq!(payload.end_date, "2025-03-01");
        });
    }

    #[test]
    fn pending_count_only_counts_pending() {
        let history = vec![
            leave(1, LeaveStatus::Pending),
            leave(2, LeaveStatus::Approved),
            leave(3, LeaveStatus::Pending),
            leave(4, LeaveStatus::Rejected),
        ];
        assert_eq!(pending_count(&history), 2);
        assert_eq!(pending_count(&[]), 0);
    }

    #[test]
    fn current_salary_uses_latest_record() {
        let payroll = vec![
            PayrollRecord {
                id: RecordId::Number(1),
                month: "January".into(),
                salary: Value::from("$4,800"),
                status: "Paid".into(),
            },
            PayrollRecord {
                id: RecordId::Number(2),
                month: "February".into(),
                salary: Value::from(5000),
                status: "Pending".into(),
            },
        ];
        assert_eq!(current_salary_label(&payroll), "5000");
        assert_eq!(current_salary_label(&[]), "-");
    }

    #[test]
    fn welcome_and_avatar_placeholders() {
        let mut info = PersonalInfo::default();
        assert_eq!(welcome_name(&info), "Loading...");
        info.username = "ana".into();
        assert_eq!(welcome_name(&info), "ana");
        assert_eq!(avatar_initial("ana souza"), "A");
        assert_eq!(avatar_initial(""), "");
    }

    #[test]
    fn successful_leave_result_appends_and_resets() {
        with_runtime(|| {
            let history = create_rw_signal(vec![leave(1, LeaveStatus::Approved)]);
            let form = LeaveFormState::default();
            let message = create_rw_signal(MessageState::default());
            fill(form);

            apply_optional_leave_result(
                Some(Ok(leave(2, LeaveStatus::Pending))),
                history,
                form,
                message,
            );

            assert_eq!(history.get().len(), 2);
            assert_eq!(history.get()[1].id, RecordId::Number(2));
            assert!(form.start_signal().get().is_empty());
            assert!(form.leave_type_signal().get().is_empty());
            assert_eq!(
                message.get().success.as_deref(),
                Some(LEAVE_SUBMITTED_MESSAGE)
            );
        });
    }

    #[test]
    fn failed_leave_result_keeps_form_values() {
        with_runtime(|| {
            let history = create_rw_signal(Vec::new());
            let form = LeaveFormState::default();
            let message = create_rw_signal(MessageState::default());
            fill(form);

            apply_optional_leave_result(
                Some(Err(ApiError::request_failed("offline"))),
                history,
                form,
                message,
            );

            assert!(history.get().is_empty());
            assert_eq!(form.reason_signal().get(), "flu");
            assert!(message.get().success.is_none());
        });
    }

    #[test]
    fn profile_cancel_restores_confirmed_values() {
        with_runtime(|| {
            let confirmed = PersonalInfo {
                name: "Ana".into(),
                phone: "555-0100".into(),
                ..Default::default()
            };
            let form = ProfileFormState::default();
            form.load(confirmed.clone());
            form.begin_edit();
            form.set_phone("000".into());
            assert_eq!(form.to_payload().phone, "000");

            form.cancel(confirmed.clone());
            assert!(!form.is_editing());
            assert_eq!(form.draft_signal().get(), confirmed);
        });
    }

    #[test]
    fn profile_result_failure_stays_in_edit_mode() {
        with_runtime(|| {
            let personal_info = create_rw_signal(PersonalInfo::default());
            let form = ProfileFormState::default();
            form.begin_edit();
            form.set_name("Edited".into());

            apply_optional_profile_result(
                Some(Err(ApiError::from_status(500, "oops"))),
                personal_info,
                form,
            );
            assert!(form.is_editing());
            assert_eq!(form.to_payload().name, "Edited");
            assert_eq!(personal_info.get(), PersonalInfo::default());

            let saved = form.to_payload();
            apply_optional_profile_result(Some(Ok(saved.clone())), personal_info, form);
            assert!(!form.is_editing());
            assert_eq!(personal_info.get(), saved);
        });
    }
}
