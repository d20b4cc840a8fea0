use crate::{
    api::{ApiError, LeaveRequest, PayrollRecord, PersonalInfo},
    pages::employee::repository::EmployeeRepository,
};
use leptos::*;

/// Records fetched for the employee portal. Each signal is written by exactly
/// one fetcher and at most one form handler.
#[derive(Clone, Copy)]
pub struct EmployeeState {
    pub personal_info: RwSignal<PersonalInfo>,
    pub leave_history: RwSignal<Vec<LeaveRequest>>,
    pub payroll_history: RwSignal<Vec<PayrollRecord>>,
}

impl Default for EmployeeState {
    fn default() -> Self {
        Self {
            personal_info: create_rw_signal(PersonalInfo::default()),
            leave_history: create_rw_signal(Vec::new()),
            payroll_history: create_rw_signal(Vec::new()),
        }
    }
}

pub async fn load_leave_history(
    repo: &EmployeeRepository,
    leave_history: RwSignal<Vec<LeaveRequest>>,
) -> Result<(), ApiError> {
    let history = repo.load_leave_history().await?;
    leave_history.set(history);
    Ok(())
}

pub async fn load_payroll_history(
    repo: &EmployeeRepository,
    payroll_history: RwSignal<Vec<PayrollRecord>>,
) -> Result<(), ApiError> {
    let history = repo.load_payroll_history().await?;
    payroll_history.set(history);
    Ok(())
}

pub async fn load_profile(
    repo: &EmployeeRepository,
    personal_info: RwSignal<PersonalInfo>,
) -> Result<PersonalInfo, ApiError> {
    let profile = repo.load_profile().await?;
    personal_info.set(profile.clone());
    Ok(profile)
}

/// Runs the mount-time fetchers concurrently. A failing fetcher is logged and
/// leaves its signal as it was; the others are unaffected.
pub async fn load_all(repo: &EmployeeRepository, state: EmployeeState) -> Option<PersonalInfo> {
    let (leaves, payroll, profile) = futures::join!(
        load_leave_history(repo, state.leave_history),
        load_payroll_history(repo, state.payroll_history),
        load_profile(repo, state.personal_info),
    );
    if let Err(err) = leaves {
        log::error!("Error fetching leave history: {}", err);
    }
    if let Err(err) = payroll {
        log::error!("Error fetching payroll history: {}", err);
    }
    match profile {
        Ok(profile) => Some(profile),
        Err(err) => {
            log::error!("Error fetching profile: {}", err);
            None
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::{ApiClient, ApiService, LeaveStatus, RecordId};
    use serde_json::json;

    fn repo(server: &MockServer) -> EmployeeRepository {
        EmployeeRepository::with_employee_id(
            ApiClient::new_with_base_url(ApiService::Employee, server.url("/api")),
            "0423",
        )
    }

    #[tokio::test]
    async fn load_all_populates_each_signal() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/employees/leaves");
            then.status(200).json_body(json!([{
                "id": 11,
                "type": "Vacation",
                "startDate": "2025-02-01",
                "endDate": "2025-02-03",
                "reason": "trip",
                "status": "Pending"
            }]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/employees/payroll");
            then.status(200).json_body(json!([
                { "id": 1, "month": "January", "salary": "$5,000", "status": "Paid" }
            ]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/employees/profile");
            then.status(200).json_body(json!({
                "name": "Ana Souza",
                "email": "ana@example.com",
                "mobile": "555-0100",
                "username": "ana",
                "empId": "0423"
            }));
        });

        let runtime = create_runtime();
        let state = EmployeeState::default();
        let profile = load_all(&repo(&server), state).await;

        assert_eq!(profile.map(|p| p.phone), Some("555-0100".to_string()));
        let history = state.leave_history.get();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, RecordId::Number(11));
        assert_eq!(history[0].status, LeaveStatus::Pending);
        assert_eq!(state.payroll_history.get()[0].salary_label(), "$5,000");
        assert_eq!(state.personal_info.get().username, "ana");
        runtime.dispose();
    }

    #[tokio::test]
    async fn failing_fetcher_leaves_prior_state_untouched() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/employees/leaves");
            then.status(500).json_body(json!({ "message": "database down" }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/employees/payroll");
            then.status(200).json_body(json!([
                { "id": 1, "month": "January", "salary": 5000, "status": "Paid" }
            ]));
        });
        // No profile route: the request is rejected like a network failure.

        let runtime = create_runtime();
        let state = EmployeeState::default();
        let profile = load_all(&repo(&server), state).await;

        assert!(profile.is_none());
        assert!(state.leave_history.get().is_empty());
        assert_eq!(state.personal_info.get(), PersonalInfo::default());
        assert_eq!(state.payroll_history.get().len(), 1);
        assert_eq!(server.total_hits(), 3);
        runtime.dispose();
    }
}
