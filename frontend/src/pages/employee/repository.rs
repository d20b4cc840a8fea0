use crate::api::{
    ApiClient, ApiError, ApiService, CreateLeaveRequest, LeaveRequest, PayrollRecord,
    PersonalInfo, UpdateProfileRequest,
};
use crate::config;
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeeRepository {
    client: Rc<ApiClient>,
    employee_id: Option<String>,
}

impl Default for EmployeeRepository {
    fn default() -> Self {
        Self::new(ApiClient::new(ApiService::Employee))
    }
}

impl EmployeeRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
            employee_id: None,
        }
    }

    pub fn with_employee_id(api: ApiClient, employee_id: impl Into<String>) -> Self {
        Self {
            client: Rc::new(api),
            employee_id: Some(employee_id.into()),
        }
    }

    async fn employee_id(&self) -> Result<String, ApiError> {
        if let Some(id) = &self.employee_id {
            return Ok(id.clone());
        }
        config::await_employee_id()
            .await
            .ok_or_else(|| ApiError::validation("No employee id configured"))
    }

    pub async fn load_leave_history(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        let emp_id = self.employee_id().await?;
        self.client.get_leave_history(&emp_id).await
    }

    pub async fn load_payroll_history(&self) -> Result<Vec<PayrollRecord>, ApiError> {
        let emp_id = self.employee_id().await?;
        self.client.get_payroll_history(&emp_id).await
    }

    pub async fn load_profile(&self) -> Result<PersonalInfo, ApiError> {
        let emp_id = self.employee_id().await?;
        self.client.get_profile(&emp_id).await
    }

    pub async fn submit_leave(
        &self,
        payload: CreateLeaveRequest,
    ) -> Result<LeaveRequest, ApiError> {
        let emp_id = self.employee_id().await?;
        self.client.create_leave_request(&emp_id, &payload).await
    }

    pub async fn update_profile(&self, info: PersonalInfo) -> Result<PersonalInfo, ApiError> {
        let emp_id = self.employee_id().await?;
        self.client
            .update_profile(&emp_id, &UpdateProfileRequest::from(&info))
            .await?;
        Ok(info)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn repo(server: &MockServer) -> EmployeeRepository {
        EmployeeRepository::with_employee_id(
            ApiClient::new_with_base_url(ApiService::Employee, server.url("/api")),
            "0423",
        )
    }

    #[tokio::test]
    async fn employee_repository_scopes_calls_to_employee_id() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/employees/leaves");
            then.status(200).json_body(json!([]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/employees/payroll");
            then.status(200).json_body(json!([
                { "id": 1, "month": "2025-01", "salary": 5000, "status": "Paid" }
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

        let repo = repo(&server);
        assert!(repo.load_leave_history().await.unwrap().is_empty());
        assert_eq!(repo.load_payroll_history().await.unwrap().len(), 1);
        assert_eq!(repo.load_profile().await.unwrap().username, "ana");

        let received = server.received();
        assert_eq!(received.len(), 3);
        assert!(received
            .iter()
            .all(|req| req.query.as_deref() == Some("empId=0423")));
    }

    #[tokio::test]
    async fn update_profile_returns_submitted_values() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(PUT).path("/api/employees/profile");
            then.status(200).json_body(json!({ "name": "ignored" }));
        });

        let info = PersonalInfo {
            name: "Ana S.".into(),
            email: "ana@example.com".into(),
            phone: "555-0199".into(),
            username: "ana".into(),
            emp_id: "0423".into(),
        };
        let saved = repo(&server).update_profile(info.clone()).await.unwrap();
        assert_eq!(saved, info);

        let sent = server.received().pop().unwrap();
        assert_eq!(
            sent.body,
            Some(json!({
                "name": "Ana S.",
                "email": "ana@example.com",
                "mobile": "555-0199"
            }))
        );
    }
}
