use crate::api::{
    ApiClient, ApiError, ApiService, AttendanceRecord, Employee, HrProfile, LeaveRequest,
    LeaveStatus, RecordId,
};
use crate::utils::storage as storage_utils;
use std::rc::Rc;

#[derive(Clone)]
pub struct HrRepository {
    client: Rc<ApiClient>,
    token: Option<String>,
}

impl Default for HrRepository {
    fn default() -> Self {
        Self::new(ApiClient::new(ApiService::Hr))
    }
}

impl HrRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
            token: None,
        }
    }

    pub fn with_token(api: ApiClient, token: impl Into<String>) -> Self {
        Self {
            client: Rc::new(api),
            token: Some(token.into()),
        }
    }

    fn token(&self) -> Option<String> {
        self.token.clone().or_else(storage_utils::auth_token)
    }

    pub async fn load_profile(&self) -> Result<HrProfile, ApiError> {
        let token = self.token();
        self.client.get_hr_profile(token.as_deref()).await
    }

    pub async fn load_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn load_leave_requests(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.client.list_leave_requests().await
    }

    pub async fn load_attendance(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.client.list_attendance().await
    }

    pub async fn decide_leave(&self, id: &RecordId, decision: LeaveStatus) -> Result<(), ApiError> {
        self.client.decide_leave_request(id, decision).await
    }

    pub async fn update_position(&self, id: &RecordId, position: &str) -> Result<(), ApiError> {
        self.client.update_employee_position(id, position).await
    }
}
