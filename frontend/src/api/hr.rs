use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use super::{
    client::ApiClient,
    types::{
        ApiError, AttendanceRecord, Employee, HrProfile, LeaveDecisionRequest, LeaveRequest,
        LeaveStatus, RecordId, UpdatePositionRequest,
    },
};

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn path_segment(id: &RecordId) -> String {
    utf8_percent_encode(&id.to_string(), PATH_SEGMENT).to_string()
}

fn bearer_headers(token: Option<&str>) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    if let Some(token) = token {
        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ApiError::validation("Invalid token format"))?;
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}

impl ApiClient {
    pub async fn get_hr_profile(&self, token: Option<&str>) -> Result<HrProfile, ApiError> {
        let headers = bearer_headers(token)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/hr/profile", base_url))
                    .headers(headers),
            )
            .await?;
        self.map_json_response(response).await
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/employees", base_url)))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn list_leave_requests(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/employees/leave-requests", base_url)),
            )
            .await?;
        self.map_json_response(response).await
    }

    pub async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/employees/attendance", base_url)),
            )
            .await?;
        self.map_json_response(response).await
    }

    pub async fn decide_leave_request(
        &self,
        id: &RecordId,
        status: LeaveStatus,
    ) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!(
                        "{}/employees/leave-request/{}/decision",
                        base_url,
                        path_segment(id)
                    ))
                    .json(&LeaveDecisionRequest { status }),
            )
            .await?;
        self.map_empty_response(response).await
    }

    pub async fn update_employee_position(
        &self,
        id: &RecordId,
        position: &str,
    ) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/employees/{}", base_url, path_segment(id)))
                    .json(&UpdatePositionRequest {
                        position: position.to_string(),
                    }),
            )
            .await?;
        self.map_empty_response(response).await
    }
}
