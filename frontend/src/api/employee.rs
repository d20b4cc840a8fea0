use super::{
    client::ApiClient,
    types::{
        ApiError, CreateLeaveRequest, LeaveRequest, PayrollRecord, PersonalInfo, ProfileResponse,
        UpdateProfileRequest,
    },
};

fn employee_query(emp_id: &str) -> [(&'static str, &str); 1] {
    [("empId", emp_id)]
}

impl ApiClient {
    pub async fn get_leave_history(&self, emp_id: &str) -> Result<Vec<LeaveRequest>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/employees/leaves", base_url))
                    .query(&employee_query(emp_id)),
            )
            .await?;
        self.map_json_response(response).await
    }

    pub async fn get_payroll_history(
        &self,
        emp_id: &str,
    ) -> Result<Vec<PayrollRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/employees/payroll", base_url))
                    .query(&employee_query(emp_id)),
            )
            .await?;
        self.map_json_response(response).await
    }

    pub async fn get_profile(&self, emp_id: &str) -> Result<PersonalInfo, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/employees/profile", base_url))
                    .query(&employee_query(emp_id)),
            )
            .await?;
        let profile: ProfileResponse = self.map_json_response(response).await?;
        Ok(profile.into())
    }

    pub async fn create_leave_request(
        &self,
        emp_id: &str,
        request: &CreateLeaveRequest,
    ) -> Result<LeaveRequest, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/employees/leave-request", base_url))
                    .query(&employee_query(emp_id))
                    .json(request),
            )
            .await?;
        self.map_json_response(response).await
    }

    /// The response body is not consumed; the caller keeps its submitted values.
    pub async fn update_profile(
        &self,
        emp_id: &str,
        request: &UpdateProfileRequest,
    ) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/employees/profile", base_url))
                    .query(&employee_query(emp_id))
                    .json(request),
            )
            .await?;
        self.map_empty_response(response).await
    }
}
