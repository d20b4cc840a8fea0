use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Backend identifiers arrive as either JSON numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    #[serde(untagged)]
    Other(String),
}

impl LeaveStatus {
    pub fn as_str(&self) -> &str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
            LeaveStatus::Other(value) => value,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LeaveStatus::Pending)
    }

    pub fn badge_class(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub username: String,
    pub emp_id: String,
}

/// Profile payload as served by the employee service; the phone travels as `mobile`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub emp_id: String,
}

impl From<ProfileResponse> for PersonalInfo {
    fn from(profile: ProfileResponse) -> Self {
        Self {
            name: profile.name,
            email: profile.email,
            phone: profile.mobile.unwrap_or_default(),
            username: profile.username,
            emp_id: profile.emp_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
    pub mobile: String,
}

impl From<&PersonalInfo> for UpdateProfileRequest {
    fn from(info: &PersonalInfo) -> Self {
        Self {
            name: info.name.clone(),
            email: info.email.clone(),
            mobile: info.phone.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reason: String,
    pub status: LeaveStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emp_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<String>,
}

impl LeaveRequest {
    /// Name of the requesting employee, falling back to the raw employee id.
    pub fn requester(&self) -> String {
        match (&self.employee, &self.emp_id) {
            (Some(name), _) if !name.is_empty() => name.clone(),
            (_, Some(id)) => display_value(id),
            _ => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLeaveRequest {
    #[serde(rename = "type")]
    pub leave_type: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveDecisionRequest {
    pub status: LeaveStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    pub id: RecordId,
    pub month: String,
    pub salary: Value,
    pub status: String,
}

impl PayrollRecord {
    pub fn salary_label(&self) -> String {
        display_value(&self.salary)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emp_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<String>,
    pub date: String,
    pub status: String,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
}

impl AttendanceRecord {
    pub fn attendee(&self) -> String {
        match (&self.employee, &self.emp_id) {
            (Some(name), _) if !name.is_empty() => name.clone(),
            (_, Some(id)) => display_value(id),
            _ => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub join_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePositionRequest {
    pub position: String,
}

/// Missing fields keep the placeholder identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HrProfile {
    pub name: String,
    pub email: String,
}

impl Default for HrProfile {
    fn default() -> Self {
        Self {
            name: "HR Manager".into(),
            email: "admin@company.com".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "DECODE_ERROR".to_string(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Builds an error from a non-success response body. The employee service
    /// answers with `{ "message": ... }`, the shared error shape uses `error`.
    pub fn from_status(status: u16, body: &str) -> Self {
        if let Ok(parsed) = serde_json::from_str::<ApiError>(body) {
            return parsed;
        }
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|v| v.as_str())
                    .map(|s| s.to_string())
            })
            .unwrap_or_else(|| "Unknown error".to_string());
        Self {
            error: message,
            code: format!("HTTP_{}", status),
            details: None,
        }
    }
}

/// Renders a scalar JSON value the way a template would interpolate it.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(display_value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_id_accepts_numbers_and_strings() {
        let numeric: RecordId = serde_json::from_value(json!(7)).unwrap();
        let text: RecordId = serde_json::from_value(json!("lr-7")).unwrap();
        assert_eq!(numeric, RecordId::Number(7));
        assert_eq!(text.to_string(), "lr-7");
    }

    #[test]
    fn leave_status_keeps_unknown_values() {
        let pending: LeaveStatus = serde_json::from_value(json!("Pending")).unwrap();
        let odd: LeaveStatus = serde_json::from_value(json!("Cancelled")).unwrap();
        assert!(pending.is_pending());
        assert_eq!(odd, LeaveStatus::Other("Cancelled".into()));
        assert!(!odd.is_pending());
        assert_eq!(odd.badge_class(), "cancelled");
    }

    #[test]
    fn profile_maps_mobile_to_phone() {
        let profile: ProfileResponse = serde_json::from_value(json!({
            "name": "Ana",
            "email": "ana@example.com",
            "mobile": "555-0100",
            "username": "ana",
            "empId": 423
        }))
        .unwrap();
        let info = PersonalInfo::from(profile);
        assert_eq!(info.phone, "555-0100");
        assert_eq!(info.emp_id, "423");
    }

    #[test]
    fn leave_request_uses_wire_field_names() {
        let payload = CreateLeaveRequest {
            leave_type: "Vacation".into(),
            start_date: "2025-03-01".into(),
            end_date: "2025-03-03".into(),
            reason: "trip".into(),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "type": "Vacation",
                "startDate": "2025-03-01",
                "endDate": "2025-03-03",
                "reason": "trip"
            })
        );
    }

    #[test]
    fn requester_prefers_name_over_id() {
        let mut request: LeaveRequest = serde_json::from_value(json!({
            "id": 1,
            "type": "Personal",
            "startDate": "2025-01-01",
            "endDate": "2025-01-02",
            "reason": "",
            "status": "Pending",
            "empId": "0423"
        }))
        .unwrap();
        assert_eq!(request.requester(), "0423");
        request.employee = Some("Ana".into());
        assert_eq!(request.requester(), "Ana");
    }

    #[test]
    fn null_fields_do_not_reject_the_directory() {
        let employees: Vec<Employee> = serde_json::from_value(json!([
            {
                "id": 1, "name": "Ana", "email": "ana@example.com", "department": "Engineering",
                "position": "Team Lead", "status": "approved", "joinDate": "2020-01-01"
            },
            {
                "id": 2, "name": "Bo", "email": null, "department": null,
                "position": null, "status": "on_leave", "joinDate": null
            }
        ]))
        .unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[1].department, "");
        assert_eq!(employees[1].position, "");
        assert_eq!(employees[1].status, "on_leave");
    }

    #[test]
    fn null_reason_and_profile_fields_read_as_empty() {
        let leave: LeaveRequest = serde_json::from_value(json!({
            "id": 3,
            "type": "Vacation",
            "startDate": "2025-01-01",
            "endDate": "2025-01-02",
            "reason": null,
            "status": "Pending"
        }))
        .unwrap();
        assert_eq!(leave.reason, "");

        let profile: ProfileResponse = serde_json::from_value(json!({
            "name": "Ana", "email": null, "mobile": null, "username": null, "empId": null
        }))
        .unwrap();
        let info = PersonalInfo::from(profile);
        assert_eq!(info.email, "");
        assert_eq!(info.username, "");
        assert_eq!(info.emp_id, "");
    }

    #[test]
    fn error_from_status_reads_message_bodies() {
        let err = ApiError::from_status(400, r#"{"message":"bad dates"}"#);
        assert_eq!(err.error, "bad dates");
        assert_eq!(err.code, "HTTP_400");

        let shaped = ApiError::from_status(
            409,
            r#"{"error":"conflict","code":"CONFLICT"}"#,
        );
        assert_eq!(shaped.code, "CONFLICT");

        let opaque = ApiError::from_status(502, "<html>bad gateway</html>");
        assert_eq!(opaque.error, "Unknown error");
    }
}
