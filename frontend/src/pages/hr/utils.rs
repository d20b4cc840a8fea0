use crate::api::{ApiError, AttendanceRecord, Employee, LeaveRequest, LeaveStatus, RecordId};
use crate::components::layout::PortalTab;
use crate::utils::dialog;
use leptos::*;
use std::collections::HashSet;

pub const POSITION_OPTIONS: [&str; 6] = [
    "Software Developer",
    "Senior Developer",
    "Team Lead",
    "QA Engineer",
    "Marketing Specialist",
    "Financial Analyst",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HrTab {
    #[default]
    Overview,
    Employees,
    Attendance,
    Leaves,
    Payroll,
}

impl PortalTab for HrTab {
    fn all() -> &'static [Self] {
        &[
            HrTab::Overview,
            HrTab::Employees,
            HrTab::Attendance,
            HrTab::Leaves,
            HrTab::Payroll,
        ]
    }

    fn id(self) -> &'static str {
        match self {
            HrTab::Overview => "overview",
            HrTab::Employees => "employees",
            HrTab::Attendance => "attendance",
            HrTab::Leaves => "leaves",
            HrTab::Payroll => "payroll",
        }
    }

    fn label(self) -> &'static str {
        match self {
            HrTab::Overview => "Overview",
            HrTab::Employees => "Employees",
            HrTab::Attendance => "Attendance",
            HrTab::Leaves => "Leave Requests",
            HrTab::Payroll => "Payroll",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            HrTab::Overview => "fa-th-large",
            HrTab::Employees => "fa-users",
            HrTab::Attendance => "fa-calendar-check",
            HrTab::Leaves => "fa-calendar-day",
            HrTab::Payroll => "fa-money-bill-wave",
        }
    }

    fn title(self) -> &'static str {
        match self {
            HrTab::Overview => "HR Overview",
            HrTab::Employees => "Employee Management",
            HrTab::Attendance => "Attendance Records",
            HrTab::Leaves => "Leave Management",
            HrTab::Payroll => "Payroll Management",
        }
    }
}

/// Headline numbers for the overview. Recomputed from the fetched arrays on
/// every read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HrStats {
    pub total_employees: usize,
    pub active_employees: usize,
    pub on_leave: usize,
    pub departments: usize,
    pub pending_leaves: usize,
}

impl HrStats {
    pub fn compute(employees: &[Employee], leaves: &[LeaveRequest]) -> Self {
        let departments: HashSet<&str> = employees.iter().map(|e| e.department.as_str()).collect();
        Self {
            total_employees: employees.len(),
            active_employees: employees.iter().filter(|e| e.status == "approved").count(),
            on_leave: employees.iter().filter(|e| e.status == "on_leave").count(),
            departments: departments.len(),
            pending_leaves: leaves.iter().filter(|l| l.status.is_pending()).count(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeaveCounts {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl LeaveCounts {
    pub fn compute(leaves: &[LeaveRequest]) -> Self {
        leaves.iter().fold(
            LeaveCounts {
                total: leaves.len(),
                ..Default::default()
            },
            |mut counts, leave| {
                match leave.status {
                    LeaveStatus::Pending => counts.pending += 1,
                    LeaveStatus::Approved => counts.approved += 1,
                    LeaveStatus::Rejected => counts.rejected += 1,
                    LeaveStatus::Other(_) => {}
                }
                counts
            },
        )
    }
}

/// `approved` reads as "Active"; anything else is capitalised with its first
/// underscore turned into a space.
pub fn employee_status_label(status: &str) -> String {
    if status == "approved" {
        return "Active".to_string();
    }
    let mut chars = status.chars();
    match chars.next() {
        Some(first) => {
            let rest: String = chars.collect();
            format!("{}{}", first.to_uppercase(), rest.replacen('_', " ", 1))
        }
        None => String::new(),
    }
}

pub fn status_badge_class(status: &str) -> String {
    status.to_lowercase()
}

pub fn avatar_initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeaveStatusFilter {
    #[default]
    All,
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatusFilter {
    pub const OPTIONS: [LeaveStatusFilter; 4] = [
        LeaveStatusFilter::All,
        LeaveStatusFilter::Pending,
        LeaveStatusFilter::Approved,
        LeaveStatusFilter::Rejected,
    ];

    pub fn as_value(self) -> &'static str {
        match self {
            LeaveStatusFilter::All => "all",
            LeaveStatusFilter::Pending => "Pending",
            LeaveStatusFilter::Approved => "Approved",
            LeaveStatusFilter::Rejected => "Rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LeaveStatusFilter::All => "All Status",
            other => other.as_value(),
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "Pending" => LeaveStatusFilter::Pending,
            "Approved" => LeaveStatusFilter::Approved,
            "Rejected" => LeaveStatusFilter::Rejected,
            _ => LeaveStatusFilter::All,
        }
    }

    pub fn matches(self, status: &LeaveStatus) -> bool {
        match self {
            LeaveStatusFilter::All => true,
            LeaveStatusFilter::Pending => *status == LeaveStatus::Pending,
            LeaveStatusFilter::Approved => *status == LeaveStatus::Approved,
            LeaveStatusFilter::Rejected => *status == LeaveStatus::Rejected,
        }
    }
}

pub fn filter_leave_requests(
    leaves: &[LeaveRequest],
    filter: LeaveStatusFilter,
) -> Vec<LeaveRequest> {
    leaves
        .iter()
        .filter(|leave| filter.matches(&leave.status))
        .cloned()
        .collect()
}

/// Case-insensitive substring match over name, email, department and position.
pub fn filter_employees(employees: &[Employee], query: &str) -> Vec<Employee> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return employees.to_vec();
    }
    employees
        .iter()
        .filter(|e| {
            [&e.name, &e.email, &e.department, &e.position]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Distinct `YYYY-MM` prefixes of the record dates, newest first.
pub fn attendance_months(records: &[AttendanceRecord]) -> Vec<String> {
    let mut months: Vec<String> = records
        .iter()
        .filter_map(|r| r.date.get(..7))
        .filter(|m| m.as_bytes().get(4) == Some(&b'-'))
        .map(str::to_string)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    months.sort_unstable_by(|a, b| b.cmp(a));
    months
}

/// "2023-11" becomes "November 2023"; anything unparseable is shown as is.
pub fn month_label(month: &str) -> String {
    let parsed = month.split_once('-').and_then(|(year, mm)| {
        let index = mm.parse::<usize>().ok()?.checked_sub(1)?;
        MONTH_NAMES.get(index).map(|name| format!("{} {}", name, year))
    });
    parsed.unwrap_or_else(|| month.to_string())
}

/// An empty month keeps every record.
pub fn filter_attendance(records: &[AttendanceRecord], month: &str) -> Vec<AttendanceRecord> {
    if month.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| r.date.starts_with(month))
        .cloned()
        .collect()
}

/// Sets the status of the matching request. Array length is unchanged.
pub fn apply_leave_decision(leaves: &mut [LeaveRequest], id: &RecordId, decision: &LeaveStatus) {
    for leave in leaves.iter_mut().filter(|leave| &leave.id == id) {
        leave.status = decision.clone();
    }
}

pub fn apply_position_update(employees: &mut [Employee], id: &RecordId, position: &str) {
    for employee in employees.iter_mut().filter(|e| &e.id == id) {
        employee.position = position.to_string();
    }
}

pub fn decision_message(decision: &LeaveStatus) -> String {
    format!(
        "Leave request {} successfully!",
        decision.as_str().to_lowercase()
    )
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeaveDecision {
    pub id: RecordId,
    pub status: LeaveStatus,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PositionChange {
    pub id: RecordId,
    pub position: String,
}

pub fn apply_optional_decision_result(
    result: Option<Result<LeaveDecision, ApiError>>,
    leave_requests: RwSignal<Vec<LeaveRequest>>,
) {
    if let Some(result) = result {
        match result {
            Ok(decision) => {
                leave_requests
                    .update(|leaves| apply_leave_decision(leaves, &decision.id, &decision.status));
                dialog::alert(&decision_message(&decision.status));
            }
            Err(err) => log::error!("Error updating leave request: {}", err),
        }
    }
}

pub fn apply_optional_position_result(
    result: Option<Result<PositionChange, ApiError>>,
    employees: RwSignal<Vec<Employee>>,
) {
    if let Some(result) = result {
        match result {
            Ok(change) => employees
                .update(|list| apply_position_update(list, &change.id, &change.position)),
            Err(err) => log::error!("Error updating position: {}", err),
        }
    }
}
