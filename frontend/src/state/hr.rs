use crate::{
    api::{ApiError, AttendanceRecord, Employee, HrProfile, LeaveRequest},
    pages::hr::repository::HrRepository,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct HrState {
    pub profile: RwSignal<HrProfile>,
    pub employees: RwSignal<Vec<Employee>>,
    pub leave_requests: RwSignal<Vec<LeaveRequest>>,
    pub attendance: RwSignal<Vec<AttendanceRecord>>,
}

impl Default for HrState {
    fn default() -> Self {
        Self {
            profile: create_rw_signal(HrProfile::default()),
            employees: create_rw_signal(Vec::new()),
            leave_requests: create_rw_signal(Vec::new()),
            attendance: create_rw_signal(Vec::new()),
        }
    }
}

pub async fn load_profile(
    repo: &HrRepository,
    profile: RwSignal<HrProfile>,
) -> Result<(), ApiError> {
    profile.set(repo.load_profile().await?);
    Ok(())
}

pub async fn load_employees(
    repo: &HrRepository,
    employees: RwSignal<Vec<Employee>>,
) -> Result<(), ApiError> {
    employees.set(repo.load_employees().await?);
    Ok(())
}

pub async fn load_leave_requests(
    repo: &HrRepository,
    leave_requests: RwSignal<Vec<LeaveRequest>>,
) -> Result<(), ApiError> {
    leave_requests.set(repo.load_leave_requests().await?);
    Ok(())
}

pub async fn load_attendance(
    repo: &HrRepository,
    attendance: RwSignal<Vec<AttendanceRecord>>,
) -> Result<(), ApiError> {
    attendance.set(repo.load_attendance().await?);
    Ok(())
}

pub async fn load_all(repo: &HrRepository, state: HrState) {
    let (profile, employees, leaves, attendance) = futures::join!(
        load_profile(repo, state.profile),
        load_employees(repo, state.employees),
        load_leave_requests(repo, state.leave_requests),
        load_attendance(repo, state.attendance),
    );
    if let Err(err) = profile {
        log::error!("Error fetching HR profile: {}", err);
    }
    if let Err(err) = employees {
        log::error!("Error fetching employees: {}", err);
    }
    if let Err(err) = leaves {
        log::error!("Error fetching leave requests: {}", err);
    }
    if let Err(err) = attendance {
        log::error!("Error fetching attendance: {}", err);
    }
}
