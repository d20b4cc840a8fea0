pub mod attendance;
pub mod employees;
pub mod leaves;
pub mod overview;
pub mod payroll;

pub use attendance::AttendancePanel;
pub use employees::EmployeesPanel;
pub use leaves::LeaveRequestsPanel;
pub use overview::OverviewPanel;
pub use payroll::PayrollPlaceholder;
