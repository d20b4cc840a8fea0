pub mod dashboard;
pub mod leaves;
pub mod payroll;
pub mod profile;

pub use dashboard::DashboardPanel;
pub use leaves::LeavesPanel;
pub use payroll::PayrollPanel;
pub use profile::ProfilePanel;
