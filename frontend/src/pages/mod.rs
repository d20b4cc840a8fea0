pub mod employee;
pub mod home;
pub mod hr;

pub use employee::EmployeePortalPage;
pub use home::HomePage;
pub use hr::HrDashboardPage;
