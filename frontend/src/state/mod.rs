pub mod employee;
pub mod hr;
