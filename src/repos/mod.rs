pub mod employee_repo;
pub mod error;
