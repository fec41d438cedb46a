pub mod employees;
pub mod me;
