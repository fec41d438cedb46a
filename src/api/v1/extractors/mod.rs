pub mod employee_ctx;

pub use employee_ctx::{AdminOnly, EmployeeCtx, EmployeeCtxExtractor, ManagerOrAdmin};
