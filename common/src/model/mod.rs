pub mod employee;
pub mod field;

pub use employee::Employee;
pub use field::EmployeeField;
