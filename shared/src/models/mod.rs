//! Data models shared across the workspace

pub mod employee;

pub use employee::{Employee, EmployeeCreate, EmployeeUpdate};
