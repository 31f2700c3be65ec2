//! Employee workflows: domain input, repository abstraction, service.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::EmployeeService;
