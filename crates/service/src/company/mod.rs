//! Company workflows: domain types, repository abstraction, service.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::CompanyService;
