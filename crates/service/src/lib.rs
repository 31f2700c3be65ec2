//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access through repository traits.
//! - Raises `ServiceError::NotFound` whenever an operation needs an existing entity.
//! - Partial updates only overwrite the fields a caller actually sent.

pub mod errors;
pub mod pagination;
pub mod company;
pub mod employee;
#[cfg(test)]
pub mod test_support;

pub use company::CompanyService;
pub use employee::EmployeeService;
