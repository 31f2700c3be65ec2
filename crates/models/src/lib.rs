//! SeaORM entity model: `company` and `employee`, plus connection helpers.
//!
//! Employees point at their company through a nullable `company_id`; a company
//! owns no rows and deleting it leaves employees in place.

pub mod errors;
pub mod db;
pub mod company;
pub mod employee;

#[cfg(test)]
mod tests;
