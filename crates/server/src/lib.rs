pub mod dto;
pub mod errors;
pub mod mapper;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::run;
