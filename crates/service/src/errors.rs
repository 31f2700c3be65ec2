use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The operation needs an entity whose id does not resolve; carries the caller-facing message.
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(message: impl Into<String>) -> Self { Self::NotFound(message.into()) }

    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound(_)) }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}
