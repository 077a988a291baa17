use thiserror::Error;

pub const RECORD_NOT_FOUND: &str = "Record not found";
pub const ID_REQUIRED: &str = "Id cannot be null";

/// Business errors for animal workflows. `Display` yields the client-facing message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{reason}")]
    Validation { field: &'static str, reason: String },
    #[error("{0}")]
    BadRequest(String),
    #[error("Record not found")]
    NotFound,
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn id_required() -> Self { Self::BadRequest(ID_REQUIRED.into()) }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}
