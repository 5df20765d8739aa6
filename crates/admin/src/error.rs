use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Store(#[from] store::StoreError),

    #[error(transparent)]
    Validation(#[from] domain::DomainError),

    #[error("Invalid username or password.")]
    InvalidCredentials,

    #[error("Not logged in.")]
    NotAuthenticated,

    #[error("Import failed: {0}")]
    Import(String),
}

pub type Result<T> = std::result::Result<T, AdminError>;
