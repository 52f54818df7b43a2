#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.missing_fields")]
    MissingFields,
    #[error("auth.invalid_email")]
    InvalidEmail,
    #[error("auth.password_too_short")]
    PasswordTooShort,
    #[error("auth.email_already_exists")]
    EmailAlreadyExists,
    /// Shared by unknown email and wrong password so callers cannot probe for accounts.
    #[error("auth.invalid_credentials")]
    InvalidCredentials,
    #[error("auth.forbidden")]
    MissingToken,
    #[error("auth.unauthorized")]
    InvalidToken,
    #[error("auth.password_hash_failed")]
    PasswordHash,
    #[error("auth.token_issue_failed")]
    TokenIssue,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
