/// Errors raised by the credential and catalog store adapters.
/// Variants carry code-style identifiers so the presentation layer can forward them as-is.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
}

