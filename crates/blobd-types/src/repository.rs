use thiserror::Error;

/// Default cap on repository name length, overridable via configuration.
pub const DEFAULT_MAX_REPOSITORY_LENGTH: usize = 100;

/// Rejection reasons for repository names.
///
/// The messages are part of the API surface: they are rendered verbatim in
/// error responses and asserted by tests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryNameError {
    #[error("Repository name must be non-empty.")]
    Empty,

    #[error("Repository name length must be less than {max}.")]
    TooLong { max: usize },

    #[error("Repository contains invalid characters.")]
    InvalidCharacters,
}

/// Validate a repository namespace name.
///
/// Checks run in a fixed order, short-circuiting on the first failure so the
/// reported reason is deterministic:
///
/// 1. the name must be non-empty;
/// 2. the name must not exceed `max_length` bytes;
/// 3. the first character must be ASCII alphanumeric, and the rest ASCII
///    alphanumeric, `.`, `_`, or `-`.
///
/// Repositories are never created explicitly; a name that passes here comes
/// into existence as soon as an object is stored under it.
pub fn validate_repository_name(
    name: &str,
    max_length: usize,
) -> Result<(), RepositoryNameError> {
    if name.is_empty() {
        return Err(RepositoryNameError::Empty);
    }
    if name.len() > max_length {
        return Err(RepositoryNameError::TooLong { max: max_length });
    }
    let mut chars = name.chars();
    let first = chars.next().expect("name is non-empty");
    if !first.is_ascii_alphanumeric() {
        return Err(RepositoryNameError::InvalidCharacters);
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')) {
        return Err(RepositoryNameError::InvalidCharacters);
    }
    Ok(())
}
