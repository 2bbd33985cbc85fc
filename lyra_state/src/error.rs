use thiserror::Error;

/// A registry mutation that would have broken one of the registry's invariants.
///
/// These are recoverable; callers are expected to turn them into a protocol
/// error for the requesting client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError
{
    #[error("{0}: name already in use")]
    DuplicateName(String),
    #[error("entity has no name")]
    MissingKey,
    #[error("{0}: mismatch")]
    IdentityMismatch(String),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
