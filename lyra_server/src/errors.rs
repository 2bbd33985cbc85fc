use lyra_state::RegistryError;
use lyra_wire::NumericReply;
use thiserror::Error;

/// An error that may occur while processing one client command.
///
/// Each variant is reported back to the client as a numeric, except registry
/// failures other than a name collision, which indicate a bug and are only
/// logged.
#[derive(Debug, Error)]
pub enum CommandError
{
    /// The command wasn't recognised
    #[error("unknown command {0}")]
    CommandNotFound(String),
    /// Not enough arguments were provided to the named command
    #[error("not enough parameters for {0}")]
    NotEnoughParameters(String),
    /// The command requires a registered client
    #[error("client has not registered")]
    NotRegistered,
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// The command failed; the numeric will be sent to the client
    #[error("{0}")]
    Numeric(NumericReply),
}

impl From<NumericReply> for CommandError
{
    fn from(n: NumericReply) -> Self { Self::Numeric(n) }
}

pub type CommandResult = Result<(), CommandError>;
