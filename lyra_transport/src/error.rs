use thiserror::Error;
use serde::{Serialize,Deserialize};
use tokio::sync::mpsc::error::TrySendError;

/// An error that might occur on a single connection.
#[derive(Error,Debug,Clone,PartialEq,Eq,Serialize,Deserialize)]
pub enum TransportError
{
    #[error("Connection closed")]
    Closed,
    #[error("I/O Error: {0}")]
    IoError(String),
    #[error("Send queue full")]
    SendQueueFull,
    #[error("Input line too long")]
    InputLineTooLong,
}

impl From<std::io::Error> for TransportError
{
    fn from(e: std::io::Error) -> Self
    {
        Self::IoError(e.to_string())
    }
}

impl<T> From<TrySendError<T>> for TransportError
{
    fn from(e: TrySendError<T>) -> Self
    {
        match e
        {
            TrySendError::Full(_) => Self::SendQueueFull,
            TrySendError::Closed(_) => Self::Closed
        }
    }
}
