//! A small chat server built on the `lyra` transport and reply encoder.
//!
//! Each accepted connection is wrapped in a [`lyra_transport::Transport`] and
//! served by its own task. Commands are applied to a single [`ServerState`]
//! under one lock; the replies they produce are rendered while the lock is
//! held and written out after it has been released.

pub mod config;
pub use config::*;

pub mod tracing_config;

mod errors;
pub use errors::*;

mod client_message;
pub use client_message::*;

mod client;
pub use client::*;

mod channel;
pub use channel::*;

mod outgoing;
pub use outgoing::*;

mod command;
pub use command::is_valid_nick;

mod server;
pub use server::*;
