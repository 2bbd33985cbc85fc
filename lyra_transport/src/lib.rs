//! Line-oriented transport for client protocol connections.
//!
//! [`Transport::start`] takes an already-connected byte stream and spawns two
//! tasks for it: an inbound pump, which splits the stream into lines and
//! delivers them through [`InboundLines`], and an outbound pump, which writes
//! queued lines to the stream in submission order.
//!
//! The two pumps share only the bounded outbound queue and a single shutdown
//! signal. Either pump stopping for any reason (end of input, an I/O error, the
//! peer of a channel going away, or an explicit [`Transport::close`]) raises the
//! signal, and the other pump then stops as well. Once that has happened, the
//! outbound queue is dropped and any further writes are discarded without
//! blocking.

mod config;
pub use config::*;

mod error;
pub use error::*;

mod transport;
pub use transport::*;

mod inbound;
pub use inbound::*;

mod internal
{
    pub mod shutdown;
    pub use shutdown::*;
    pub mod inbound_pump;
    pub use inbound_pump::*;
    pub mod outbound_pump;
    pub use outbound_pump::*;
}
