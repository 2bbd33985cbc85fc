//! Rendering of protocol replies into wire lines.
//!
//! A [`Reply`] is built for each outgoing event and rendered for a particular
//! viewer with [`ReplyEncoder::format`]. Rendering never fails; empty inputs
//! simply produce empty segments in the output.
//!
//! There are three kinds of reply:
//!
//! - [`TextReply`]: `:<origin> <COMMAND> <body>`
//! - [`NumericReply`]: `:<origin> <code> <viewer-nick> <body>`, with the code
//!   always three digits
//! - [`NamesReply`]: the member list of a channel, packed into as few `353`
//!   lines as the configured length limit allows, followed by a `366`
//!   terminator. The channel is read when the reply is formatted, not when it
//!   is constructed.
//!
//! Constructors for the individual messages live in [`message`] and
//! [`numeric`].

mod identifier;
pub use identifier::*;

mod reply;
pub use reply::*;

mod names;
pub use names::*;

mod encoder;
pub use encoder::*;

mod messages;
pub use messages::*;
