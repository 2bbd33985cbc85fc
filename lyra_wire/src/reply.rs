use crate::*;

use std::fmt;

/// A three-digit numeric reply code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Numeric(u16);

impl Numeric
{
    /// The highest code that renders as three digits
    pub const MAX: u16 = 999;

    /// Returns `None` if `code` is above [`MAX`](Self::MAX)
    pub const fn new(code: u16) -> Option<Self>
    {
        if code <= Self::MAX { Some(Self(code)) } else { None }
    }

    /// For codes already range-checked by `define_messages!`
    #[doc(hidden)]
    pub const fn from_checked(code: u16) -> Self
    {
        assert!(code <= Self::MAX);
        Self(code)
    }

    pub fn value(&self) -> u16
    {
        self.0
    }
}

impl fmt::Display for Numeric
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{:03}", self.0)
    }
}

/// A single-line reply keyed by a command name, such as `PRIVMSG` or `JOIN`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextReply
{
    source: Origin,
    command: String,
    message: String,
}

impl TextReply
{
    pub fn new(source: &(impl Identifier + ?Sized), command: &str, message: String) -> Self
    {
        Self {
            source: Origin::of(source),
            command: command.to_string(),
            message,
        }
    }

    pub fn command(&self) -> &str
    {
        &self.command
    }

    /// `:<origin> <COMMAND> <body>`
    pub fn format(&self) -> String
    {
        format!(":{} {} {}", self.source.id, self.command, self.message)
    }
}

impl fmt::Display for TextReply
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "Reply(source={}, code={}, message={})", self.source.id, self.command, self.message)
    }
}

/// A single-line reply keyed by a numeric code.
///
/// Numerics are addressed to whoever receives them, so the viewer's current
/// nickname is filled in at format time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericReply
{
    source: Origin,
    code: Numeric,
    message: String,
}

impl NumericReply
{
    pub fn new(source: &(impl Identifier + ?Sized), code: Numeric, message: String) -> Self
    {
        Self {
            source: Origin::of(source),
            code,
            message,
        }
    }

    pub fn code(&self) -> Numeric
    {
        self.code
    }

    /// `:<origin> <code> <viewer-nick> <body>`
    pub fn format(&self, viewer: &(impl Identifier + ?Sized)) -> String
    {
        format!(":{} {} {} {}", self.source.id, self.code, viewer.nick(), self.message)
    }
}

impl fmt::Display for NumericReply
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "Reply(source={}, code={}, message={})", self.source.id, self.code, self.message)
    }
}

/// Any reply that can be formatted for a viewer
#[derive(Debug, Clone)]
pub enum Reply
{
    Text(TextReply),
    Numeric(NumericReply),
    Names(NamesReply),
}

impl Reply
{
    /// The entity on whose behalf this reply is sent
    pub fn source(&self) -> Origin
    {
        match self
        {
            Self::Text(r) => r.source.clone(),
            Self::Numeric(r) => r.source.clone(),
            Self::Names(r) => r.source(),
        }
    }

    pub(crate) fn format_lines(&self, viewer: &(impl Identifier + ?Sized), max_reply_len: usize) -> Vec<String>
    {
        match self
        {
            Self::Text(r) => vec![r.format()],
            Self::Numeric(r) => vec![r.format(viewer)],
            Self::Names(r) => r.format(viewer, max_reply_len),
        }
    }
}

impl fmt::Display for Reply
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self
        {
            Self::Text(r) => fmt::Display::fmt(r, f),
            Self::Numeric(r) => fmt::Display::fmt(r, f),
            Self::Names(r) => fmt::Display::fmt(r, f),
        }
    }
}

impl From<TextReply> for Reply
{
    fn from(r: TextReply) -> Self { Self::Text(r) }
}

impl From<NumericReply> for Reply
{
    fn from(r: NumericReply) -> Self { Self::Numeric(r) }
}

impl From<NamesReply> for Reply
{
    fn from(r: NamesReply) -> Self { Self::Names(r) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> Origin {
        Origin::new("irc.example", "irc.example")
    }

    #[test]
    fn numeric_codes_are_three_digits() {
        assert_eq!(Numeric(1).to_string(), "001");
        assert_eq!(Numeric(42).to_string(), "042");
        assert_eq!(Numeric(422).to_string(), "422");
    }

    #[test]
    fn numeric_codes_above_999_are_rejected() {
        assert_eq!(Numeric::new(999).map(|n| n.to_string()), Some("999".to_string()));
        assert_eq!(Numeric::new(0).map(|n| n.to_string()), Some("000".to_string()));
        assert_eq!(Numeric::new(1000), None);
        assert_eq!(Numeric::new(u16::MAX), None);
    }

    #[test]
    fn numeric_echoes_viewer_nick() {
        let viewer = Origin::new("bob!b@host", "bob");
        let reply = NumericReply::new(&server(), Numeric(433), "nick :Nickname is already in use".to_string());

        assert_eq!(reply.format(&viewer), ":irc.example 433 bob nick :Nickname is already in use");
    }

    #[test]
    fn text_uses_source_id() {
        let alice = Origin::new("alice!a@host", "alice");
        let reply = TextReply::new(&alice, "JOIN", "#chan".to_string());

        assert_eq!(reply.format(), ":alice!a@host JOIN #chan");
        assert_eq!(Reply::from(reply).source(), alice);
    }

    #[test]
    fn empty_parts_render_as_empty_segments() {
        let nobody = Origin::default();
        let reply = NumericReply::new(&server(), Numeric(1), String::new());
        assert_eq!(reply.format(&nobody), ":irc.example 001  ");

        let reply = TextReply::new(&nobody, "PING", String::new());
        assert_eq!(reply.format(), ": PING ");
    }
}
