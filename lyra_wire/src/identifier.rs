use std::sync::Arc;

/// Anything that can originate or receive a reply: a user, a channel, or a server.
pub trait Identifier
{
    /// The full identifier used to prefix lines originating from this entity
    fn id(&self) -> String;
    /// The short display name echoed back in numeric replies
    fn nick(&self) -> String;
}

impl<T: Identifier + ?Sized> Identifier for Arc<T>
{
    fn id(&self) -> String { (**self).id() }
    fn nick(&self) -> String { (**self).nick() }
}

impl<T: Identifier + ?Sized> Identifier for &T
{
    fn id(&self) -> String { (**self).id() }
    fn nick(&self) -> String { (**self).nick() }
}

/// A snapshot of an [`Identifier`] taken when a reply is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Origin
{
    pub id: String,
    pub nick: String,
}

impl Origin
{
    pub fn new(id: impl Into<String>, nick: impl Into<String>) -> Self
    {
        Self { id: id.into(), nick: nick.into() }
    }

    pub fn of(source: &(impl Identifier + ?Sized)) -> Self
    {
        Self { id: source.id(), nick: source.nick() }
    }
}

impl Identifier for Origin
{
    fn id(&self) -> String { self.id.clone() }
    fn nick(&self) -> String { self.nick.clone() }
}

/// Read-only view of a channel, as needed to list its members.
pub trait ChannelView: Identifier + Send + Sync
{
    fn name(&self) -> String;
    /// The server on whose behalf the channel's numerics are sent
    fn server(&self) -> Origin;
    /// Nicknames of the current members, in the order they should be listed
    fn nicks(&self) -> Vec<String>;
}
