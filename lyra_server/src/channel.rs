use crate::*;

use lyra_state::{MembershipFlags, MembershipSet, Named};
use lyra_wire::{ChannelView, Identifier, Origin};
use parking_lot::RwLock;

use std::{
    fmt,
    sync::Arc,
};

/// Whether `name` is acceptable as a channel name
pub fn is_channel_name(name: &str) -> bool
{
    name.len() > 1 && name.len() <= 50 && name.starts_with('#') && !name.contains([' ', ',', '\x07'])
}

pub struct Channel
{
    name: String,
    server: Origin,
    members: RwLock<MembershipSet<Client>>,
    topic: RwLock<Option<String>>,
}

impl Channel
{
    pub fn new(name: impl Into<String>, server: Origin) -> Arc<Self>
    {
        Arc::new(Self {
            name: name.into(),
            server,
            members: RwLock::new(MembershipSet::new()),
            topic: RwLock::new(None),
        })
    }

    /// Add `client` to the member list. The first member is given creator and
    /// operator status.
    pub(crate) fn add_member(&self, client: &Arc<Client>)
    {
        let mut members = self.members.write();
        let first = members.is_empty();
        members.add(client);
        if first
        {
            members.set_flag(client, MembershipFlags::CREATOR | MembershipFlags::OPERATOR);
        }
    }

    pub(crate) fn remove_member(&self, client: &Arc<Client>)
    {
        self.members.write().remove(client);
    }

    pub fn has_member(&self, client: &Arc<Client>) -> bool
    {
        self.members.read().has(client)
    }

    pub fn is_empty(&self) -> bool
    {
        self.members.read().is_empty()
    }

    pub fn members(&self) -> Vec<Arc<Client>>
    {
        self.members.read().iter().map(|(member, _)| Arc::clone(member)).collect()
    }

    pub fn topic(&self) -> Option<String>
    {
        self.topic.read().clone()
    }

    pub(crate) fn set_topic(&self, topic: Option<String>)
    {
        *self.topic.write() = topic;
    }
}

fn status_prefix(flags: MembershipFlags) -> &'static str
{
    if flags.contains(MembershipFlags::OPERATOR)
    {
        "@"
    }
    else if flags.contains(MembershipFlags::VOICE)
    {
        "+"
    }
    else
    {
        ""
    }
}

impl fmt::Debug for Channel
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("Channel")
         .field("name", &self.name)
         .field("members", &self.members.read().len())
         .finish()
    }
}

impl Identifier for Channel
{
    fn id(&self) -> String { self.name.clone() }
    fn nick(&self) -> String { self.name.clone() }
}

impl ChannelView for Channel
{
    fn name(&self) -> String
    {
        self.name.clone()
    }

    fn server(&self) -> Origin
    {
        self.server.clone()
    }

    /// Member nicknames with their status prefix, sorted by nickname
    fn nicks(&self) -> Vec<String>
    {
        let members = self.members.read();
        let mut entries: Vec<(String, &'static str)> = members.iter()
                                                              .map(|(member, flags)| (member.nick(), status_prefix(flags)))
                                                              .collect();
        entries.sort();
        entries.into_iter().map(|(nick, prefix)| format!("{}{}", prefix, nick)).collect()
    }
}

impl Named for Channel
{
    fn registry_key(&self) -> Option<String>
    {
        Some(self.name.clone())
    }
}
