use crate::*;

use lyra_state::{EntitySet, Named, UserMask};
use lyra_transport::Transport;
use lyra_wire::Identifier;
use parking_lot::{Mutex, RwLock};

use std::{
    fmt,
    sync::Arc,
};

/// Username and realname, as supplied by `USER`
#[derive(Debug, Clone)]
pub struct UserInfo
{
    pub username: String,
    pub realname: String,
}

/// A single client connection and the user it represents.
///
/// Fields that change over the life of the connection are behind their own
/// locks, but all changes are made while holding the server's state lock.
pub struct Client
{
    hostname: String,
    transport: Transport,
    nick: RwLock<Option<String>>,
    user: RwLock<Option<UserInfo>>,
    registered: RwLock<bool>,
    channels: Mutex<EntitySet<Channel>>,
}

impl Client
{
    pub fn new(hostname: impl Into<String>, transport: Transport) -> Arc<Self>
    {
        Arc::new(Self {
            hostname: hostname.into(),
            transport,
            nick: RwLock::new(None),
            user: RwLock::new(None),
            registered: RwLock::new(false),
            channels: Mutex::new(EntitySet::new()),
        })
    }

    pub fn transport(&self) -> &Transport
    {
        &self.transport
    }

    pub fn hostname(&self) -> &str
    {
        &self.hostname
    }

    pub fn current_nick(&self) -> Option<String>
    {
        self.nick.read().clone()
    }

    /// Replace the nickname, returning the old one
    pub(crate) fn set_nick(&self, nick: Option<String>) -> Option<String>
    {
        std::mem::replace(&mut *self.nick.write(), nick)
    }

    pub fn user_info(&self) -> Option<UserInfo>
    {
        self.user.read().clone()
    }

    pub(crate) fn set_user_info(&self, info: UserInfo)
    {
        *self.user.write() = Some(info);
    }

    pub fn is_registered(&self) -> bool
    {
        *self.registered.read()
    }

    pub(crate) fn set_registered(&self)
    {
        *self.registered.write() = true;
    }

    /// Whether both `NICK` and `USER` have been received
    pub fn can_register(&self) -> bool
    {
        self.nick.read().is_some() && self.user.read().is_some()
    }

    pub fn mask(&self) -> UserMask
    {
        let username = self.user.read().as_ref().map_or_else(|| "*".to_string(), |u| u.username.clone());
        UserMask::new(self.nick(), username, self.hostname.clone())
    }

    pub(crate) fn join_channel(&self, channel: &Arc<Channel>) -> bool
    {
        self.channels.lock().add(channel)
    }

    pub(crate) fn leave_channel(&self, channel: &Arc<Channel>) -> bool
    {
        self.channels.lock().remove(channel)
    }

    pub fn channels(&self) -> Vec<Arc<Channel>>
    {
        self.channels.lock().iter().cloned().collect()
    }
}

impl fmt::Debug for Client
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("Client")
         .field("nick", &*self.nick.read())
         .field("hostname", &self.hostname)
         .field("transport", &self.transport.label())
         .finish()
    }
}

impl Identifier for Client
{
    fn id(&self) -> String
    {
        let has_user = self.user.read().is_some();
        if has_user
        {
            self.mask().to_string()
        }
        else
        {
            self.nick()
        }
    }

    fn nick(&self) -> String
    {
        self.nick.read().clone().unwrap_or_else(|| "*".to_string())
    }
}

impl Named for Client
{
    fn registry_key(&self) -> Option<String>
    {
        self.current_nick()
    }
}
