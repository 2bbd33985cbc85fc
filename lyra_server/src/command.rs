//! Handlers for the commands a client may send

use crate::*;

use lyra_state::{EntitySet, RegistryError};
use lyra_wire::{message, numeric, Identifier, NamesReply, Origin, Reply};

use std::sync::Arc;

/// Everything a command handler may touch. Only ever constructed while the
/// server state lock is held.
pub(crate) struct CommandContext<'a>
{
    pub server: &'a Server,
    pub state: &'a mut ServerState,
    pub client: &'a Arc<Client>,
    pub out: &'a mut Outgoing,
    /// Set by `QUIT`; the connection ends once the command completes
    pub quit: Option<String>,
}

impl CommandContext<'_>
{
    fn origin(&self) -> &Origin
    {
        self.server.origin()
    }

    pub fn send_to(&mut self, to: &Client, reply: impl Into<Reply>)
    {
        let lines = self.server.encoder().format(&reply.into(), to);
        self.out.push(to.transport(), lines);
    }

    pub fn reply(&mut self, reply: impl Into<Reply>)
    {
        let client = self.client;
        self.send_to(client, reply);
    }

    /// Send `reply` to every member of `channel`, optionally skipping one
    fn send_to_channel(&mut self, channel: &Channel, reply: impl Into<Reply>, except: Option<&Arc<Client>>)
    {
        let reply = reply.into();
        for member in channel.members()
        {
            if except.map_or(false, |e| Arc::ptr_eq(e, &member))
            {
                continue;
            }
            self.send_to(&member, reply.clone());
        }
    }

    /// Send `reply` once to everyone sharing a channel with the current
    /// client, and to the client itself if `include_self` is set
    fn send_to_peers(&mut self, reply: impl Into<Reply>, include_self: bool)
    {
        let reply = reply.into();
        let mut peers = EntitySet::new();
        if include_self
        {
            peers.add(self.client);
        }
        for channel in self.client.channels()
        {
            for member in channel.members()
            {
                if !Arc::ptr_eq(&member, self.client)
                {
                    peers.add(&member);
                }
            }
        }
        for peer in peers.iter()
        {
            self.send_to(peer, reply.clone());
        }
    }
}

/// Commands that require registration to have completed
const AFTER_REGISTRATION: &[&str] = &["JOIN", "PART", "NAMES", "TOPIC", "PRIVMSG", "NOTICE"];

pub(crate) fn dispatch(ctx: &mut CommandContext<'_>, msg: &ClientMessage) -> CommandResult
{
    let command = msg.command.as_str();

    if AFTER_REGISTRATION.contains(&command) && !ctx.client.is_registered()
    {
        return Err(CommandError::NotRegistered);
    }

    match command
    {
        "NICK" => handle_nick(ctx, msg),
        "USER" => handle_user(ctx, msg),
        "PING" => handle_ping(ctx, msg),
        "PONG" => Ok(()),
        "QUIT" => handle_quit(ctx, msg),
        "JOIN" => handle_join(ctx, msg),
        "PART" => handle_part(ctx, msg),
        "NAMES" => handle_names(ctx, msg),
        "TOPIC" => handle_topic(ctx, msg),
        "PRIVMSG" | "NOTICE" => handle_message(ctx, msg),
        _ => Err(CommandError::CommandNotFound(msg.command.clone())),
    }
}

/// Whether `nick` is acceptable as a nickname
pub fn is_valid_nick(nick: &str) -> bool
{
    const SPECIAL: &str = "[]\\`_^{|}-";

    let mut chars = nick.chars();
    let first_ok = chars.next().map_or(false, |c| c.is_ascii_alphabetic() || (SPECIAL.contains(c) && c != '-'));

    first_ok
        && nick.len() <= 30
        && chars.all(|c| c.is_ascii_alphanumeric() || SPECIAL.contains(c))
}

fn handle_nick(ctx: &mut CommandContext<'_>, msg: &ClientMessage) -> CommandResult
{
    let Some(new_nick) = msg.arg(0) else {
        return Err(numeric::no_nickname_given(ctx.origin()).into());
    };

    if !is_valid_nick(new_nick)
    {
        return Err(numeric::erroneous_nickname(ctx.origin(), new_nick).into());
    }

    let client = ctx.client;
    let old_nick = client.current_nick();

    if old_nick.as_deref() == Some(new_nick)
    {
        return Ok(());
    }

    // Captures the old identity as the line's origin
    let change = message::nick(&**client, new_nick);

    if old_nick.is_some()
    {
        ctx.state.clients.remove(client)?;
    }

    client.set_nick(Some(new_nick.to_string()));

    if let Err(e) = ctx.state.clients.add(Arc::clone(client))
    {
        client.set_nick(old_nick.clone());
        if old_nick.is_some()
        {
            ctx.state.clients.add(Arc::clone(client))?;
        }
        return Err(e.into());
    }

    tracing::debug!(old = ?old_nick, new = %new_nick, "nick change");

    if client.is_registered()
    {
        ctx.send_to_peers(change, true);
    }

    try_complete_registration(ctx);
    Ok(())
}

fn handle_user(ctx: &mut CommandContext<'_>, msg: &ClientMessage) -> CommandResult
{
    if ctx.client.is_registered()
    {
        return Err(numeric::already_registered(ctx.origin()).into());
    }

    let (Some(username), Some(realname)) = (msg.arg(0), msg.arg(3)) else {
        return Err(CommandError::NotEnoughParameters(msg.command.clone()));
    };

    ctx.client.set_user_info(UserInfo {
        username: username.to_string(),
        realname: realname.to_string(),
    });

    try_complete_registration(ctx);
    Ok(())
}

fn try_complete_registration(ctx: &mut CommandContext<'_>)
{
    let client = ctx.client;
    if client.is_registered() || !client.can_register()
    {
        return;
    }

    client.set_registered();
    tracing::info!(client = %client.id(), "client registered");

    let server = ctx.server;
    let origin = server.origin();
    let config = server.config();

    ctx.reply(numeric::welcome(origin, &client.id()));
    ctx.reply(numeric::your_host(origin, &config.server_name, &config.version));
    ctx.reply(numeric::created(origin, server.created()));
    ctx.reply(numeric::my_info(origin, &config.server_name, &config.version));

    match &config.motd
    {
        Some(motd) => {
            ctx.reply(numeric::motd_start(origin, &config.server_name));
            for line in motd
            {
                ctx.reply(numeric::motd(origin, line));
            }
            ctx.reply(numeric::end_of_motd(origin));
        }
        None => ctx.reply(numeric::no_motd(origin)),
    }
}

fn handle_ping(ctx: &mut CommandContext<'_>, msg: &ClientMessage) -> CommandResult
{
    let Some(token) = msg.arg(0) else {
        return Err(CommandError::NotEnoughParameters(msg.command.clone()));
    };

    let pong = message::pong(ctx.origin(), &Origin::new(token, token));
    ctx.reply(pong);
    Ok(())
}

fn handle_quit(ctx: &mut CommandContext<'_>, msg: &ClientMessage) -> CommandResult
{
    ctx.quit = Some(msg.arg(0).unwrap_or("Client Quit").to_string());
    Ok(())
}

fn handle_join(ctx: &mut CommandContext<'_>, msg: &ClientMessage) -> CommandResult
{
    let Some(names) = msg.arg(0) else {
        return Err(CommandError::NotEnoughParameters(msg.command.clone()));
    };

    let client = ctx.client;

    for name in names.split(',').filter(|n| !n.is_empty())
    {
        if !is_channel_name(name)
        {
            ctx.reply(numeric::no_such_channel(ctx.origin(), name));
            continue;
        }

        let channel = match ctx.state.channels.get(name) {
            Some(channel) => Arc::clone(channel),
            None => {
                let channel = Channel::new(name, ctx.origin().clone());
                ctx.state.channels.add(Arc::clone(&channel))?;
                tracing::debug!(channel = %name, "channel created");
                channel
            }
        };

        if channel.has_member(client)
        {
            continue;
        }

        channel.add_member(client);
        client.join_channel(&channel);

        ctx.send_to_channel(&channel, message::join(&**client, name), None);

        if let Some(topic) = channel.topic()
        {
            ctx.reply(numeric::topic(ctx.origin(), name, &topic));
        }
        ctx.reply(NamesReply::new(channel));
    }

    Ok(())
}

fn handle_part(ctx: &mut CommandContext<'_>, msg: &ClientMessage) -> CommandResult
{
    let Some(names) = msg.arg(0) else {
        return Err(CommandError::NotEnoughParameters(msg.command.clone()));
    };
    let reason = msg.arg(1).unwrap_or("");
    let client = ctx.client;

    for name in names.split(',').filter(|n| !n.is_empty())
    {
        let Some(channel) = ctx.state.channels.get(name).cloned() else {
            ctx.reply(numeric::no_such_channel(ctx.origin(), name));
            continue;
        };

        if !channel.has_member(client)
        {
            ctx.reply(numeric::not_on_channel(ctx.origin(), name));
            continue;
        }

        ctx.send_to_channel(&channel, message::part(&**client, name, reason), None);
        leave_channel(ctx.state, client, &channel)?;
    }

    Ok(())
}

/// Remove `client` from `channel`, and the channel from the registry if it
/// is left empty
pub(crate) fn leave_channel(state: &mut ServerState, client: &Arc<Client>, channel: &Arc<Channel>) -> Result<(), RegistryError>
{
    channel.remove_member(client);
    client.leave_channel(channel);

    if channel.is_empty()
    {
        state.channels.remove(channel)?;
        tracing::debug!(channel = %channel.id(), "channel destroyed");
    }
    Ok(())
}

fn handle_names(ctx: &mut CommandContext<'_>, msg: &ClientMessage) -> CommandResult
{
    let channels: Vec<(String, Option<Arc<Channel>>)> = match msg.arg(0) {
        Some(names) => names.split(',')
                            .filter(|n| !n.is_empty())
                            .map(|n| (n.to_string(), ctx.state.channels.get(n).cloned()))
                            .collect(),
        None => ctx.client.channels().into_iter().map(|c| (c.id(), Some(c))).collect(),
    };

    for (name, channel) in channels
    {
        match channel
        {
            Some(channel) => ctx.reply(NamesReply::new(channel)),
            None => ctx.reply(numeric::end_of_names(ctx.origin(), &name)),
        }
    }

    Ok(())
}

fn handle_topic(ctx: &mut CommandContext<'_>, msg: &ClientMessage) -> CommandResult
{
    let Some(name) = msg.arg(0) else {
        return Err(CommandError::NotEnoughParameters(msg.command.clone()));
    };

    let Some(channel) = ctx.state.channels.get(name).cloned() else {
        return Err(numeric::no_such_channel(ctx.origin(), name).into());
    };

    let Some(text) = msg.arg(1) else {
        match channel.topic()
        {
            Some(topic) => ctx.reply(numeric::topic(ctx.origin(), name, &topic)),
            None => ctx.reply(numeric::no_topic(ctx.origin(), name)),
        }
        return Ok(());
    };

    let client = ctx.client;
    if !channel.has_member(client)
    {
        return Err(numeric::not_on_channel(ctx.origin(), name).into());
    }

    // An empty topic clears it
    channel.set_topic(Some(text.to_string()).filter(|t| !t.is_empty()));
    ctx.send_to_channel(&channel, message::topic(&**client, name, text), None);
    Ok(())
}

fn handle_message(ctx: &mut CommandContext<'_>, msg: &ClientMessage) -> CommandResult
{
    let is_notice = msg.command == "NOTICE";

    match deliver_message(ctx, msg, is_notice)
    {
        // Errors are never sent in response to a notice
        Err(CommandError::Numeric(_)) if is_notice => Ok(()),
        other => other,
    }
}

fn deliver_message(ctx: &mut CommandContext<'_>, msg: &ClientMessage, is_notice: bool) -> CommandResult
{
    let Some(target) = msg.arg(0) else {
        return Err(numeric::no_recipient(ctx.origin(), &msg.command).into());
    };
    let Some(text) = msg.arg(1).filter(|t| !t.is_empty()) else {
        return Err(numeric::no_text_to_send(ctx.origin()).into());
    };

    let client = ctx.client;

    if target.starts_with('#')
    {
        let Some(channel) = ctx.state.channels.get(target).cloned() else {
            return Err(numeric::no_such_nick(ctx.origin(), target).into());
        };
        if !channel.has_member(client)
        {
            return Err(numeric::cannot_send_to_chan(ctx.origin(), target).into());
        }

        let reply = if is_notice { message::notice(&**client, &*channel, text) } else { message::privmsg(&**client, &*channel, text) };
        ctx.send_to_channel(&channel, reply, Some(client));
    }
    else
    {
        let Some(recipient) = ctx.state.clients.get(target).cloned() else {
            return Err(numeric::no_such_nick(ctx.origin(), target).into());
        };

        let reply = if is_notice { message::notice(&**client, &*recipient, text) } else { message::privmsg(&**client, &*recipient, text) };
        ctx.send_to(&recipient, reply);
    }

    Ok(())
}
