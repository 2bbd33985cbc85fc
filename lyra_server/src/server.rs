use crate::*;
use crate::command::{dispatch, leave_channel, CommandContext};

use lyra_state::{EntitySet, NameRegistry, RegistryError};
use lyra_transport::Transport;
use lyra_wire::{message, numeric, Identifier, NumericReply, Origin, Reply, ReplyEncoder};
use parking_lot::Mutex;
use tokio::{
    io::{AsyncRead, AsyncWrite},
    net::TcpListener,
};
use tracing::Instrument;

use std::sync::Arc;

/// Everything shared between connections.
///
/// Only ever accessed through the lock in [`Server`]; the registries
/// themselves are not synchronised.
#[derive(Default)]
pub struct ServerState
{
    pub clients: NameRegistry<Client>,
    pub channels: NameRegistry<Channel>,
}

pub struct Server
{
    config: ServerConfig,
    origin: Origin,
    encoder: ReplyEncoder,
    created: String,
    state: Mutex<ServerState>,
}

impl Server
{
    pub fn new(config: ServerConfig) -> Arc<Self>
    {
        let origin = Origin::new(config.server_name.clone(), config.server_name.clone());
        let encoder = ReplyEncoder::new(config.encoder.clone());
        let created = chrono::Utc::now().format("%a %b %e %Y at %H:%M:%S UTC").to_string();

        Arc::new(Self {
            config,
            origin,
            encoder,
            created,
            state: Mutex::new(ServerState::default()),
        })
    }

    pub fn config(&self) -> &ServerConfig
    {
        &self.config
    }

    /// The origin used for server-generated lines
    pub fn origin(&self) -> &Origin
    {
        &self.origin
    }

    pub fn encoder(&self) -> &ReplyEncoder
    {
        &self.encoder
    }

    pub fn created(&self) -> &str
    {
        &self.created
    }

    pub fn client_count(&self) -> usize
    {
        self.state.lock().clients.len()
    }

    pub fn channel_count(&self) -> usize
    {
        self.state.lock().channels.len()
    }

    /// Bind the configured address and serve connections until accepting fails
    pub async fn run(self: Arc<Self>) -> std::io::Result<()>
    {
        let listener = TcpListener::bind(self.config.listen).await?;
        tracing::info!(addr = %listener.local_addr()?, "listening");
        self.serve(listener).await
    }

    /// Accept connections from `listener`, each handled on its own task
    pub async fn serve(self: Arc<Self>, listener: TcpListener) -> std::io::Result<()>
    {
        loop
        {
            let (stream, addr) = listener.accept().await?;
            let server = Arc::clone(&self);
            tokio::spawn(server.handle_connection(stream, addr.ip().to_string(), addr.to_string()));
        }
    }

    /// Run one client connection to completion.
    ///
    /// Returns once the client has quit or the connection has ended, by which
    /// point the client has been removed from all server state.
    pub async fn handle_connection<S>(self: Arc<Self>, stream: S, hostname: String, label: String)
        where S: AsyncRead + AsyncWrite + Send + 'static
    {
        let span = tracing::info_span!("client", peer = %label);

        async move {
            let (transport, mut lines) = Transport::start(stream, label, &self.config.transport);
            let client = Client::new(hostname, transport.clone());
            tracing::info!("client connected");

            let mut quit = None;
            while let Some(line) = lines.next_line().await
            {
                let (out, reason) = self.process_line(&client, &line);
                out.flush().await;

                if reason.is_some()
                {
                    quit = reason;
                    break;
                }
            }

            let reason = quit.unwrap_or_else(|| "Connection closed".to_string());
            self.disconnect(&client, &reason).flush().await;
            transport.close();
            tracing::info!(%reason, "client disconnected");
        }
        .instrument(span)
        .await
    }

    /// Handle one line from `client` under the state lock.
    ///
    /// Returns the lines to write once the lock is released, and the quit
    /// reason if the client asked to leave.
    pub(crate) fn process_line(&self, client: &Arc<Client>, line: &str) -> (Outgoing, Option<String>)
    {
        let mut out = Outgoing::new();

        let Some(msg) = ClientMessage::parse(line) else {
            return (out, None);
        };
        tracing::trace!(command = %msg.command, args = ?msg.args, "received");

        let mut state = self.state.lock();
        let mut ctx = CommandContext {
            server: self,
            state: &mut *state,
            client,
            out: &mut out,
            quit: None,
        };

        if let Err(err) = dispatch(&mut ctx, &msg)
        {
            tracing::debug!(command = %msg.command, error = %err, "command failed");
            if let Some(reply) = self.translate_error(err)
            {
                ctx.reply(reply);
            }
        }

        let quit = ctx.quit.take();
        drop(state);
        (out, quit)
    }

    fn translate_error(&self, err: CommandError) -> Option<NumericReply>
    {
        match err
        {
            CommandError::CommandNotFound(command) => Some(numeric::unknown_command(&self.origin, &command)),
            CommandError::NotEnoughParameters(command) => Some(numeric::need_more_params(&self.origin, &command)),
            CommandError::NotRegistered => Some(numeric::not_registered(&self.origin)),
            CommandError::Registry(RegistryError::DuplicateName(nick)) => Some(numeric::nickname_in_use(&self.origin, &nick)),
            CommandError::Registry(e) => {
                tracing::error!(error = %e, "registry inconsistency");
                None
            }
            CommandError::Numeric(n) => Some(n),
        }
    }

    /// Remove `client` from every channel and from the nickname registry,
    /// telling anyone who shared a channel with it.
    fn disconnect(&self, client: &Arc<Client>, reason: &str) -> Outgoing
    {
        let mut out = Outgoing::new();
        let mut state = self.state.lock();

        let quit: Reply = message::quit(&**client, reason).into();
        let mut peers = EntitySet::new();

        for channel in client.channels()
        {
            for member in channel.members()
            {
                if !Arc::ptr_eq(&member, client)
                {
                    peers.add(&member);
                }
            }
            if let Err(e) = leave_channel(&mut state, client, &channel)
            {
                tracing::error!(channel = %channel.id(), error = %e, "failed to remove empty channel");
            }
        }

        if client.current_nick().is_some()
        {
            if let Err(e) = state.clients.remove(client)
            {
                tracing::error!(client = %client.id(), error = %e, "failed to release nickname");
            }
        }

        if client.is_registered()
        {
            for peer in peers.iter()
            {
                out.push(peer.transport(), self.encoder.format(&quit, &**peer));
            }
        }

        drop(state);
        out
    }
}
