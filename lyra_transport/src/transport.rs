use crate::*;
use crate::internal::*;

use std::sync::Arc;

use tokio::{
    io::{
        AsyncRead,
        AsyncWrite,
        BufReader,
    },
    sync::mpsc::{
        channel,
        Sender,
    },
};
use tracing::Instrument;

/// Handle to a running connection transport.
///
/// Cloning the handle is cheap; all clones feed the same outbound queue. The
/// outbound pump keeps running while any handle exists and shutdown has not
/// been requested.
#[derive(Clone, Debug)]
pub struct Transport
{
    label: Arc<str>,
    queue: Sender<String>,
    shutdown: ShutdownSignal,
}

impl Transport
{
    /// Begin running a transport over `stream`.
    ///
    /// Spawns the inbound and outbound pumps onto the current tokio runtime and
    /// returns immediately. `label` identifies the connection in log output,
    /// typically the peer address.
    pub fn start<S>(stream: S, label: impl Into<String>, config: &TransportConfig) -> (Self, InboundLines)
        where S: AsyncRead + AsyncWrite + Send + 'static
    {
        let label: String = label.into();
        let label: Arc<str> = label.into();
        let (reader, writer) = tokio::io::split(stream);
        let (queue_send, queue_recv) = channel(config.send_queue_len.max(1));
        let (lines_send, lines_recv) = channel(config.receive_queue_len.max(1));
        let shutdown = ShutdownSignal::new();

        let span = tracing::debug_span!("connection", peer = %label);

        let inbound = InboundPump::new(BufReader::new(reader), lines_send, shutdown.clone(), config.max_line_len, config.log_traffic);
        tokio::spawn(inbound.run().instrument(span.clone()));

        let outbound = OutboundPump::new(writer, queue_recv, shutdown.clone(), config.log_traffic);
        tokio::spawn(outbound.run().instrument(span));

        let transport = Self {
            label,
            queue: queue_send,
            shutdown,
        };

        (transport, InboundLines::new(lines_recv))
    }

    /// The label this transport was started with
    pub fn label(&self) -> &str
    {
        &self.label
    }

    /// Queue lines for sending, in order.
    ///
    /// Waits for space if the outbound queue is full. Once the transport has shut
    /// down, lines are discarded and this returns immediately.
    pub async fn write<I>(&self, lines: I)
        where I: IntoIterator,
              I::Item: Into<String>
    {
        for line in lines
        {
            if self.shutdown.is_triggered() || self.queue.send(line.into()).await.is_err()
            {
                tracing::trace!(peer = %self.label, "discarding write to closed transport");
                return;
            }
        }
    }

    /// Queue a single line for sending. See [`write`](Self::write).
    pub async fn write_line(&self, line: impl Into<String>)
    {
        self.write(std::iter::once(line.into())).await
    }

    /// Queue a line without waiting.
    ///
    /// Fails with `SendQueueFull` if there is no space, or `Closed` if the
    /// transport has shut down.
    pub fn try_write_line(&self, line: impl Into<String>) -> Result<(), TransportError>
    {
        if self.shutdown.is_triggered()
        {
            return Err(TransportError::Closed);
        }
        Ok(self.queue.try_send(line.into())?)
    }

    /// Request shutdown.
    ///
    /// Returns without waiting for the pumps to stop. Lines still queued at that
    /// point may not be delivered. Calling this more than once has no further
    /// effect.
    pub fn close(&self)
    {
        if self.shutdown.trigger()
        {
            tracing::debug!(peer = %self.label, "close requested");
        }
    }

    /// Whether shutdown has been requested, by a call to [`close`](Self::close)
    /// or by either pump stopping.
    pub fn is_closed(&self) -> bool
    {
        self.shutdown.is_triggered()
    }
}
