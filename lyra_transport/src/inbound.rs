use std::{
    pin::Pin,
    task::{Context, Poll},
};

use futures::Stream;
use tokio::sync::mpsc::Receiver;

/// The sequence of lines received on a connection.
///
/// Each item is one line with its terminator removed; empty lines are never
/// produced. The sequence ends, permanently, when the stream reaches end of
/// input, fails, or the transport is closed.
#[derive(Debug)]
pub struct InboundLines
{
    receiver: Receiver<String>,
}

impl InboundLines
{
    pub(crate) fn new(receiver: Receiver<String>) -> Self
    {
        Self { receiver }
    }

    /// Wait for the next line, or `None` once the connection has ended.
    pub async fn next_line(&mut self) -> Option<String>
    {
        self.receiver.recv().await
    }
}

impl Stream for InboundLines
{
    type Item = String;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<String>>
    {
        self.get_mut().receiver.poll_recv(cx)
    }
}
