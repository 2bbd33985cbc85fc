use crate::*;
use crate::internal::*;

use tokio::{
    io::{
        AsyncWrite,
        AsyncWriteExt,
        BufWriter,
    },
    sync::mpsc::Receiver,
    select,
};

/// Writes queued lines to the stream, one flush per line.
pub struct OutboundPump<W>
{
    writer: BufWriter<W>,
    queue: Receiver<String>,
    shutdown: ShutdownSignal,
    listener: ShutdownListener,
    log_traffic: bool,
}

/// The part of `line` that can go on the wire as a single line: everything
/// before the first CR, LF or NUL.
fn single_line(line: &str) -> &str
{
    match line.find(&['\r', '\n', '\0'][..])
    {
        Some(end) => &line[..end],
        None => line,
    }
}

async fn write_line<W>(writer: &mut BufWriter<W>, line: &str) -> Result<(), TransportError>
    where W: AsyncWrite + Unpin
{
    let safe = single_line(line);
    if safe.len() != inbound_pump::trim_line(line).len()
    {
        tracing::debug!(dropped = line.len() - safe.len(), "truncated outbound line at embedded line break");
    }

    writer.write_all(safe.as_bytes()).await?;
    writer.write_all(b"\r\n").await?;
    writer.flush().await?;
    Ok(())
}

impl<W> OutboundPump<W>
    where W: AsyncWrite + Unpin
{
    pub fn new(writer: W, queue: Receiver<String>, shutdown: ShutdownSignal, log_traffic: bool) -> Self
    {
        Self {
            writer: BufWriter::new(writer),
            queue,
            listener: shutdown.listen(),
            shutdown,
            log_traffic,
        }
    }

    pub async fn run(mut self)
    {
        loop
        {
            let line = select!
            {
                _ = self.listener.wait() => {
                    tracing::debug!("outbound pump stopping for shutdown");
                    break;
                }
                line = self.queue.recv() => match line
                {
                    Some(line) => line,
                    None => {
                        tracing::debug!("all transport handles dropped");
                        break;
                    }
                }
            };

            // A peer that stops reading must not be able to delay shutdown
            let written = select!
            {
                _ = self.listener.wait() => {
                    tracing::debug!("outbound pump stopping for shutdown");
                    break;
                }
                written = write_line(&mut self.writer, &line) => written
            };

            if let Err(e) = written
            {
                tracing::debug!(error = %e, "write failed; closing connection");
                break;
            }

            if self.log_traffic
            {
                tracing::debug!("← {}", line);
            }
        }

        self.shutdown.trigger();

        // Anything still buffered is abandoned
        if let Err(e) = self.writer.get_mut().shutdown().await
        {
            tracing::debug!(error = %TransportError::from(e), "error closing stream");
        }

        // Dropping the queue here wakes any writer waiting for space; from now on
        // every write is discarded immediately.
        drop(self.queue);
        tracing::debug!("closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        io,
        pin::Pin,
        task::{Context, Poll},
        time::Duration,
    };
    use tokio::sync::mpsc::channel;

    struct BrokenPipe;

    impl AsyncWrite for BrokenPipe {
        fn poll_write(self: Pin<&mut Self>, _: &mut Context<'_>, _: &[u8]) -> Poll<io::Result<usize>> {
            Poll::Ready(Err(io::ErrorKind::BrokenPipe.into()))
        }

        fn poll_flush(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Err(io::ErrorKind::BrokenPipe.into()))
        }

        fn poll_shutdown(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    #[tokio::test]
    async fn write_failure_stops_pump() {
        let (send, recv) = channel(16);
        let signal = ShutdownSignal::new();

        send.send("PING :x".to_string()).await.unwrap();

        let pump = OutboundPump::new(BrokenPipe, recv, signal.clone(), false);
        tokio::time::timeout(Duration::from_secs(1), pump.run()).await.unwrap();

        assert!(signal.is_triggered());
        assert!(send.send("more".to_string()).await.is_err());
    }

    #[test]
    fn single_line_cuts_at_first_break() {
        assert_eq!(single_line("PING x"), "PING x");
        assert_eq!(single_line("PING x\r\n"), "PING x");
        assert_eq!(single_line(":a PRIVMSG b :hi\r:srv KILL b"), ":a PRIVMSG b :hi");
        assert_eq!(single_line(":a PRIVMSG b :hi\n:srv KILL b"), ":a PRIVMSG b :hi");
        assert_eq!(single_line("nul\0after"), "nul");
        assert_eq!(single_line("\r\n"), "");
    }

    #[tokio::test]
    async fn embedded_line_breaks_never_reach_the_wire() {
        let (send, recv) = channel(16);
        let (client, server) = tokio::io::duplex(1024);

        send.send(":alice PRIVMSG bob :hi\r\n:evil!x@y KILL bob".to_string()).await.unwrap();
        send.send(":alice PRIVMSG bob :hi\r:evil!x@y KILL bob".to_string()).await.unwrap();
        send.send("before\0after".to_string()).await.unwrap();
        drop(send);

        OutboundPump::new(server, recv, ShutdownSignal::new(), false).run().await;

        let mut received = String::new();
        let mut client = client;
        tokio::io::AsyncReadExt::read_to_string(&mut client, &mut received).await.unwrap();
        assert_eq!(received, ":alice PRIVMSG bob :hi\r\n:alice PRIVMSG bob :hi\r\nbefore\r\n");
        assert_eq!(received.matches("\r\n").count(), 3);
        assert!(!received.contains("KILL"));
    }

    #[tokio::test]
    async fn writes_terminated_lines_in_order() {
        let (send, recv) = channel(16);
        let signal = ShutdownSignal::new();
        let (client, server) = tokio::io::duplex(1024);

        send.send("one".to_string()).await.unwrap();
        send.send("two\r\n".to_string()).await.unwrap();
        send.send("three".to_string()).await.unwrap();
        drop(send);

        OutboundPump::new(server, recv, signal.clone(), false).run().await;
        assert!(signal.is_triggered());

        let mut received = String::new();
        let mut client = client;
        tokio::io::AsyncReadExt::read_to_string(&mut client, &mut received).await.unwrap();
        assert_eq!(received, "one\r\ntwo\r\nthree\r\n");
    }
}
