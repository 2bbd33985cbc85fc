use crate::*;
use crate::internal::*;

use tokio::{
    io::{
        AsyncBufRead,
        AsyncBufReadExt,
        AsyncReadExt,
    },
    sync::mpsc::Sender,
    select,
};

/// Reads lines from the stream and feeds them to the connection's [`InboundLines`].
pub struct InboundPump<R>
{
    reader: R,
    lines: Sender<String>,
    shutdown: ShutdownSignal,
    listener: ShutdownListener,
    max_line_len: usize,
    log_traffic: bool,
}

/// Strip any trailing line terminator characters
pub(crate) fn trim_line(line: &str) -> &str
{
    line.trim_end_matches(&['\r', '\n'][..])
}

impl<R> InboundPump<R>
    where R: AsyncBufRead + Unpin
{
    pub fn new(reader: R, lines: Sender<String>, shutdown: ShutdownSignal, max_line_len: usize, log_traffic: bool) -> Self
    {
        Self {
            reader,
            lines,
            listener: shutdown.listen(),
            shutdown,
            max_line_len: max_line_len.max(1),
            log_traffic,
        }
    }

    pub async fn run(mut self)
    {
        let limit = self.max_line_len as u64;
        let mut buf = Vec::new();

        loop
        {
            buf.clear();

            // Never buffer more than one maximum-length line
            let mut limited = (&mut self.reader).take(limit);

            let read = select!
            {
                _ = self.listener.wait() => {
                    tracing::debug!("inbound pump stopping for shutdown");
                    break;
                }
                read = limited.read_until(b'\n', &mut buf) => read
            };

            match read
            {
                Ok(0) => {
                    tracing::debug!("end of input");
                    break;
                }
                Ok(n) if n as u64 == limit && buf.last() != Some(&b'\n') => {
                    tracing::debug!(error = %TransportError::InputLineTooLong, limit, "closing connection");
                    break;
                }
                Ok(_) => { }
                Err(e) => {
                    tracing::debug!(error = %TransportError::from(e), "read failed");
                    break;
                }
            }

            let decoded = String::from_utf8_lossy(&buf);
            let line = trim_line(&decoded);
            if line.is_empty()
            {
                continue;
            }

            if self.log_traffic
            {
                tracing::debug!("→ {}", line);
            }

            let line = line.to_string();
            select!
            {
                _ = self.listener.wait() => {
                    break;
                }
                sent = self.lines.send(line) => if sent.is_err() {
                    tracing::debug!("inbound consumer went away");
                    break;
                }
            }
        }

        // Inbound failures are always fatal to the connection. The line sender is
        // dropped on return, which ends the inbound sequence.
        self.shutdown.trigger();
    }
}
