use lyra_transport::Transport;

/// Lines produced while the server state was locked, waiting to be written.
///
/// Writing may wait for queue space, so it happens only after the lock has
/// been released.
#[derive(Debug, Default)]
pub struct Outgoing
{
    batches: Vec<(Transport, Vec<String>)>,
}

impl Outgoing
{
    pub fn new() -> Self
    {
        Self::default()
    }

    pub fn push(&mut self, transport: &Transport, lines: Vec<String>)
    {
        if !lines.is_empty()
        {
            self.batches.push((transport.clone(), lines));
        }
    }

    pub fn is_empty(&self) -> bool
    {
        self.batches.is_empty()
    }

    /// Write every batch, in the order they were pushed
    pub async fn flush(self)
    {
        for (transport, lines) in self.batches
        {
            transport.write(lines).await;
        }
    }
}
