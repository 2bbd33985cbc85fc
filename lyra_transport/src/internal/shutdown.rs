use std::sync::Arc;
use tokio::sync::watch;

/// The single shutdown signal shared by a transport's handles and both of its pumps.
///
/// Raising it more than once has no further effect.
#[derive(Clone, Debug)]
pub struct ShutdownSignal(Arc<watch::Sender<bool>>);

/// Waits for a [`ShutdownSignal`] to be raised.
#[derive(Debug)]
pub struct ShutdownListener(watch::Receiver<bool>);

impl ShutdownSignal
{
    pub fn new() -> Self
    {
        let (sender, _) = watch::channel(false);
        Self(Arc::new(sender))
    }

    /// Raise the signal. Returns true if this call was the one that raised it.
    pub fn trigger(&self) -> bool
    {
        !self.0.send_replace(true)
    }

    pub fn is_triggered(&self) -> bool
    {
        *self.0.borrow()
    }

    pub fn listen(&self) -> ShutdownListener
    {
        ShutdownListener(self.0.subscribe())
    }
}

impl ShutdownListener
{
    /// Resolves once the signal has been raised. Cancel-safe.
    pub async fn wait(&mut self)
    {
        loop
        {
            if *self.0.borrow_and_update()
            {
                return;
            }
            if self.0.changed().await.is_err()
            {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn trigger_once() {
        let signal = ShutdownSignal::new();
        assert!(!signal.is_triggered());
        assert!(signal.trigger());
        assert!(!signal.trigger());
        assert!(signal.is_triggered());
    }

    #[tokio::test]
    async fn listener_created_before_trigger() {
        let signal = ShutdownSignal::new();
        let mut listener = signal.listen();

        let waiter = tokio::spawn(async move { listener.wait().await });
        signal.trigger();

        tokio::time::timeout(Duration::from_secs(1), waiter).await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn listener_created_after_trigger() {
        let signal = ShutdownSignal::new();
        signal.trigger();

        let mut listener = signal.listen();
        tokio::time::timeout(Duration::from_secs(1), listener.wait()).await.unwrap();
    }
}
