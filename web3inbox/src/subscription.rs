use tokio::sync::broadcast;

/// Receiver over a broadcast channel that skips lagged messages.
pub struct Subscription<T> {
    name: &'static str,
    rx: broadcast::Receiver<T>,
}

impl<T: Clone> Subscription<T> {
    pub fn new(name: &'static str, rx: broadcast::Receiver<T>) -> Self {
        Self { name, rx }
    }

    /// Receive the next message. Returns `None` if the channel is closed.
    pub async fn next(&mut self) -> Option<T> {
        loop {
            match self.rx.recv().await {
                Ok(msg) => return Some(msg),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!("{} subscription lagged by {n} messages", self.name);
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_skips_lagged_messages() {
        let (tx, rx) = broadcast::channel(2);
        let mut sub = Subscription::new("test", rx);
        for i in 0..5u32 {
            tx.send(i).unwrap();
        }
        // Capacity 2 keeps only the last two.
        assert_eq!(sub.next().await, Some(3));
        assert_eq!(sub.next().await, Some(4));
    }

    #[tokio::test]
    async fn test_none_when_closed() {
        let (tx, rx) = broadcast::channel::<u32>(4);
        let mut sub = Subscription::new("test", rx);
        drop(tx);
        assert_eq!(sub.next().await, None);
    }
}
