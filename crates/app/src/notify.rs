//! User-visible notifications, backed by a `tokio::sync::broadcast`
//! channel so any number of frontends can observe them independently.

use tokio::sync::broadcast;

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 64;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// One user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Fan-out hub for notices.
///
/// Cheap to clone; all clones publish into the same channel. Publishing
/// with no subscribers is not an error -- a headless caller may rely on
/// return values alone.
#[derive(Clone)]
pub struct Notifier {
    sender: broadcast::Sender<Notice>,
}

impl Notifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to all notices published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.sender.subscribe()
    }

    /// Publish a notice to all current subscribers.
    pub fn publish(&self, notice: Notice) {
        let _ = self.sender.send(notice);
    }

    /// Publish an error-level notice.
    pub fn error(&self, message: impl Into<String>) {
        self.publish(Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        });
    }

    /// Publish an info-level notice.
    pub fn info(&self, message: impl Into<String>) {
        self.publish(Notice {
            level: NoticeLevel::Info,
            message: message.into(),
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_published_notices() {
        let notifier = Notifier::default();
        let mut receiver = notifier.subscribe();

        notifier.error("update refused");

        let notice = receiver.recv().await.unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "update refused");
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let notifier = Notifier::default();
        notifier.info("nobody is listening");
    }
}
