//! Delivery port: send a text message to a chat destination.

/// Trait for the outbound message transport.
///
/// `send` reports success or failure as a bool and never errors:
/// transport-level failures are the implementation's to log. There is a
/// single delivery attempt per call -- no queuing, no retries.
pub trait MessageSender: Send + Sync {
    /// Deliver `text` to the chat identified by `chat_id`.
    fn send(
        &self,
        chat_id: i64,
        text: &str,
    ) -> impl std::future::Future<Output = bool> + Send;
}
