use async_trait::async_trait;
use ferrous_console_domain::{DomainError, RconPassword, RconTarget};
use std::time::Duration;

/// Opens authenticated RCON sessions.
///
/// Every failure (refused connection, rejected password, timeout) is
/// reported as `DomainError::RconFailure` carrying the client's message.
#[async_trait]
pub trait RconConnector: Send + Sync {
    async fn connect(
        &self,
        target: &RconTarget,
        password: &RconPassword,
        timeout: Duration,
    ) -> Result<Box<dyn RconSession>, DomainError>;
}

/// One open RCON connection, owned by a single request.
#[async_trait]
pub trait RconSession: Send {
    /// Sends one command and waits for its response text.
    async fn send(&mut self, command: &str) -> Result<String, DomainError>;

    /// Closes the connection. Consumes the session so it cannot be reused.
    async fn end(self: Box<Self>) -> Result<(), DomainError>;
}
