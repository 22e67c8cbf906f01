use async_trait::async_trait;
use ferrous_console_application::ports::{RconConnector, RconSession};
use ferrous_console_domain::{DomainError, RconPassword, RconTarget};
use rcon::Connection;
use std::time::Duration;
use tokio::net::TcpStream;
use tracing::debug;

/// RCON over TCP. Packet framing and the auth handshake come from the
/// `rcon` crate; this adapter only bounds each phase with a timeout.
#[derive(Debug, Clone, Default)]
pub struct TcpRconConnector {
    minecraft_quirks: bool,
}

impl TcpRconConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_minecraft_quirks(mut self, enabled: bool) -> Self {
        self.minecraft_quirks = enabled;
        self
    }
}

#[async_trait]
impl RconConnector for TcpRconConnector {
    async fn connect(
        &self,
        target: &RconTarget,
        password: &RconPassword,
        timeout: Duration,
    ) -> Result<Box<dyn RconSession>, DomainError> {
        let handshake = <Connection<TcpStream>>::builder()
            .enable_minecraft_quirks(self.minecraft_quirks)
            .connect((&*target.host, target.port), password.expose());

        let connection = tokio::time::timeout(timeout, handshake)
            .await
            .map_err(|_| timeout_error(timeout))?
            .map_err(map_rcon_error)?;

        debug!(server = %target, "RCON session authenticated");

        Ok(Box::new(TcpRconSession {
            connection,
            timeout,
        }))
    }
}

struct TcpRconSession {
    connection: Connection<TcpStream>,
    timeout: Duration,
}

#[async_trait]
impl RconSession for TcpRconSession {
    async fn send(&mut self, command: &str) -> Result<String, DomainError> {
        tokio::time::timeout(self.timeout, self.connection.cmd(command))
            .await
            .map_err(|_| timeout_error(self.timeout))?
            .map_err(map_rcon_error)
    }

    async fn end(self: Box<Self>) -> Result<(), DomainError> {
        // Dropping the connection closes the socket.
        drop(self);
        Ok(())
    }
}

fn timeout_error(limit: Duration) -> DomainError {
    DomainError::RconFailure(format!("Timeout after {}ms", limit.as_millis()))
}

fn map_rcon_error(err: rcon::Error) -> DomainError {
    match err {
        rcon::Error::Auth => DomainError::RconFailure("Authentication failed".to_string()),
        other => DomainError::RconFailure(other.to_string()),
    }
}
