use ferrous_console_domain::{DomainError, RconCommand, RconCommandResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::ports::RconConnector;

pub const DEFAULT_RCON_TIMEOUT: Duration = Duration::from_millis(5000);

/// Runs one connect → send → close cycle against an RCON server.
pub struct ExecuteRconCommandUseCase {
    connector: Arc<dyn RconConnector>,
    timeout: Duration,
}

impl ExecuteRconCommandUseCase {
    pub fn new(connector: Arc<dyn RconConnector>) -> Self {
        Self {
            connector,
            timeout: DEFAULT_RCON_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The session is closed whether or not the send succeeds. A close
    /// failure after a successful send fails the request; after a failed
    /// send the send error wins.
    #[instrument(skip(self, request), fields(server = %request.target))]
    pub async fn execute(&self, request: &RconCommand) -> Result<RconCommandResult, DomainError> {
        let mut session = self
            .connector
            .connect(&request.target, &request.password, self.timeout)
            .await?;

        let sent = session.send(&request.command).await;
        let closed = session.end().await;

        let output = match sent {
            Ok(output) => output,
            Err(e) => {
                if let Err(close_err) = closed {
                    warn!(error = %close_err, "Failed to close RCON connection after send error");
                }
                return Err(e);
            }
        };
        closed?;

        debug!(bytes = output.len(), "RCON command executed");

        Ok(RconCommandResult { output })
    }
}
