use crate::validators::{is_present, parse_port_number, parse_port_text};
use crate::DomainError;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// A port as supplied by the client: JSON number or string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PortInput {
    Number(f64),
    Text(String),
}

impl PortInput {
    /// Zero, NaN and the empty string count as absent.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => is_present(s),
        }
    }

    pub fn parse(&self) -> Result<u16, DomainError> {
        match self {
            Self::Number(n) => parse_port_number(*n),
            Self::Text(s) => parse_port_text(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RconTarget {
    pub host: Arc<str>,
    pub port: u16,
}

impl RconTarget {
    pub fn new(host: impl Into<Arc<str>>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for RconTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// RCON password. Lives for one connection and is redacted in `Debug`.
#[derive(Clone)]
pub struct RconPassword(String);

impl RconPassword {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RconPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RconPassword(***)")
    }
}

/// A validated single-command RCON request.
#[derive(Debug, Clone)]
pub struct RconCommand {
    pub target: RconTarget,
    pub password: RconPassword,
    pub command: String,
}

impl RconCommand {
    /// Checks that all four fields are present before parsing the port.
    /// Any absent field yields `MissingRconFields`; a present but
    /// unparsable port yields `InvalidPort`.
    pub fn new(
        host: Option<&str>,
        port: Option<&PortInput>,
        password: Option<&str>,
        command: Option<&str>,
    ) -> Result<Self, DomainError> {
        let (Some(host), Some(port), Some(password), Some(command)) =
            (host, port, password, command)
        else {
            return Err(DomainError::MissingRconFields);
        };

        if !is_present(host) || !port.is_present() || !is_present(password) || !is_present(command)
        {
            return Err(DomainError::MissingRconFields);
        }

        Ok(Self {
            target: RconTarget::new(host, port.parse()?),
            password: RconPassword::new(password),
            command: command.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RconCommandResult {
    pub output: String,
}
