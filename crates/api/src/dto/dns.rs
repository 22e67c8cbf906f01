use ferrous_console_domain::DnsLookupResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request DTO for `POST /api/dns`.
///
/// `domain` is kept as raw JSON so falsy values (`false`, `0`, `""`) can be
/// told apart from values of the wrong kind.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupRequest {
    pub domain: Option<Value>,
}

/// How the `domain` field of a lookup request reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainField<'a> {
    Missing,
    Name(&'a str),
    /// Truthy but not a string, e.g. `5` or `{}`.
    Unsupported,
}

impl LookupRequest {
    pub fn domain_field(&self) -> DomainField<'_> {
        match &self.domain {
            None | Some(Value::Null) | Some(Value::Bool(false)) => DomainField::Missing,
            Some(Value::String(name)) if name.is_empty() => DomainField::Missing,
            Some(Value::String(name)) => DomainField::Name(name.as_str()),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => DomainField::Missing,
            Some(_) => DomainField::Unsupported,
        }
    }
}

/// Response DTO for a successful A lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResponse {
    pub domain: String,
    pub records: Vec<String>,
    #[serde(rename = "type")]
    pub record_type: String,
}

impl From<DnsLookupResult> for LookupResponse {
    fn from(result: DnsLookupResult) -> Self {
        Self {
            record_type: result.record_type().to_string(),
            domain: result.domain.to_string(),
            records: result.records.iter().map(|ip| ip.to_string()).collect(),
        }
    }
}
