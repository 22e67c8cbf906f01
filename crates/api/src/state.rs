use ferrous_console_application::use_cases::{ExecuteRconCommandUseCase, LookupDomainUseCase};
use std::sync::Arc;

/// Request handlers share only these immutable use cases; nothing mutable
/// lives across requests.
#[derive(Clone)]
pub struct AppState {
    pub lookup_domain: Arc<LookupDomainUseCase>,
    pub execute_rcon: Arc<ExecuteRconCommandUseCase>,
}
