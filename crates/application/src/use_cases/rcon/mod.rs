mod execute_command;

pub use execute_command::{ExecuteRconCommandUseCase, DEFAULT_RCON_TIMEOUT};
