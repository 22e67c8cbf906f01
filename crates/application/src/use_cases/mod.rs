pub mod dns;
pub mod rcon;

pub use dns::LookupDomainUseCase;
pub use rcon::ExecuteRconCommandUseCase;
