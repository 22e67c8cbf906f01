//! Ferrous Console Infrastructure Layer
pub mod dns;
pub mod rcon;
