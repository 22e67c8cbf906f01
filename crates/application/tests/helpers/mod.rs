#![allow(dead_code)]


pub use mock_ports::{MockDnsResolver, MockRconConnector};
