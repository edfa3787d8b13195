//! world-api - HTTP read/write access to the world geography database

pub mod cli;
pub mod http_server;
pub mod store;
