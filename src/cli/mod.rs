pub mod matcher;
pub mod server;
