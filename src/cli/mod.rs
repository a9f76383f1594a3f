pub mod password;
pub mod server;
pub mod session;
