pub mod config;
pub mod extract;
pub mod output;
pub mod page;
pub mod search;
pub mod server;
pub mod session;
