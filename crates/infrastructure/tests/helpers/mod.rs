#![allow(dead_code)]

mod dns_client;
mod test_server;

pub use dns_client::*;
pub use test_server::*;
