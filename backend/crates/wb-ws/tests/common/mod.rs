#![allow(dead_code)]

pub mod test_client;
pub mod test_server;

pub use test_client::WsTestClient;
pub use test_server::{
    TEST_JWT_SECRET, TestServerConfig, TestServerWithState, create_test_server,
    create_test_server_with_config,
};
