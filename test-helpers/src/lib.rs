pub mod mock;
pub mod server;
pub mod telemetry;

use std::net::TcpListener;

use client::{FetchClient, FetchError};
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub address: String,
    pub client: FetchClient,
}

impl TestApp {
    /// Absolute URL for a path on the stub server.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let listener = TcpListener::bind(format!("127.0.0.1:{port}"))
        .expect("failed to bind stub server port");
    let port = listener
        .local_addr()
        .expect("listener has no local address")
        .port();
    let server = server::build(listener).expect("failed to build stub server");
    tokio::spawn(server);

    tracing::debug!("stub server listening on port {port}");

    TestApp {
        port,
        address: format!("http://127.0.0.1:{port}"),
        client: FetchClient::new(),
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of a fetch failed with a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, FetchError>,
    expected: StatusCode,
) {
    match result {
        Err(FetchError::Status(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected Status error"),
    };
}
