//! The stub JSON server behind the client integration tests.
//!
//! Routes:
//! - `GET /trips` - the mock trip dataset
//! - `GET /trips/slow` - same payload after a delay, for cancellation tests
//! - `GET /object` - a one-field JSON object
//! - `/status/{code}` - an empty response with the given status
//! - `GET /not-json` - a 200 whose body does not parse as JSON
//! - `/echo` - reflects method, headers, and body back as JSON

use std::collections::BTreeMap;
use std::net::TcpListener;
use std::time::Duration;

use actix_web::dev::Server;
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde::{Deserialize, Serialize};

use crate::mock;

/// How long the slow route waits before responding. Long enough for a
/// test to supersede or tear down the request first.
pub const SLOW_RESPONSE_DELAY: Duration = Duration::from_millis(250);

/// Build the stub server, but not await it.
pub fn build(listener: TcpListener) -> std::io::Result<Server> {
    let server = HttpServer::new(|| {
        App::new()
            .route("/trips", web::get().to(trips))
            .route("/trips/slow", web::get().to(slow_trips))
            .route("/object", web::get().to(object))
            .route("/status/{code}", web::route().to(status))
            .route("/not-json", web::get().to(not_json))
            .route("/echo", web::route().to(echo))
    })
    .listen(listener)?
    .run();
    Ok(server)
}

async fn trips() -> HttpResponse {
    HttpResponse::Ok().json(mock::trips())
}

async fn slow_trips() -> HttpResponse {
    tokio::time::sleep(SLOW_RESPONSE_DELAY).await;
    HttpResponse::Ok().json(mock::trips())
}

async fn object() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "a": 1 }))
}

async fn status(path: web::Path<u16>) -> HttpResponse {
    let code = StatusCode::from_u16(path.into_inner())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(code).finish()
}

async fn not_json() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .body("this is not json")
}

/// A request as seen by the stub server, reflected back to the caller.
#[derive(Debug, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

async fn echo(request: HttpRequest, body: web::Bytes) -> HttpResponse {
    let headers = request
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    HttpResponse::Ok().json(Echo {
        method: request.method().to_string(),
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}
