#![allow(dead_code)]

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;

/// Country whose answer is delayed so a later request can overtake it.
pub const SLOW_COUNTRY: &str = "Slowland";
/// Country the mock answers with 404, like disease.sh does for unknown names.
pub const MISSING_COUNTRY: &str = "Nowhere";
pub const SLOW_DELAY: Duration = Duration::from_millis(600);

/// Base URL of a mock historical API that lives for the whole test binary.
pub static UPSTREAM: Lazy<String> = Lazy::new(spawn_upstream);

fn spawn_upstream() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind upstream port");
    listener.set_nonblocking(true).expect("nonblocking upstream listener");
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("upstream runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("upstream listener");
            axum::serve(listener, upstream_router())
                .await
                .expect("upstream server");
        });
    });

    format!("http://{addr}")
}

fn upstream_router() -> Router {
    Router::new().route("/v3/covid-19/historical/:target", get(historical))
}

async fn historical(
    Path(target): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if !query.contains_key("lastdays") {
        return (StatusCode::BAD_REQUEST, "lastdays is required").into_response();
    }

    match target.as_str() {
        "all" => Json(worldwide_document()).into_response(),
        MISSING_COUNTRY => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "message": "Country not found or doesn't have any historical data"
            })),
        )
            .into_response(),
        country => {
            if country == SLOW_COUNTRY {
                tokio::time::sleep(SLOW_DELAY).await;
            }
            Json(country_document(country)).into_response()
        }
    }
}

pub fn worldwide_document() -> Value {
    json!({
        "cases": {"1/1/21": 100, "1/2/21": 150, "1/3/21": 130},
        "deaths": {"1/1/21": 5, "1/2/21": 7, "1/3/21": 12},
        "recovered": {"1/1/21": 50, "1/2/21": 80, "1/3/21": 120}
    })
}

pub fn country_document(country: &str) -> Value {
    json!({
        "country": country,
        "province": ["mainland"],
        "timeline": {
            "cases": {"1/1/21": 10, "1/2/21": 25, "1/3/21": 45},
            "deaths": {"1/1/21": 1, "1/2/21": 1, "1/3/21": 3},
            "recovered": {"1/1/21": 2, "1/2/21": 6, "1/3/21": 7}
        }
    })
}
