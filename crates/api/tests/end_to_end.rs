//! The gateway served over real TCP with the real upstream clients, pointed at
//! stub species and translation services.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use funtranslations::FunTranslationsClient;
use gateway::TranslationPipeline;
use pokeapi::PokeApiClient;
use reqwest::Url;
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    addr
}

async fn species(Path(name): Path<String>) -> Response {
    let entries = match name.as_str() {
        "pikachu" => json!([
            {"flavor_text": "Il garde sa queue levée.", "language": {"name": "fr"}},
            {"flavor_text": "It keeps its tail raised.", "language": {"name": "en"}}
        ]),
        "ditto" => json!([
            {"flavor_text": "Il peut se transformer.", "language": {"name": "fr"}}
        ]),
        "magikarp" => json!([
            {"flavor_text": "", "language": {"name": "en"}}
        ]),
        "snorlax" => json!([
            {"flavor_text": "Very lazy.", "language": {"name": "en"}}
        ]),
        _ => return (StatusCode::NOT_FOUND, "Not Found").into_response(),
    };
    Json(json!({"name": name, "flavor_text_entries": entries})).into_response()
}

async fn shakespeare(Form(form): Form<HashMap<String, String>>) -> Response {
    match form.get("text").map(String::as_str) {
        Some("It keeps its tail raised.") => Json(json!({
            "success": {"total": 1},
            "contents": {"translated": "'t keepeth its tail did raise.", "text": "It keeps its tail raised."}
        }))
        .into_response(),
        Some("Very lazy.") => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({"error": {"code": 429, "message": "rate limit exceeded"}})),
        )
            .into_response(),
        _ => Json(json!({"contents": {"translated": ""}})).into_response(),
    }
}

async fn start_gateway() -> SocketAddr {
    let species_addr = serve(Router::new().route("/species/:name", get(species))).await;
    let translate_addr =
        serve(Router::new().route("/shakespeare.json", post(shakespeare))).await;

    let lookup = PokeApiClient::new(
        Url::parse(&format!("http://{species_addr}/species")).unwrap(),
        Duration::from_secs(2),
    )
    .unwrap();
    let transformer = FunTranslationsClient::new(
        Url::parse(&format!("http://{translate_addr}/shakespeare.json")).unwrap(),
        Duration::from_secs(2),
    )
    .unwrap();

    let pipeline = TranslationPipeline::new(Arc::new(lookup), Arc::new(transformer));
    serve(api::build_router(pipeline)).await
}

async fn call(gateway: SocketAddr, path: &str) -> (u16, Value) {
    let resp = reqwest::get(format!("http://{gateway}{path}")).await.unwrap();
    let status = resp.status().as_u16();
    let body = resp.json::<Value>().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn full_pipeline_success() {
    let gateway = start_gateway().await;

    let (status, body) = call(gateway, "/translate/pokemon/pikachu").await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({"name": "pikachu", "description": "'t keepeth its tail did raise."})
    );
}

#[tokio::test]
async fn full_pipeline_failures() {
    let gateway = start_gateway().await;

    let cases = [
        (
            "/translate/shakespeare/pikachu",
            400,
            "invalid kind: only 'pokemon' is supported",
            "bad request",
        ),
        (
            "/translate/pokemon/ditto",
            424,
            "no description found",
            "failed to get description for ditto",
        ),
        (
            "/translate/pokemon/missingno",
            424,
            "failed to get description: upstream returned status 404",
            "failed to get description for missingno",
        ),
        (
            "/translate/pokemon/magikarp",
            424,
            "no translation found",
            "failed to get translation for magikarp",
        ),
        (
            "/translate/pokemon/snorlax",
            424,
            "API Error: Code=429, Message=rate limit exceeded",
            "failed to get translation for snorlax",
        ),
    ];

    for (path, expected_status, message, code) in cases {
        let (status, body) = call(gateway, path).await;
        assert_eq!(status, expected_status, "{path}");
        assert_eq!(
            body,
            json!({"error": {"message": message, "code": code}}),
            "{path}"
        );
    }
}
