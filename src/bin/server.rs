use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use rect_packer::engine::PackEngine;
use rect_packer::error::PackError;
use rect_packer::pool::SpacePolicy;
use rect_packer::types::{PackedItem, Rect, deserialize_u32_from_number};
use serde::{Deserialize, Serialize};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[derive(Deserialize, Serialize)]
struct PackRequest {
    container: Rect,
    items: Vec<ItemRequest>,
    #[serde(default)]
    policy: SpacePolicy,
    #[serde(default)]
    rotate: bool,
}

#[derive(Deserialize, Serialize)]
struct ItemRequest {
    rect: Rect,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    qty: u32,
}

#[derive(Serialize)]
struct PackResponse {
    placements: Vec<PackedItem>,
    container: Rect,
    packed_count: usize,
    waste_percent: f64,
}

async fn pack(
    Json(req): Json<PackRequest>,
) -> Result<Json<PackResponse>, (StatusCode, String)> {
    tracing::info!(
        body = serde_json::to_string(&req).unwrap_or_default(),
        "POST /pack"
    );

    if req.container.width == 0 || req.container.height == 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            "container dimensions must be non-zero".to_string(),
        ));
    }

    for item in &req.items {
        if item.rect.width == 0 || item.rect.height == 0 {
            return Err((
                StatusCode::BAD_REQUEST,
                "item dimensions must be non-zero".to_string(),
            ));
        }
        if item.qty == 0 {
            return Err((
                StatusCode::BAD_REQUEST,
                "item quantity must be non-zero".to_string(),
            ));
        }
        let fits_normal = item.rect.fits_in(&req.container);
        let fits_rotated = req.rotate && item.rect.rotated().fits_in(&req.container);
        if !fits_normal && !fits_rotated {
            return Err((
                StatusCode::BAD_REQUEST,
                format!(
                    "item {}x{} does not fit in container {}x{}",
                    item.rect.width, item.rect.height, req.container.width, req.container.height
                ),
            ));
        }
    }

    let mut engine = PackEngine::new();
    engine.set_container(req.container.width, req.container.height);
    engine.set_policy(req.policy);
    if req.rotate {
        engine.enable_rotation();
    }
    for item in &req.items {
        for _ in 0..item.qty {
            engine.add_item(item.rect.width, item.rect.height);
        }
    }

    engine.pack().map_err(|e| {
        let status = match e {
            PackError::NoSpaceForItem(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PackError::NotConfigured | PackError::UnsupportedMode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, e.to_string())
    })?;

    let response = PackResponse {
        placements: engine.packed_items().to_vec(),
        container: req.container,
        packed_count: engine.packed_count(),
        waste_percent: engine.waste_percent(),
    };

    Ok(Json(response))
}

async fn serve() {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("development.log")
        .expect("failed to open development.log");

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let addr = format!("0.0.0.0:{port}");

    let app = Router::new()
        .route("/up", get(|| async { "ok" }))
        .route("/pack", post(pack))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    eprintln!("Listening on {addr}");
    axum::serve(listener, app).await.unwrap();
}

fn main() {
    // The guard must outlive the runtime so panics inside it are reported.
    let _sentry = sentry::init(sentry::ClientOptions {
        release: sentry::release_name!(),
        ..Default::default()
    });

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to start tokio runtime")
        .block_on(serve());
}
