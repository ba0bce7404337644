use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::Engine;
use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

use biomegen::config::Params;
use biomegen::field::Field;
use biomegen::{Cell, Climate, Geology, Terrain, TerrainError, render};

/// Last generated terrain, shared read-only with the cell queries.
type Shared = Arc<RwLock<Option<Terrain>>>;

type ApiError = (StatusCode, String);

/// Largest terrain a single request may ask for.
const MAX_CELLS: u64 = 4096 * 4096;

#[derive(Deserialize)]
struct GenerateRequest {
    seed: Option<u64>,
    width: Option<i32>,
    height: Option<i32>,
    params: Option<Params>,
}

#[derive(Serialize)]
struct GenerateResponse {
    layers: Vec<Layer>,
    timings: Vec<TimingEntry>,
    climate: Vec<Count>,
    geology: Vec<Count>,
    seed: u64,
    width: usize,
    height: usize,
}

#[derive(Serialize)]
struct Layer {
    name: String,
    data_url: String,
}

#[derive(Serialize)]
struct TimingEntry {
    name: String,
    ms: f64,
}

#[derive(Serialize)]
struct Count {
    label: &'static str,
    cells: usize,
}

#[derive(Deserialize)]
struct CellQuery {
    x: i32,
    y: i32,
}

#[derive(Serialize)]
struct CellResponse {
    x: i32,
    y: i32,
    cell: Cell,
    climate: Climate,
    geology: Geology,
}

fn encode_png(rgba: &[u8], w: usize, h: usize) -> Result<String, image::ImageError> {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new(&mut buf);
    encoder.write_image(rgba, w as u32, h as u32, image::ExtendedColorType::Rgba8)?;
    let b64 = base64::engine::general_purpose::STANDARD.encode(&buf);
    Ok(format!("data:image/png;base64,{}", b64))
}

fn check_size(width: i32, height: i32) -> Result<(), ApiError> {
    let cells = width.max(0) as u64 * height.max(0) as u64;
    if cells > MAX_CELLS {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("{width}x{height} terrain exceeds the limit of {MAX_CELLS} cells"),
        ));
    }
    Ok(())
}

fn terrain_error(e: TerrainError) -> ApiError {
    (StatusCode::BAD_REQUEST, e.to_string())
}

fn internal_error(e: impl std::fmt::Display) -> ApiError {
    log::error!("request failed: {e}");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

fn build_response(terrain: &Terrain, timings: Vec<biomegen::Timing>) -> Result<GenerateResponse, ApiError> {
    let (w, h) = (terrain.width(), terrain.height());

    let mut layers = vec![
        Layer {
            name: "climate".into(),
            data_url: encode_png(&render::render_climate(terrain), w, h).map_err(internal_error)?,
        },
        Layer {
            name: "geology".into(),
            data_url: encode_png(&render::render_geology(terrain), w, h).map_err(internal_error)?,
        },
    ];
    for field in Field::ALL {
        layers.push(Layer {
            name: field.name().into(),
            data_url: encode_png(&render::render_field(terrain, field), w, h)
                .map_err(internal_error)?,
        });
    }

    let timings = timings
        .iter()
        .map(|t| TimingEntry {
            name: t.name.to_string(),
            ms: t.ms,
        })
        .collect();

    let climate = terrain
        .climate_histogram()
        .into_iter()
        .map(|(c, cells)| Count {
            label: c.name(),
            cells,
        })
        .collect();
    let geology = terrain
        .geology_histogram()
        .into_iter()
        .map(|(g, cells)| Count {
            label: g.name(),
            cells,
        })
        .collect();

    Ok(GenerateResponse {
        layers,
        timings,
        climate,
        geology,
        seed: terrain.seed(),
        width: w,
        height: h,
    })
}

async fn generate_handler(
    State(shared): State<Shared>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let seed = req.seed.unwrap_or(317955);
    let width = req.width.unwrap_or(512);
    let height = req.height.unwrap_or(512);
    let params = req.params.unwrap_or_default();
    check_size(width, height)?;

    let (terrain, response) = tokio::task::spawn_blocking(move || {
        let (terrain, timings) =
            biomegen::generate(seed, width, height, &params).map_err(terrain_error)?;
        let response = build_response(&terrain, timings)?;
        Ok::<_, ApiError>((terrain, response))
    })
    .await
    .map_err(internal_error)??;

    *shared.write().await = Some(terrain);
    Ok(Json(response))
}

async fn cell_handler(
    State(shared): State<Shared>,
    Query(q): Query<CellQuery>,
) -> Result<Json<CellResponse>, ApiError> {
    let guard = shared.read().await;
    let terrain = guard
        .as_ref()
        .ok_or((StatusCode::NOT_FOUND, "no terrain generated yet".to_string()))?;
    let cell = terrain.cell_at(q.x, q.y).map_err(terrain_error)?;
    Ok(Json(CellResponse {
        x: q.x,
        y: q.y,
        cell,
        climate: cell.climate(),
        geology: cell.geology(),
    }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let shared: Shared = Arc::new(RwLock::new(None));

    let app = Router::new()
        .route("/api/generate", post(generate_handler))
        .route("/api/cell", get(cell_handler))
        .layer(CorsLayer::permissive())
        .with_state(shared);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    log::info!("biomegen server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_limit() {
        assert!(check_size(512, 512).is_ok());
        assert!(check_size(4096, 4096).is_ok());
        let (status, _) = check_size(2_000_000_000, 2_000_000_000).unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(check_size(4097, 4096).is_err());
    }

    #[test]
    fn non_positive_sizes_are_left_to_the_builder() {
        assert!(check_size(0, 10).is_ok());
        assert!(check_size(-5, 1_000_000).is_ok());
    }
}
