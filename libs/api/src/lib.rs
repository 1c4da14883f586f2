use axum::{routing::get, routing::post, Router};

use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;
use utoipauto::utoipauto;

use crate::summarize::service::{Sampling, Summarizer};

pub mod healthz;
pub mod not_found;
mod response;
pub mod root;
pub mod summarize;

pub enum ApiError {
    ClientError(String),
    ServerError(String),
}

#[derive(Clone, Debug)]
pub struct ApiState {
    summarizer: Summarizer<google_translate::Client, huggingface::Client>,
}

pub async fn serve(hf_token: String, config_name: &str) -> anyhow::Result<Router> {
    #[utoipauto(paths = "./libs/api/src")]
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "summarize", description = "Translation and summarization API")
        )
    )]
    struct ApiDoc;

    info!(task = "start api serving");

    let config = util::load_toml(config_name)?;

    let translator = google_translate::Client::new(
        config["google_translate"]["base_url"]
            .as_str()
            .unwrap()
            .to_string(),
    );
    let generator = huggingface::Client::new(
        config["huggingface"]["base_url"].as_str().unwrap(),
        &hf_token,
    );
    let sampling = Sampling {
        temperature: config["huggingface"]["temperature"].as_float().unwrap(),
        top_p: config["huggingface"]["top_p"].as_float().unwrap(),
    };

    let state = ApiState {
        summarizer: Summarizer::new(translator, generator, sampling),
    };

    let origins = ["http://localhost:3000".parse().unwrap()];

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .route("/", get(root::get_root))
        .route("/healthz", get(healthz::get_health))
        .route("/summarize", post(summarize::post_summarize))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(origins))
        .fallback(not_found::get_404);

    Ok(router)
}
