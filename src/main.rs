use std::net::{Ipv4Addr, SocketAddr};

use api::serve;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    // A missing token is surfaced by the generation provider at call time,
    // not at startup.
    let hf_token = util::load_toml("Secrets.toml")
        .ok()
        .and_then(|secrets| {
            secrets
                .get("HF_TOKEN")
                .and_then(|value| value.as_str())
                .map(str::to_string)
        })
        .unwrap_or_default();

    let router = serve(hf_token, "Config.toml").await?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8000));
    let listener = TcpListener::bind(&address).await?;
    Ok(axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?)
}
