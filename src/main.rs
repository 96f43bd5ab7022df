use anyhow::Context;
use risk_predictor::config::ServiceConfig;
use risk_predictor::{Predictor, RiskModel, logging, server};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init().context("failed to initialize logging")?;
    let config = ServiceConfig::from_env().context("invalid configuration")?;

    tracing::info!(path = %config.model_path.display(), "loading model");
    let model = RiskModel::load_from_file(&config.model_path)
        .with_context(|| format!("cannot start without model {}", config.model_path.display()))?;
    let app = server::router(Predictor::from_model(model));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "risk-predictor listening");
    server::serve(listener, app).await.context("server error")?;
    Ok(())
}
