use card_payment_gateway::bank::http::HttpAcquiringBank;
use card_payment_gateway::config::AppConfig;
use card_payment_gateway::http::routes::router;
use card_payment_gateway::repo::payments_repo::InMemoryPaymentsRepo;
use card_payment_gateway::service::payment_service::PaymentService;
use card_payment_gateway::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv::dotenv().is_ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if !env_loaded {
        tracing::info!("no .env file loaded, using process environment");
    }
    tracing::info!("card payment gateway version {}", env!("CARGO_PKG_VERSION"));

    let cfg = AppConfig::from_env();

    let bank = Arc::new(HttpAcquiringBank::new(cfg.acquiring_bank_base_url.clone()));
    let payments_repo = Arc::new(InMemoryPaymentsRepo::new());
    let payment_service = PaymentService::new(payments_repo, bank);

    let app = router(AppState { payment_service });

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!(
        "listening on {}, acquiring bank at {}",
        cfg.bind_addr,
        cfg.acquiring_bank_base_url
    );
    axum::serve(listener, app).await?;
    Ok(())
}
