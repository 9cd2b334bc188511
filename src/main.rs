//! Wiring & DI. Entry point: bootstrap adapters, inject into the controller, run UI.
//! No business logic here.

use dotenv::dotenv;
use loanvista::adapters::api::{HttpLoanApi, MockLoanApi};
use loanvista::adapters::persistence::ReportDir;
use loanvista::adapters::ui::tui::TuiInputPort;
use loanvista::ports::{InputPort, LoanApiPort, ReportSinkPort};
use loanvista::shared::config::AppConfig;
use loanvista::usecases::Controller;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    loanvista::adapters::ui::init_ui();

    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config could not be read, using defaults");
            AppConfig::default()
        }
    };

    // --- LoanVista API: live server or offline mock ---
    let api: Arc<dyn LoanApiPort> = if cfg.use_mock() {
        warn!("LOANVISTA_MOCK set, using the offline mock API");
        Arc::new(MockLoanApi::new())
    } else {
        let base_url = cfg.base_url_or_default();
        let timeout = Duration::from_secs(cfg.request_timeout_secs_or_default());
        info!(url = %base_url, timeout_secs = timeout.as_secs(), "LoanVista API");
        Arc::new(HttpLoanApi::new(base_url, timeout).map_err(|e| anyhow::anyhow!("{}", e))?)
    };

    // Unreachable or model-less server is reported, not fatal.
    match api.health().await {
        Ok(health) if health.model_loaded => info!(status = %health.status, "server healthy"),
        Ok(health) => warn!(
            status = %health.status,
            "server is up but the model is not loaded; predictions will fail"
        ),
        Err(e) => warn!(error = %e, "health check failed; is the LoanVista server running?"),
    }

    // --- Report directory ---
    let reports_dir = PathBuf::from(cfg.reports_dir_or_default());
    tokio::fs::create_dir_all(&reports_dir)
        .await
        .map_err(|e| anyhow::anyhow!("create reports dir: {}", e))?;
    let reports_dir_abs = reports_dir
        .canonicalize()
        .unwrap_or_else(|_| reports_dir.clone());
    info!(path = %reports_dir_abs.display(), "reports directory");
    let sink: Arc<dyn ReportSinkPort> = Arc::new(ReportDir::new(&reports_dir));

    // --- Controller + UI ---
    let controller = Controller::new(Arc::clone(&api), Arc::clone(&sink), cfg.confetti_enabled());
    let popup_after = Duration::from_secs(cfg.chat_popup_secs_or_default());
    let input_port: Arc<dyn InputPort> =
        Arc::new(TuiInputPort::new(controller, Arc::clone(&sink), popup_after));

    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
