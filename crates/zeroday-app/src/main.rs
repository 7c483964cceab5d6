use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

use zeroday_app::application::services::ConfigService;
use zeroday_app::presentation::bootstrap::build_app_state;
use zeroday_infrastructure::config::{default_config_path, default_log_dir};
use zeroday_infrastructure::logging::init_logger;

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(default_config_path)
        .ok_or_else(|| anyhow::anyhow!("No config path given and no config dir available"))?;
    let config = Arc::new(ConfigService::load(config_path)?);

    let log_dir = default_log_dir().unwrap_or_else(|| std::env::temp_dir().join("zeroday"));
    match init_logger(log_dir.clone(), config.get_log_level()) {
        Ok(_) => {
            info!("🚀 zeroday starting...");
            info!("📝 File logging initialized at: {}", log_dir.display());
        }
        Err(e) => {
            eprintln!("⚠️  Failed to initialize file logging: {}", e);
            eprintln!("   Falling back to console logging only");

            let _ = tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
                )
                .with_target(true)
                .with_line_number(true)
                .try_init();
        }
    }
    info!("📁 Config file: {}", config.config_path().display());

    let state = build_app_state(config)?;
    let mut updates = state.feed.subscribe();
    state.start().await?;

    let shutdown_signal = tokio::signal::ctrl_c();
    tokio::pin!(shutdown_signal);

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                if updates.borrow_and_update().loading {
                    continue;
                }
                let graph = state.graph();
                info!(
                    "📊 {} contributions, streak {} (longest {}){}",
                    graph.total,
                    graph.current_streak,
                    graph.longest_streak,
                    if graph.is_synthetic { " [synthetic]" } else { "" }
                );
                match serde_json::to_string(&graph) {
                    Ok(json) => println!("{}", json),
                    Err(e) => error!("Failed to serialize contribution graph: {}", e),
                }
            }
            _ = &mut shutdown_signal => {
                info!("👋 Shutdown requested");
                break;
            }
        }
    }

    state.shutdown().await;
    Ok(())
}
