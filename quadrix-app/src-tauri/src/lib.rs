use tauri::Listener;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tauri_plugin_orientation::ORIENTATION_CHANGED;
use tauri_plugin_sharedcontent::{CONTENT_SHARED, CONTENT_SHARE_FAILED};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str =
    "quadrix_app=debug,tauri_plugin_sharedcontent=debug,tauri_plugin_orientation=debug";

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Quadrix...");

    tauri::Builder::default()
        .plugin(tauri_plugin_sharedcontent::init())
        .plugin(tauri_plugin_orientation::init())
        .setup(|app| {
            let handle = app.handle();

            handle.listen(CONTENT_SHARED, |event| {
                debug!("Shared content delivered ({} bytes)", event.payload().len());
            });
            handle.listen(CONTENT_SHARE_FAILED, |event| {
                debug!("Shared content rejected: {}", event.payload());
            });
            handle.listen(ORIENTATION_CHANGED, |event| {
                debug!("Orientation now {}", event.payload());
            });

            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
