mod app_state;
mod cli;

use tracing_subscriber::EnvFilter;

/// Load environment variables from a .env file (KEY=VALUE lines).
///
/// Variables already set in the environment win.
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        std::path::PathBuf::from(".env"),
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .unwrap_or_else(|_| "easel=info".parse().expect("static directive")),
    );
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    load_dotenv();

    let args = cli::parse();

    // Config is read before logging starts so its level can apply; the
    // outcome is logged once the subscriber is installed.
    let loaded = easel_config::load_config(args.config.as_deref());

    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => cli::log_directive(level),
        (None, Ok(config)) => config.logging.level.directive().to_string(),
        (None, Err(_)) => "easel=info".to_string(),
    };
    init_logging(&directive);

    tracing::info!("Easel v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        easel_config::EaselConfig::default()
    });
    tracing::info!("Config loaded (theme: {})", config.theme.name);

    let app = match app_state::EaselApp::new(config, &args) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Startup failed: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("Entering event loop");
    if let Err(e) = app.run() {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
