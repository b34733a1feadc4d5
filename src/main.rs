use tracing::{error, info};

use atom::web::WebServer;
use atom::{Config, Database};

const CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {CONFIG_PATH}: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = atom::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        atom::logging::init_console_only(&config.logging.level);
    }

    info!("ATOM - topic message board");

    if let Err(e) = run(config).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> atom::Result<()> {
    config.validate()?;

    let db = Database::open(&config.database.path).await?;
    info!("Database ready (schema version {})", db.schema_version().await?);

    let server = WebServer::new(&config.web, db)?;
    info!("Server configured on {}", server.addr());
    server.run().await
}
