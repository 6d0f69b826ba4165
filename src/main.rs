use std::sync::Arc;

use statotron::config::{load_config, print_schema};
use statotron::startup;
use statotron::utils::logger::init_logging;

#[tokio::main]
async fn main() {
    // `statotron --schema` prints the configuration JSON schema and exits,
    // for validating config files in CI.
    if std::env::args().any(|arg| arg == "--schema") {
        print_schema();
        return;
    }

    let config = Arc::new(load_config());
    init_logging(&config.logging);

    if let Err(e) = startup::run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
