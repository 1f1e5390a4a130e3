use std::path::Path;

use datastore::Store;

// This main function is the entry point when running `cargo run -p web-server`.
// The full CLI lives in the root binary; this one just loads the default
// config and serves.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = configuration::load_settings(Path::new("config.toml"))?;
    let store = Store::load(&settings.data.markets_file, &settings.data.properties_file)?;
    web_server::run_server(settings.server.addr(), store).await
}
