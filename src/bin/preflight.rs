use player_registry::infra::logging;
use player_registry::{storage, Config, PlayerStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!(
            "Usage: cargo run --bin preflight\n\
             \n\
             Reads env vars (or .env):\n\
               DATABASE_URL, DATABASE_MAX_CONNECTIONS, CLIENT_ORIGIN, HOST, PORT, API_URL\n"
        );
        std::process::exit(2);
    }

    let config = Config::from_env()?;

    println!("> Preflight:");
    println!(
        "  DATABASE_URL={}",
        if config.database_url.is_some() {
            "<set>"
        } else {
            "<unset, in-memory store>"
        }
    );
    println!("  DATABASE_MAX_CONNECTIONS={}", config.database_max_connections);
    println!("  CLIENT_ORIGIN={}", config.client_origin);
    println!("  LISTEN={}", config.listen_addr());
    println!("  API_URL={}", config.api_url);

    player_registry::transport::http::cors_layer(&config.client_origin)
        .map_err(|e| anyhow::anyhow!("CLIENT_ORIGIN is not a valid origin: {}", e))?;

    let store = storage::open(&config).await?;
    store.ping().await?;
    let count = store.find_all().await?.len();
    println!("  Store reachable, {} player(s) stored.", count);

    println!("> Preflight OK.");
    Ok(())
}
