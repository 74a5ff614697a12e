use pizza_api::api::controller::PizzaController;
use pizza_api::api::handlers::router;
use pizza_api::service::pizza_service::PizzaService;
use pizza_api::store::memory::PizzaStore;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:8080".parse()?;
    let mut empty_store = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--empty" => {
                empty_store = true;
                i += 1;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--bind <addr:port>] [--empty]", args[0]);
                eprintln!("Example: {} --bind 127.0.0.1:8080", args[0]);
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Store (seeded with the demo menu unless --empty):
    let store = if empty_store {
        Arc::new(PizzaStore::new())
    } else {
        Arc::new(PizzaStore::seeded())
    };
    let menu = store.list().await;
    tracing::info!("Store initialized with {} pizza(s)", menu.len());

    // 2. Service and controller:
    let service = PizzaService::new(store);
    let controller = Arc::new(PizzaController::new(service));

    // 3. HTTP Router:
    let app = router(controller);

    // 4. Start HTTP server:
    tracing::info!("Pizza API listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
