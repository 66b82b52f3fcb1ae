use content_board::persistence::snapshot::SnapshotGateway;
use content_board::routing::handlers::board_app;
use content_board::store::memory::EntityStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:4000".parse()?;
    let mut snapshot_path = "board-snapshot.json".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--snapshot" => {
                snapshot_path = args[i + 1].clone();
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Load snapshot (or start empty):
    let snapshots = Arc::new(SnapshotGateway::new(&snapshot_path));
    let store = match snapshots.load()? {
        Some(store) => {
            tracing::info!("Loaded snapshot from {}", snapshot_path);
            store
        }
        None => {
            tracing::info!(
                "No snapshot at {}, starting with an empty board",
                snapshot_path
            );
            EntityStore::new()
        }
    };
    let store = Arc::new(Mutex::new(store));

    // 2. HTTP router + CORS:
    let app = board_app(store, snapshots);

    // 3. Start HTTP server:
    tracing::info!("Board listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
