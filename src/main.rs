use fetchtab::{aggregate, ApiSession, FetchError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), FetchError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let base_url = "https://jsonplaceholder.typicode.com";
    let endpoints = ["/posts", "/comments", "/albums", "/photos", "/todos", "/users"];

    let session = ApiSession::open(base_url)?;
    let handle = session.handle();
    let result = aggregate(&handle, &endpoints).await;
    session.release();

    let table = result?;
    let (rows, columns) = table.shape();
    tracing::info!(rows, columns, "table built");
    println!("{table}");

    Ok(())
}
