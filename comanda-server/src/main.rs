use comanda_server::{Config, Server, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // dotenv, work directory, logging
    setup_environment()?;

    tracing::info!("Comanda server starting...");

    let config = Config::from_env();
    let server = Server::new(config);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
