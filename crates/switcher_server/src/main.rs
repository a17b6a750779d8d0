use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let addr = switcher_server::server_addr_from_env()?;
    let server = switcher_server::start_server(addr).await?;
    tracing::info!(
        addr = %server.addr,
        platform = server.platform,
        "switcher_server listening"
    );
    server.wait().await?;
    Ok(())
}
