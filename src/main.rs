use civic_content::config::SiteConfig;
use civic_content::content::ContentStore;
use civic_content::logging;
use civic_content::server::ContentServer;
use rmcp::{ServiceExt, transport::stdio};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the protocol on stdout
    logging::init();

    tracing::info!("Starting civic-content MCP server");

    let config = SiteConfig::discover()?;
    let server = ContentServer::new(ContentStore::from_config(&config));

    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    service.waiting().await?;

    Ok(())
}
