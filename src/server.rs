//! MCP server exposing the content core as tools.

use crate::content::ContentStore;
use crate::tools::{
    GetRecordRequest, ListNewsRequest, SearchRequest, handle_get_record, handle_home,
    handle_list_news, handle_list_services, handle_search,
};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP server for government site content.
#[derive(Clone)]
pub struct ContentServer {
    /// Store shared by all tool calls; it holds no records between calls
    store: Arc<ContentStore>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for ContentServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentServer")
            .field("store", &self.store)
            .finish()
    }
}

#[tool_router]
impl ContentServer {
    pub fn new(store: ContentStore) -> Self {
        Self {
            store: Arc::new(store),
            tool_router: Self::tool_router(),
        }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Run a handler on the blocking pool; collection loads read from disk.
    async fn run<F>(&self, handler: F) -> std::result::Result<String, String>
    where
        F: FnOnce(&ContentStore) -> anyhow::Result<String> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || handler(&store))
            .await
            .map_err(|e| format!("Tool task failed: {}", e))?
            .map_err(|e| e.to_string())
    }

    #[tool(
        description = "Search news (title, content) and services (name, description) by case-insensitive substring. Without a collection, returns up to 5 {label, slug, type} hits per collection and nothing for queries under 2 characters. With collection set to 'news' or 'services', returns every matching record."
    )]
    async fn search(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        self.run(move |store| handle_search(store, request)).await
    }

    #[tool(
        description = "Look up an official, ministry, news article, or service by URL slug. Ministries include their leader; news articles include up to 3 related articles."
    )]
    async fn get_record(
        &self,
        Parameters(request): Parameters<GetRecordRequest>,
    ) -> std::result::Result<String, String> {
        self.run(move |store| handle_get_record(store, request)).await
    }

    #[tool(
        description = "List news articles, optionally filtered by category (case-insensitive), together with all available categories."
    )]
    async fn list_news(
        &self,
        Parameters(request): Parameters<ListNewsRequest>,
    ) -> std::result::Result<String, String> {
        self.run(move |store| handle_list_news(store, request)).await
    }

    #[tool(description = "List all public services and their distinct categories.")]
    async fn list_services(&self) -> std::result::Result<String, String> {
        self.run(handle_list_services).await
    }

    #[tool(description = "Landing page content: the latest news and the most prominent services.")]
    async fn home(&self) -> std::result::Result<String, String> {
        self.run(handle_home).await
    }
}

#[tool_handler]
impl ServerHandler for ContentServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "civic-content: officials, ministries, news, and services of the government website. \
                 Use search to find news and services, get_record to open an item by slug, \
                 and list_news or list_services to browse by category.",
            )
    }
}
