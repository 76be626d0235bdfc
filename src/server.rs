//! HTTP server lifecycle

use crate::api::build_app;
use crate::config::AppConfig;
use crate::content::{ContentStore, MemoryStore};
use crate::error::{Error, Result};
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Chatbot Guide server
pub struct Server {
    config: AppConfig,
    store: Arc<dyn ContentStore>,
}

impl Server {
    /// Create a server over the given store
    pub fn new(config: AppConfig, store: Arc<dyn ContentStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn ContentStore> {
        &self.store
    }

    /// Build the router without binding
    pub fn router(&self) -> Router {
        build_app(self.store.clone(), &self.config)
    }

    /// Bind the configured address
    pub async fn bind(&self) -> Result<TcpListener> {
        let addr = format!("{}:{}", self.config.server.host, self.config.server.port);
        TcpListener::bind(&addr)
            .await
            .map_err(|e| Error::Config(format!("Failed to bind {}: {}", addr, e)))
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = listener.local_addr()?;
        tracing::info!("Chatbot Guide listening on http://{}", addr);
        if let Some(dir) = &self.config.server.static_dir {
            tracing::info!("Serving frontend from {}", dir.display());
        }

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Chatbot Guide stopped");
        Ok(())
    }

    /// Bind and serve until `shutdown` resolves
    pub async fn run<F>(&self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = self.bind().await?;
        self.serve(listener, shutdown).await
    }
}

/// Builder for Server
pub struct ServerBuilder {
    config: AppConfig,
    store: Option<Arc<dyn ContentStore>>,
}

impl ServerBuilder {
    /// Create a new builder with default config
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            store: None,
        }
    }

    /// Set the configuration
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the bind host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.server.host = host.into();
        self
    }

    /// Set the bind port
    pub fn port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    /// Use a specific store (defaults to the seeded in-memory store)
    pub fn store(mut self, store: Arc<dyn ContentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the server
    pub fn build(self) -> Server {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryStore::seeded()));
        Server::new(self.config, store)
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    #[test]
    fn test_builder_overrides() {
        let server = ServerBuilder::new().host("0.0.0.0").port(8088).build();
        assert_eq!(server.config().server.host, "0.0.0.0");
        assert_eq!(server.config().server.port, 8088);
    }

    #[tokio::test]
    async fn test_builder_uses_given_store() {
        let server = ServerBuilder::new()
            .store(Arc::new(MemoryStore::empty()))
            .build();
        assert!(server.store().list_responses().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_serve_and_shutdown() {
        let server = ServerBuilder::new().host("127.0.0.1").port(0).build();
        let listener = server.bind().await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            server
                .serve(listener, async move {
                    let _ = stop_rx.await;
                })
                .await
        });

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.contains("\"status\":\"ok\""));

        stop_tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }
}
