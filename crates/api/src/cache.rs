use std::collections::HashMap;

use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use super::{endpoint::Endpoint, response::ClientResponse};

enum CacheRequest {
    LastFetched(Endpoint, oneshot::Sender<Option<chrono::DateTime<chrono::Utc>>>),
    LastResponse(Endpoint, oneshot::Sender<Option<ClientResponse>>),
    Update(Endpoint, ClientResponse),
}

/// Per-endpoint response cache backing If-Modified-Since requests.
/// A single task owns the maps; handles talk to it over a channel.
#[derive(Debug, Clone)]
pub struct ClientCache {
    requests: mpsc::Sender<CacheRequest>,
}

#[derive(Default)]
struct CacheInner {
    last_fetched: HashMap<Endpoint, chrono::DateTime<chrono::Utc>>,
    last_response: HashMap<Endpoint, ClientResponse>,
}

impl ClientCache {
    pub fn new() -> Self {
        let (tx, mut rx) = mpsc::channel::<CacheRequest>(16);
        tokio::spawn(async move {
            let mut inner = CacheInner::default();
            while let Some(request) = rx.recv().await {
                inner.handle_request(request);
            }
        });
        Self { requests: tx }
    }

    pub async fn last_fetched(&self, endpoint: Endpoint) -> Option<chrono::DateTime<chrono::Utc>> {
        let (tx, rx) = oneshot::channel();
        self.requests
            .send(CacheRequest::LastFetched(endpoint, tx))
            .await
            .ok()?;
        rx.await.ok()?
    }

    pub async fn last_response(&self, endpoint: Endpoint) -> Option<ClientResponse> {
        let (tx, rx) = oneshot::channel();
        self.requests
            .send(CacheRequest::LastResponse(endpoint, tx))
            .await
            .ok()?;
        rx.await.ok()?
    }

    pub async fn update(&self, endpoint: Endpoint, response: ClientResponse) {
        let _ = self
            .requests
            .send(CacheRequest::Update(endpoint, response))
            .await;
    }
}

impl Default for ClientCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheInner {
    fn handle_request(&mut self, request: CacheRequest) {
        match request {
            CacheRequest::LastFetched(endpoint, tx) => {
                debug!("Cache last_fetched lookup for {}", endpoint);
                let _ = tx.send(self.last_fetched.get(&endpoint).copied());
            }
            CacheRequest::LastResponse(endpoint, tx) => {
                debug!("Cache last_response lookup for {}", endpoint);
                let _ = tx.send(self.last_response.get(&endpoint).cloned());
            }
            CacheRequest::Update(endpoint, response) => {
                debug!("Updating cache for {}", endpoint);
                self.last_fetched.insert(endpoint.clone(), chrono::Utc::now());
                self.last_response.insert(endpoint, response);
            }
        }
    }
}
