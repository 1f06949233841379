use postfeed_types::{photo::Photo, post::Post};
use tracing::{debug, error};

use super::{cache::ClientCache, endpoint::Endpoint, error::Error, response::ClientResponse};
use std::sync::Arc;

/// Configuration for the client.
/// base_url: Base URL of the remote service. (default: jsonplaceholder)
/// max_retries: The maximum number of retries for a request. (default: 3)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub base_url: Option<String>,
    pub max_retries: Option<usize>,
}

impl Config {
    const DEFAULT_BASE_URL: &'static str = "https://jsonplaceholder.typicode.com";
    const DEFAULT_MAX_RETRIES: usize = 3;
    pub fn new(base_url: Option<String>, max_retries: Option<usize>) -> Self {
        Config {
            base_url,
            max_retries,
        }
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(Self::DEFAULT_BASE_URL)
    }

    pub fn max_retries(&self) -> usize {
        self.max_retries.unwrap_or(Self::DEFAULT_MAX_RETRIES)
    }
}

/// A client for the posts/photos REST API.
/// Uses If-Modified-Since on repeat requests and replays the cached
/// body on 304 responses.
#[derive(Debug, Clone)]
pub struct Client {
    cfg: Config,
    http: reqwest::Client,
    cache: Arc<ClientCache>,
}

impl Client {
    pub fn new(cfg: Option<Config>) -> Self {
        Self {
            cfg: cfg.unwrap_or_default(),
            http: reqwest::Client::new(),
            cache: Arc::new(ClientCache::new()),
        }
    }

    async fn new_request(&self, endpoint: &Endpoint) -> Result<reqwest::Request, Error> {
        let mut builder = self.http.get(endpoint.url(self.cfg.base_url()));
        if let Some(time) = self.cache.last_fetched(endpoint.clone()).await {
            builder = builder.header(reqwest::header::IF_MODIFIED_SINCE, time.to_rfc2822());
        }
        Ok(builder.build()?)
    }

    pub async fn get(&self, endpoint: &Endpoint) -> Result<ClientResponse, Error> {
        debug!("Sending request to {}", endpoint.url(self.cfg.base_url()));
        let resp = self.http.execute(self.new_request(endpoint).await?).await?;
        self.handle_response(endpoint, resp).await
    }

    pub async fn get_with_retry(&self, endpoint: &Endpoint) -> Result<ClientResponse, Error> {
        let mut retries: usize = 0;
        loop {
            match self.get(endpoint).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    if let Error::StatusCode(ref code) = e {
                        if code == "404" {
                            return Err(e);
                        }
                    }
                    retries += 1;
                    if retries > self.cfg.max_retries() {
                        return Err(e);
                    }
                    error!(
                        "Error getting {}: {}, retry {} of {}",
                        endpoint,
                        e,
                        retries,
                        self.cfg.max_retries(),
                    );
                    tokio::time::sleep(std::time::Duration::from_secs(retries as u64)).await;
                }
            }
        }
    }

    async fn handle_response(
        &self,
        endpoint: &Endpoint,
        resp: reqwest::Response,
    ) -> Result<ClientResponse, Error> {
        match resp.status() {
            reqwest::StatusCode::OK => {
                debug!("request: {} status: OK", endpoint);
                let parsed = ClientResponse::parse(endpoint, resp).await?;
                self.cache.update(endpoint.clone(), parsed.clone()).await;
                Ok(parsed)
            }
            reqwest::StatusCode::NOT_MODIFIED => {
                debug!("request: {} status: NOT_MODIFIED", endpoint);
                self.cache
                    .last_response(endpoint.clone())
                    .await
                    .ok_or(Error::NoCachedResponse)
            }
            status => {
                error!("request {} status: {}", endpoint, status);
                Err(Error::StatusCode(status.as_u16().to_string()))
            }
        }
    }

    pub async fn get_posts(&self) -> Result<Arc<Vec<Post>>, Error> {
        match self.get_with_retry(&Endpoint::Posts).await? {
            ClientResponse::Posts(posts) => Ok(posts),
            _ => Err(Error::InvalidResponse),
        }
    }

    pub async fn get_photos(&self) -> Result<Arc<Vec<Photo>>, Error> {
        match self.get_with_retry(&Endpoint::Photos).await? {
            ClientResponse::Photos(photos) => Ok(photos),
            _ => Err(Error::InvalidResponse),
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(None)
    }
}
