use std::sync::Arc;

use super::endpoint::Endpoint;
use postfeed_types::{photo::Photo, post::Post};

#[derive(Debug, Clone)]
pub enum ClientResponse {
    Posts(Arc<Vec<Post>>),
    Photos(Arc<Vec<Photo>>),
}

impl ClientResponse {
    pub async fn parse(
        endpoint: &Endpoint,
        resp: reqwest::Response,
    ) -> Result<Self, reqwest::Error> {
        match endpoint {
            Endpoint::Posts => Ok(ClientResponse::Posts(Arc::new(resp.json().await?))),
            Endpoint::Photos => Ok(ClientResponse::Photos(Arc::new(resp.json().await?))),
        }
    }
}
