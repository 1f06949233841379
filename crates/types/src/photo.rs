use serde::{Deserialize, Serialize};

/// Only the url field is consumed; anything else the endpoint
/// returns is ignored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Photo {
    pub url: String,
}
