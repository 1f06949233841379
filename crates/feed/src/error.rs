#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Postfeed API error: {0}")]
    Api(#[from] postfeed_api::error::Error),
}
