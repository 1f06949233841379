pub mod cache;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod response;
