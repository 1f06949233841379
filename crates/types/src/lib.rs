pub mod feed;
pub mod photo;
pub mod post;
