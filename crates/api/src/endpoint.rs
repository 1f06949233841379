use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Endpoint {
    Posts,
    Photos,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Posts => "/posts",
            Self::Photos => "/photos",
        }
    }

    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
