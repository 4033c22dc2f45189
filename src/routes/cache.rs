use std::fmt;

use axum::http::{header, HeaderName, HeaderValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheVisibility {
    Public,
    Private,
}

/// Value of the `Cache-Control` header on read endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheControl {
    pub visibility: Option<CacheVisibility>,
    /// Seconds.
    pub max_age: u32,
}

impl CacheControl {
    pub const fn public(max_age: u32) -> Self {
        Self {
            visibility: Some(CacheVisibility::Public),
            max_age,
        }
    }

    pub const fn private(max_age: u32) -> Self {
        Self {
            visibility: Some(CacheVisibility::Private),
            max_age,
        }
    }

    /// Header pair ready to be returned from a handler.
    pub fn header(self) -> [(HeaderName, HeaderValue); 1] {
        let value = HeaderValue::try_from(self.to_string())
            .unwrap_or_else(|_| HeaderValue::from_static("no-cache"));
        [(header::CACHE_CONTROL, value)]
    }
}

impl fmt::Display for CacheControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.visibility {
            Some(CacheVisibility::Public) => write!(f, "public, max-age={}", self.max_age),
            Some(CacheVisibility::Private) => write!(f, "private, max-age={}", self.max_age),
            None => write!(f, "max-age={}", self.max_age),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_visibility_and_ttl() {
        assert_eq!(CacheControl::public(60).to_string(), "public, max-age=60");
        assert_eq!(CacheControl::private(1800).to_string(), "private, max-age=1800");
        let bare = CacheControl {
            visibility: None,
            max_age: 5,
        };
        assert_eq!(bare.to_string(), "max-age=5");
    }

    #[test]
    fn header_pair_uses_cache_control() {
        let [(name, value)] = CacheControl::public(60).header();
        assert_eq!(name, header::CACHE_CONTROL);
        assert_eq!(value.to_str().unwrap(), "public, max-age=60");
    }
}
