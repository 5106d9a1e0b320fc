//! Validated newtype wrappers for credential values.
//!
//! Raw strings from code or from the config file are checked once, when a
//! [`Session`](crate::Session) is built from them.

use crate::error::ConfigError;
use std::fmt;

/// A validated shop URL.
///
/// Accepts a bare host (`my-shop.myshopify.com`, optionally with a trailing
/// slash) or a full URL with a scheme (`http://127.0.0.1:3000`). Bare hosts
/// are served over HTTPS; URLs with a scheme are used as given.
///
/// # Example
///
/// ```rust
/// use shopify_api_helpers::ShopUrl;
///
/// let url = ShopUrl::new("my-shop.myshopify.com").unwrap();
/// assert_eq!(url.as_ref(), "my-shop.myshopify.com");
/// assert_eq!(url.base_uri(), "https://my-shop.myshopify.com");
///
/// let url = ShopUrl::new("http://localhost:3000/").unwrap();
/// assert_eq!(url.base_uri(), "http://localhost:3000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopUrl {
    url: String,
    has_scheme: bool,
}

impl ShopUrl {
    /// Creates a new validated shop URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyShopUrl`] if the URL is blank, or
    /// [`ConfigError::InvalidShopUrl`] if it has no host or contains whitespace.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let raw = raw.trim();

        if raw.is_empty() {
            return Err(ConfigError::EmptyShopUrl);
        }
        let invalid = || ConfigError::InvalidShopUrl {
            url: raw.to_string(),
        };
        if raw.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        // Split off an explicit scheme, if any
        let (scheme, host) = match raw.find("://") {
            Some(scheme_end) => {
                let scheme = &raw[..scheme_end];
                if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(invalid());
                }
                (Some(scheme), &raw[scheme_end + 3..])
            }
            None => (None, raw),
        };

        let host = host.trim_end_matches('/');
        if host.is_empty() || host.contains('/') || host.starts_with(':') {
            return Err(invalid());
        }

        let url = scheme.map_or_else(|| host.to_string(), |s| format!("{s}://{host}"));
        Ok(Self {
            url,
            has_scheme: scheme.is_some(),
        })
    }

    /// Returns the base URI requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> String {
        if self.has_scheme {
            self.url.clone()
        } else {
            format!("https://{}", self.url)
        }
    }
}

impl AsRef<str> for ShopUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ShopUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// A validated Admin API access token.
///
/// The `Debug` implementation masks the token so it never ends up in logs.
///
/// # Example
///
/// ```rust
/// use shopify_api_helpers::AccessToken;
///
/// let token = AccessToken::new("shpat_secret").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}
