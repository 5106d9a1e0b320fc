//! Credential configuration for Shopify API sessions.
//!
//! This module provides the credential set used to bootstrap a session and
//! the validated value types a session is built from.
//!
//! # Overview
//!
//! - [`Credentials`]: shop URL, API version and access token, each optional
//! - [`ShopUrl`]: a validated shop host or URL
//! - [`AccessToken`]: a validated access token with masked debug output
//! - [`ApiVersion`]: the Shopify API version to use
//!
//! Credentials are either set in code with [`Credentials::set_login`] or read
//! from a `.shopify_api.toml` file found by walking up from a directory:
//!
//! ```toml
//! SHOP_URL = "my-shop.myshopify.com"
//! API_VERSION = "2025-10"
//! API_PASSWORD = "shpat_..."
//! ```
//!
//! # Example
//!
//! ```rust
//! use shopify_api_helpers::Credentials;
//!
//! let mut credentials = Credentials::new();
//! assert!(!credentials.are_set());
//!
//! credentials.set_login(
//!     Some("my-shop.myshopify.com".to_string()),
//!     Some("2025-10".to_string()),
//!     Some("shpat_token".to_string()),
//! );
//! assert!(credentials.are_set());
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, ShopUrl};
pub use version::ApiVersion;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, Error};

/// The three login values needed to open a session.
///
/// A credential set is *complete* when all three fields are `Some`. It is
/// owned by the caller and passed explicitly to
/// [`ShopifyApiSession`](crate::ShopifyApiSession); nothing is shared between
/// instances.
///
/// The values are stored as given and only validated when a session is
/// entered. At that point `api_version` must be a quarterly release tag
/// (`YYYY-01`, `-04`, `-07` or `-10`) or `unstable`; anything else, such as
/// `2024-02`, fails with
/// [`ConfigError::InvalidApiVersion`] before the backend is activated.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    /// The shop's domain, e.g. `my-shop.myshopify.com`.
    #[serde(rename = "SHOP_URL", default)]
    pub shop_url: Option<String>,

    /// The API version tag, e.g. `2025-10` or `unstable`.
    #[serde(rename = "API_VERSION", default)]
    pub api_version: Option<String>,

    /// The Admin API access token.
    #[serde(rename = "API_PASSWORD", default)]
    pub api_password: Option<String>,
}

impl Credentials {
    /// File name searched for by [`find_config_filepath`](Self::find_config_filepath).
    pub const CONFIG_FILENAME: &'static str = ".shopify_api.toml";

    /// Creates an empty credential set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets all three login values, replacing whatever was set before.
    pub fn set_login(
        &mut self,
        shop_url: Option<String>,
        api_version: Option<String>,
        api_password: Option<String>,
    ) {
        self.shop_url = shop_url;
        self.api_version = api_version;
        self.api_password = api_password;
    }

    /// Returns `true` if the shop URL, API version and password are all set.
    #[must_use]
    pub const fn are_set(&self) -> bool {
        self.shop_url.is_some() && self.api_version.is_some() && self.api_password.is_some()
    }

    /// Looks for a config file in `start_dir` and each of its ancestors.
    ///
    /// Returns the path of the first [`CONFIG_FILENAME`](Self::CONFIG_FILENAME)
    /// found, nearest directory first, or `None` if the filesystem root is
    /// reached without a match.
    #[must_use]
    pub fn find_config_filepath(start_dir: &Path) -> Option<PathBuf> {
        start_dir
            .ancestors()
            .map(|dir| dir.join(Self::CONFIG_FILENAME))
            .find(|candidate| candidate.is_file())
    }

    /// Replaces the login values with those in the TOML file at `path`.
    ///
    /// Recognized keys are `SHOP_URL`, `API_VERSION` and `API_PASSWORD`.
    /// Keys missing from the file become `None`; other keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConfigFileRead`] if the file cannot be read and
    /// [`ConfigError::ConfigFileParse`] if it is not valid TOML or a value is
    /// not a string.
    pub fn load_from_config_file(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::ConfigFileRead {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let loaded: Self = toml::from_str(&content).map_err(|e| ConfigError::ConfigFileParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        tracing::debug!("Loaded Shopify API credentials from {}", path.display());

        self.set_login(loaded.shop_url, loaded.api_version, loaded.api_password);
        Ok(())
    }

    /// Makes sure the credential set is complete, reading a config file if needed.
    ///
    /// If the credentials are already complete nothing is read. Otherwise the
    /// nearest config file at or above `start_dir` is loaded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LoginCredentialsNotSet`] if the set is still
    /// incomplete afterwards, or [`Error::Config`] if a config file was found
    /// but could not be loaded.
    pub fn resolve(&mut self, start_dir: &Path) -> Result<(), Error> {
        if self.are_set() {
            return Ok(());
        }

        if let Some(config_path) = Self::find_config_filepath(start_dir) {
            self.load_from_config_file(&config_path)?;
        } else {
            tracing::debug!(
                "No {} found at or above {}",
                Self::CONFIG_FILENAME,
                start_dir.display()
            );
        }

        if self.are_set() {
            Ok(())
        } else {
            Err(Error::LoginCredentialsNotSet)
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("shop_url", &self.shop_url)
            .field("api_version", &self.api_version)
            .field("api_password", &self.api_password.as_ref().map(|_| "*****"))
            .finish()
    }
}
