//! Scoped Shopify API sessions.
//!
//! A session goes through one cycle per scope: resolve the credentials,
//! activate a [`Session`] on a [`SessionBackend`], run the caller's work,
//! then clear the backend again. [`ShopifyApiSession`] is the scope guard for
//! that cycle; clearing happens in its `Drop`, so it runs on every exit path,
//! including `?` early returns and panics.
//!
//! ```rust,ignore
//! use shopify_api_helpers::{Credentials, RestBackend, ShopifyApiSession};
//! use shopify_api_helpers::helpers::products::get_all_products;
//!
//! let mut credentials = Credentials::new();
//! let mut backend = RestBackend::new();
//!
//! let session = ShopifyApiSession::enter(&mut credentials, &mut backend)?;
//! let products = get_all_products(session.backend().client()?).await?;
//! drop(session); // the backend is cleared here
//! ```
//!
//! The guard holds the backend mutably, so a second session cannot be opened
//! on the same backend while one is active.
//!
//! [`with_session`] and [`with_session_async`] wrap an operation in exactly
//! one such cycle; [`wrap_session`] returns the wrapped operation for later.

use std::path::{Path, PathBuf};

use crate::clients::RestClient;
use crate::config::{AccessToken, ApiVersion, Credentials, ShopUrl};
use crate::error::Error;

/// An authenticated handle for one shop and API version.
///
/// # Example
///
/// ```rust
/// use shopify_api_helpers::{AccessToken, ApiVersion, Session, ShopUrl};
///
/// let session = Session::new(
///     ShopUrl::new("my-shop.myshopify.com").unwrap(),
///     ApiVersion::LATEST,
///     AccessToken::new("shpat_token").unwrap(),
/// );
/// assert_eq!(session.shop_url.as_ref(), "my-shop.myshopify.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// The shop the session is for.
    pub shop_url: ShopUrl,

    /// The API version requests are sent to.
    pub api_version: ApiVersion,

    /// The Admin API access token.
    pub access_token: AccessToken,
}

impl Session {
    /// Creates a session from validated values.
    #[must_use]
    pub const fn new(shop_url: ShopUrl, api_version: ApiVersion, access_token: AccessToken) -> Self {
        Self {
            shop_url,
            api_version,
            access_token,
        }
    }

    /// Builds a session from a complete credential set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LoginCredentialsNotSet`] if any value is missing and
    /// [`Error::Config`] if a value does not validate.
    pub fn from_credentials(credentials: &Credentials) -> Result<Self, Error> {
        let (Some(shop_url), Some(api_version), Some(api_password)) = (
            credentials.shop_url.as_deref(),
            credentials.api_version.as_deref(),
            credentials.api_password.as_deref(),
        ) else {
            return Err(Error::LoginCredentialsNotSet);
        };

        Ok(Self::new(
            ShopUrl::new(shop_url)?,
            api_version.parse()?,
            AccessToken::new(api_password)?,
        ))
    }
}

/// Something a session can be activated on.
///
/// [`RestBackend`] is the production implementation.
pub trait SessionBackend {
    /// Makes `session` the active session.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be set up for the session.
    fn activate_session(&mut self, session: &Session) -> Result<(), Error>;

    /// Clears the active session. Clearing an inactive backend is a no-op.
    fn clear_session(&mut self);
}

/// Holds a [`RestClient`] for the active session.
#[derive(Debug, Default)]
pub struct RestBackend {
    client: Option<RestClient>,
}

impl RestBackend {
    /// Creates an inactive backend.
    #[must_use]
    pub const fn new() -> Self {
        Self { client: None }
    }

    /// Returns `true` while a session is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.client.is_some()
    }

    /// Returns the client of the active session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoActiveSession`] outside an active session.
    pub fn client(&self) -> Result<&RestClient, Error> {
        self.client.as_ref().ok_or(Error::NoActiveSession)
    }
}

impl SessionBackend for RestBackend {
    fn activate_session(&mut self, session: &Session) -> Result<(), Error> {
        let client = RestClient::new(session).map_err(|e| Error::Resource(e.into()))?;
        self.client = Some(client);
        Ok(())
    }

    fn clear_session(&mut self) {
        self.client = None;
    }
}

/// Scope guard for an active session.
///
/// Entering resolves the credentials, builds a [`Session`] and activates it
/// on the backend. Dropping the guard clears the backend.
#[derive(Debug)]
pub struct ShopifyApiSession<'a, B: SessionBackend> {
    backend: &'a mut B,
    session: Session,
}

impl<'a, B: SessionBackend> ShopifyApiSession<'a, B> {
    /// Opens a session, searching for a config file from the current directory.
    ///
    /// # Errors
    ///
    /// See [`enter_from`](Self::enter_from).
    pub fn enter(credentials: &mut Credentials, backend: &'a mut B) -> Result<Self, Error> {
        let start_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::enter_from(&start_dir, credentials, backend)
    }

    /// Opens a session, searching for a config file from `start_dir` upwards.
    ///
    /// Credentials that are already complete are used as they are and no file
    /// is read.
    ///
    /// # Errors
    ///
    /// - [`Error::LoginCredentialsNotSet`] if the credentials are still
    ///   incomplete after the config file search
    /// - [`Error::Config`] if the config file cannot be read or a value does
    ///   not validate
    /// - whatever [`SessionBackend::activate_session`] fails with
    pub fn enter_from(
        start_dir: &Path,
        credentials: &mut Credentials,
        backend: &'a mut B,
    ) -> Result<Self, Error> {
        credentials.resolve(start_dir)?;
        let session = Session::from_credentials(credentials)?;

        backend.activate_session(&session)?;
        tracing::debug!(
            "Activated Shopify API session for {} ({})",
            session.shop_url,
            session.api_version
        );

        Ok(Self { backend, session })
    }

    /// Returns the active session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the backend the session is active on.
    #[must_use]
    pub fn backend(&self) -> &B {
        self.backend
    }
}

impl<B: SessionBackend> Drop for ShopifyApiSession<'_, B> {
    fn drop(&mut self) {
        self.backend.clear_session();
        tracing::debug!("Cleared Shopify API session for {}", self.session.shop_url);
    }
}

/// Runs `operation` inside one session cycle.
///
/// The backend is cleared before this returns, whether `operation`
/// succeeded, failed or panicked. Use [`wrap_session`] to get the wrapped
/// operation back as a value instead of running it right away.
///
/// # Errors
///
/// Returns the errors of [`ShopifyApiSession::enter`] or of `operation`.
///
/// # Example
///
/// ```rust
/// use shopify_api_helpers::{with_session, Credentials, RestBackend};
///
/// let mut credentials = Credentials::new();
/// credentials.set_login(
///     Some("my-shop.myshopify.com".to_string()),
///     Some("2025-10".to_string()),
///     Some("shpat_token".to_string()),
/// );
/// let mut backend = RestBackend::new();
///
/// let version = with_session(&mut credentials, &mut backend, |backend| {
///     Ok(backend.client()?.api_version().to_string())
/// })
/// .unwrap();
///
/// assert_eq!(version, "2025-10");
/// assert!(!backend.is_active());
/// ```
pub fn with_session<B, F, T>(
    credentials: &mut Credentials,
    backend: &mut B,
    operation: F,
) -> Result<T, Error>
where
    B: SessionBackend,
    F: FnOnce(&B) -> Result<T, Error>,
{
    let guard = ShopifyApiSession::enter(credentials, backend)?;
    operation(guard.backend())
}

/// Async form of [`with_session`].
///
/// # Errors
///
/// Returns the errors of [`ShopifyApiSession::enter`] or of `operation`.
///
/// # Example
///
/// ```rust,ignore
/// let products = with_session_async(&mut credentials, &mut backend, async |backend: &RestBackend| {
///     get_all_products(backend.client()?).await
/// })
/// .await?;
/// ```
pub async fn with_session_async<B, F, T>(
    credentials: &mut Credentials,
    backend: &mut B,
    operation: F,
) -> Result<T, Error>
where
    B: SessionBackend,
    F: AsyncFnOnce(&B) -> Result<T, Error>,
{
    let guard = ShopifyApiSession::enter(credentials, backend)?;
    let result = operation(guard.backend()).await;
    drop(guard);
    result
}

/// Wraps `operation` so that every call runs inside one session cycle.
///
/// The returned closure takes the credentials and backend to use and behaves
/// like [`with_session`] with `operation`.
///
/// # Example
///
/// ```rust
/// use shopify_api_helpers::{wrap_session, Credentials, RestBackend};
///
/// let api_version = wrap_session(|backend: &RestBackend| {
///     Ok(backend.client()?.api_version().to_string())
/// });
///
/// let mut credentials = Credentials::new();
/// credentials.set_login(
///     Some("my-shop.myshopify.com".to_string()),
///     Some("2025-10".to_string()),
///     Some("shpat_token".to_string()),
/// );
/// let mut backend = RestBackend::new();
///
/// assert_eq!(api_version(&mut credentials, &mut backend).unwrap(), "2025-10");
/// assert!(!backend.is_active());
/// ```
pub fn wrap_session<B, F, T>(operation: F) -> impl FnOnce(&mut Credentials, &mut B) -> Result<T, Error>
where
    B: SessionBackend,
    F: FnOnce(&B) -> Result<T, Error>,
{
    move |credentials: &mut Credentials, backend: &mut B| {
        with_session(credentials, backend, operation)
    }
}

// Verify Session and RestBackend are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
    assert_send_sync::<RestBackend>();
};
