// Typed failures at the catalog boundary.

use thiserror::Error;

/// Errors raised while talking to the catalog.
///
/// Callers above the catalog layer handle these as `anyhow::Error` and can
/// `downcast_ref::<CatalogError>()` when they need to tell them apart.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A free-text author search returned zero candidates.
    #[error("No author found by that name: {query}")]
    NoAuthorFound { query: String },

    /// The catalog answered with a non-success HTTP status.
    #[error("Catalog request {path} returned {status}: {body}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },

    /// The request never completed (connect error, timeout, bad body).
    #[error("Catalog request {path} failed")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}
