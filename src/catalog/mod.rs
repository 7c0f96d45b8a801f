// Open Library catalog access — HTTP client, author resolution, work pagination.
//
// The rest of the crate only talks to the catalog through the CatalogSource
// trait, so the HTTP transport can be mocked in tests or wrapped later.

pub mod author;
pub mod client;
pub mod error;
pub mod models;
pub mod source;
pub mod works;
