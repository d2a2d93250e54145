//! Client for the ProPublica and New York Times Congress APIs.
//!
//! ```no_run
//! # async fn demo() -> Result<(), congress_api::Error> {
//! use congress_api::{types::Chamber, Congress};
//!
//! let congress = Congress::from_env()?;
//! let pelosi = congress.members.get("P000197").await?;
//! let votes = congress.votes.by_date(Chamber::House, "2010-01-13").await?;
//! # Ok(())
//! # }
//! ```

pub mod cache;
mod client;
pub mod config;
mod congress;
mod errors;
mod family;
pub mod path;
pub mod resources;
pub mod types;

pub use self::client::Client;
pub use self::config::{CacheConfig, ClientConfig};
pub use self::congress::{Congress, NytCongress};
pub use self::errors::{Error, ResponseMeta};
pub use self::family::{ApiFamily, AuthStyle};
pub use self::path::{EndpointPath, PathBuilder};
pub use self::resources::{
    BillsClient, CommitteesClient, MembersClient, NominationsClient, VotesClient,
};
pub use self::types::{Chamber, Unwrap};
