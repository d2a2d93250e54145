//! Facades: one object per API family owning every resource client.

use serde_json::Value;

use crate::{
    config::ClientConfig,
    family::ApiFamily,
    resources::{BillsClient, CommitteesClient, MembersClient, NominationsClient, VotesClient},
    types::Unwrap,
    Client, Error,
};

/// The ProPublica Congress API.
///
/// Methods are namespaced by topic. Everything returns decoded JSON with the
/// envelope trimmed. The facade itself can fetch the API URLs embedded in
/// responses (see [`Congress::fetch_url`]), so following a link needs no
/// separate path handling.
///
/// All resource clients share one API key, connection pool and response
/// cache. By default responses are cached on disk in `.cache`.
#[derive(Clone, Debug)]
pub struct Congress {
    client: Client,
    pub members: MembersClient,
    pub bills: BillsClient,
    pub votes: VotesClient,
    pub committees: CommitteesClient,
    pub nominations: NominationsClient,
}

impl Congress {
    /// Creates a facade with the given API key and the default disk cache.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Creates a facade configured from `PROPUBLICA_API_KEY` and friends.
    pub fn from_env() -> Result<Self, Error> {
        Self::with_config(ClientConfig::from_env(ApiFamily::ProPublica))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        let client = Client::new(ApiFamily::ProPublica, config)?;
        Ok(Self {
            members: MembersClient::new(client.clone()),
            bills: BillsClient::new(client.clone()),
            votes: VotesClient::new(client.clone()),
            committees: CommitteesClient::new(client.clone()),
            nominations: NominationsClient::new(client.clone()),
            client,
        })
    }

    /// The shared client behind every resource.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Fetches a URL returned inside an API payload.
    pub async fn fetch_url(&self, url: &str, unwrap: Unwrap) -> Result<Value, Error> {
        self.client.fetch_url(url, unwrap).await
    }
}

/// The New York Times Congress API.
///
/// Same layout as [`Congress`], covering members, bills and committees. The
/// API key travels as the `api-key` query parameter.
///
/// The resource clients are shared with [`Congress`]. Calls the NYT API has
/// no endpoint for (`members.new_members`, `departing`, `compare`, `party`,
/// `bills.cosponsors`, `passed`, `major`) fail with
/// [`Error::InvalidArgument`] before any request is sent.
#[derive(Clone, Debug)]
pub struct NytCongress {
    client: Client,
    pub members: MembersClient,
    pub bills: BillsClient,
    pub committees: CommitteesClient,
}

impl NytCongress {
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Creates a facade configured from `NYT_CONGRESS_API_KEY` and friends.
    pub fn from_env() -> Result<Self, Error> {
        Self::with_config(ClientConfig::from_env(ApiFamily::NewYorkTimes))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        let client = Client::new(ApiFamily::NewYorkTimes, config)?;
        Ok(Self {
            members: MembersClient::new(client.clone()),
            bills: BillsClient::new(client.clone()),
            committees: CommitteesClient::new(client.clone()),
            client,
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Fetches a URL returned inside an API payload.
    pub async fn fetch_url(&self, url: &str, unwrap: Unwrap) -> Result<Value, Error> {
        self.client.fetch_url(url, unwrap).await
    }
}
