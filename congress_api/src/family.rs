//! The two API families served by this crate and how each authenticates.

/// Where the API key travels on each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStyle {
    /// Sent as a request header with this name.
    Header(&'static str),
    /// Appended as a query parameter with this name.
    QueryParam(&'static str),
}

/// A Congress API provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiFamily {
    /// ProPublica Congress API (v1).
    ProPublica,
    /// New York Times Congress API (v3).
    NewYorkTimes,
}

impl ApiFamily {
    pub fn base_url(&self) -> &'static str {
        match self {
            ApiFamily::ProPublica => "https://api.propublica.org/congress/v1/",
            ApiFamily::NewYorkTimes => {
                "http://api.nytimes.com/svc/politics/v3/us/legislative/congress/"
            }
        }
    }

    pub fn auth(&self) -> AuthStyle {
        match self {
            ApiFamily::ProPublica => AuthStyle::Header("X-API-Key"),
            ApiFamily::NewYorkTimes => AuthStyle::QueryParam("api-key"),
        }
    }

    /// Environment variable holding the API key.
    pub fn api_key_var(&self) -> &'static str {
        match self {
            ApiFamily::ProPublica => "PROPUBLICA_API_KEY",
            ApiFamily::NewYorkTimes => "NYT_CONGRESS_API_KEY",
        }
    }

    /// ProPublica marks every good envelope `"status": "OK"`; the NYT API
    /// does not always send a status.
    pub fn requires_ok_status(&self) -> bool {
        matches!(self, ApiFamily::ProPublica)
    }
}
