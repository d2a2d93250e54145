//! HTTP client shared by every resource client.
//!
//! [`Client::fetch`] turns a logical endpoint path into a full URL, attaches
//! the API key, performs a single GET, classifies failures and applies an
//! [`Unwrap`] policy to the decoded envelope.

use std::sync::Arc;

use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{
    cache::{CachedResponse, ResponseCache},
    config::ClientConfig,
    errors::ResponseMeta,
    family::{ApiFamily, AuthStyle},
    path::EndpointPath,
    types::{current_congress, Envelope, Unwrap, RECORD_NOT_FOUND},
    Error,
};

const JSON_SUFFIX: &str = ".json";

/// HTTP client for one Congress API family.
///
/// Cloning is cheap: clones share the API key, the HTTP connection pool and
/// the response cache.
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

struct Inner {
    http: reqwest::Client,
    family: ApiFamily,
    base_url: String,
    api_key: Option<String>,
    cache: Option<Arc<dyn ResponseCache>>,
    default_congress: Option<u32>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("family", &self.inner.family)
            .field("base_url", &self.inner.base_url)
            .field("has_api_key", &self.inner.api_key.is_some())
            .field("cached", &self.inner.cache.is_some())
            .finish()
    }
}

impl Client {
    /// Creates a client for `family` from `config`.
    pub fn new(family: ApiFamily, config: ClientConfig) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Transport(e)
        })?;

        let mut base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| family.base_url().to_string());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                family,
                base_url,
                api_key: config.api_key.clone(),
                cache: config.cache.build(),
                default_congress: config.default_congress,
            }),
        })
    }

    pub fn family(&self) -> ApiFamily {
        self.inner.family
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Resolves an optional Congress number: the explicit value, else the
    /// configured default, else the Congress in session today.
    pub fn congress(&self, congress: Option<u32>) -> u32 {
        congress
            .or(self.inner.default_congress)
            .unwrap_or_else(current_congress)
    }

    /// Builds the request URL for a logical path, without credentials.
    pub fn url_for(&self, path: &EndpointPath) -> Result<Url, Error> {
        let mut raw = format!(
            "{}{}",
            self.inner.base_url,
            path.path().trim_start_matches('/')
        );
        if !raw.ends_with(JSON_SUFFIX) {
            raw.push_str(JSON_SUFFIX);
        }
        let mut url = Url::parse(&raw).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e)
        })?;
        if !path.query().is_empty() {
            url.query_pairs_mut().extend_pairs(path.query());
        }
        Ok(url)
    }

    /// Fetches a logical endpoint path and applies `unwrap` to the envelope.
    pub async fn fetch(&self, path: &EndpointPath, unwrap: Unwrap) -> Result<Value, Error> {
        let url = self.url_for(path)?;
        self.get(url, unwrap).await
    }

    /// Fetches a URL taken from an API payload (a pagination or detail link).
    ///
    /// See [`Client::link_url`] for how the link is resolved.
    pub async fn fetch_url(&self, url: &str, unwrap: Unwrap) -> Result<Value, Error> {
        let url = self.link_url(url)?;
        self.get(url, unwrap).await
    }

    /// Resolves a link from an API payload to a request URL, without
    /// credentials.
    ///
    /// Absolute links must point at this family's host and base path. The
    /// scheme is not compared and the base URL's scheme is used. Anything
    /// else is a logical path, optionally with a query string. An `api-key`
    /// parameter already in the link is dropped.
    pub fn link_url(&self, link: &str) -> Result<Url, Error> {
        let link = link.trim();
        match Url::parse(link) {
            Ok(absolute) => self.absolute_link(&absolute),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let (path, query) = link.split_once('?').unwrap_or((link, ""));
                let endpoint = url::form_urlencoded::parse(query.as_bytes())
                    .filter(|(name, _)| !self.is_auth_param(name))
                    .fold(EndpointPath::new(path), |endpoint, (name, value)| {
                        endpoint.with_query(&name, value)
                    });
                self.url_for(&endpoint)
            }
            Err(e) => Err(Error::InvalidUrl(e)),
        }
    }

    fn absolute_link(&self, link: &Url) -> Result<Url, Error> {
        let mut base = Url::parse(&self.inner.base_url)?;
        let under_base = matches!(link.scheme(), "http" | "https")
            && link.host_str() == base.host_str()
            && link.port() == base.port()
            && link
                .path()
                .to_ascii_lowercase()
                .starts_with(&base.path().to_ascii_lowercase());
        if !under_base {
            tracing::error!("Refusing link outside {}", base);
            return Err(Error::InvalidArgument(format!(
                "link {} is outside {}",
                &link[..url::Position::AfterPath],
                base
            )));
        }

        base.set_path(link.path());
        base.set_query(None);
        let pairs: Vec<(String, String)> = link
            .query_pairs()
            .filter(|(name, _)| !self.is_auth_param(name))
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();
        if !pairs.is_empty() {
            base.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(base)
    }

    fn is_auth_param(&self, name: &str) -> bool {
        matches!(self.inner.family.auth(), AuthStyle::QueryParam(key) if key == name)
    }

    /// Fails with `InvalidArgument` unless this client talks to `family`.
    pub(crate) fn require_family(&self, family: ApiFamily, operation: &str) -> Result<(), Error> {
        if self.inner.family == family {
            return Ok(());
        }
        Err(Error::InvalidArgument(format!(
            "{} is not available on the {:?} API",
            operation, self.inner.family
        )))
    }

    /// Like [`Client::fetch`], deserializing the unwrapped value into `T`.
    pub async fn fetch_as<T: DeserializeOwned>(
        &self,
        path: &EndpointPath,
        unwrap: Unwrap,
    ) -> Result<T, Error> {
        let url = self.url_for(path)?;
        let display_url = url.to_string();
        let value = self.get(url, unwrap).await?;
        serde_json::from_value(value).map_err(|e| {
            tracing::error!("Unexpected result shape from {}: {}", display_url, e);
            Error::Api {
                message: format!("unexpected result shape: {}", e),
                url: display_url,
                response: None,
            }
        })
    }

    async fn get(&self, url: Url, unwrap: Unwrap) -> Result<Value, Error> {
        let api_key = self
            .inner
            .api_key
            .as_deref()
            .ok_or(Error::MissingApiKey(self.inner.family.api_key_var()))?;

        // The key never appears in cache keys, logs or errors.
        let display_url = url.to_string();
        let cached = self
            .inner
            .cache
            .as_ref()
            .and_then(|cache| cache.get(&display_url));

        let mut request_url = url;
        let mut request = match self.inner.family.auth() {
            AuthStyle::Header(name) => self.inner.http.get(request_url).header(name, api_key),
            AuthStyle::QueryParam(name) => {
                request_url.query_pairs_mut().append_pair(name, api_key);
                self.inner.http.get(request_url)
            }
        };
        if let Some(entry) = &cached {
            if let Some(etag) = &entry.etag {
                request = request.header(header::IF_NONE_MATCH, etag);
            }
            if let Some(last_modified) = &entry.last_modified {
                request = request.header(header::IF_MODIFIED_SINCE, last_modified);
            }
        }

        tracing::debug!("GET {}", display_url);
        let resp = request.send().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to get resource {}: {}", display_url, e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let content_type = header_string(&resp, header::CONTENT_TYPE);
        let etag = header_string(&resp, header::ETAG);
        let last_modified = header_string(&resp, header::LAST_MODIFIED);
        let mut body = resp.text().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if status == StatusCode::NOT_MODIFIED {
            match cached {
                Some(entry) => {
                    tracing::debug!("Not modified, serving cached {}", display_url);
                    body = entry.body;
                }
                None => {
                    tracing::error!("Not modified but nothing cached for {}", display_url);
                    return Err(Error::Api {
                        message: "HTTP 304 Not Modified with no cached response".to_string(),
                        url: display_url,
                        response: Some(ResponseMeta {
                            status: status.as_u16(),
                            content_type,
                            body: truncate_body(&body),
                        }),
                    });
                }
            }
        }

        let meta = || ResponseMeta {
            status: status.as_u16(),
            content_type: content_type.clone(),
            body: truncate_body(&body),
        };

        if status != StatusCode::OK && status != StatusCode::NOT_MODIFIED {
            let message = failure_message(status, &body);
            tracing::error!("Request failed with status {}: {}", status, message);
            let not_found = status == StatusCode::NOT_FOUND || message == RECORD_NOT_FOUND;
            return Err(if not_found {
                Error::NotFound {
                    message,
                    url: display_url,
                    response: Some(meta()),
                }
            } else {
                Error::Api {
                    message,
                    url: display_url,
                    response: Some(meta()),
                }
            });
        }

        let value: Value = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(&body));
            Error::Api {
                message: format!("malformed JSON response: {}", e),
                url: display_url.clone(),
                response: Some(meta()),
            }
        })?;

        let envelope = Envelope::inspect(&value);
        if envelope.is_record_not_found() {
            return Err(Error::NotFound {
                message: RECORD_NOT_FOUND.to_string(),
                url: display_url,
                response: Some(meta()),
            });
        }
        let status_ok = match envelope.status.as_deref() {
            Some(_) => envelope.is_ok(),
            None => !self.inner.family.requires_ok_status(),
        };
        if !status_ok {
            let message = envelope
                .first_error()
                .map(str::to_string)
                .unwrap_or_else(|| match &envelope.status {
                    Some(s) => format!("response status {:?}", s),
                    None => "response has no status".to_string(),
                });
            tracing::error!("API reported failure for {}: {}", display_url, message);
            return Err(Error::Api {
                message,
                url: display_url,
                response: Some(meta()),
            });
        }

        if status == StatusCode::OK {
            if let Some(cache) = &self.inner.cache {
                cache.set(
                    &display_url,
                    CachedResponse {
                        body: body.clone(),
                        etag,
                        last_modified,
                    },
                );
            }
        }

        unwrap.apply(value).map_err(|message| {
            tracing::error!("Unexpected envelope from {}: {}", display_url, message);
            Error::Api {
                message,
                url: display_url,
                response: Some(meta()),
            }
        })
    }
}

fn header_string(resp: &reqwest::Response, name: header::HeaderName) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// The first error message in a failed response body, falling back to the
/// status line when the body carries none.
fn failure_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            let envelope = Envelope::inspect(&value);
            envelope.first_error().map(str::to_string).or_else(|| {
                value
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| {
            format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            )
            .trim_end()
            .to_string()
        })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(family: ApiFamily) -> Client {
        Client::new(family, ClientConfig::new("k").without_cache()).unwrap()
    }

    #[test]
    fn url_appends_json_suffix_once() {
        let c = client(ApiFamily::ProPublica);
        let url = c.url_for(&EndpointPath::new("members/P000197")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.propublica.org/congress/v1/members/P000197.json"
        );
        let url = c.url_for(&EndpointPath::new("/members/P000197.json")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.propublica.org/congress/v1/members/P000197.json"
        );
    }

    #[test]
    fn url_carries_query_parameters() {
        let c = client(ApiFamily::NewYorkTimes);
        let path = EndpointPath::new("111/house/members").with_query("state", "CA");
        let url = c.url_for(&path).unwrap();
        assert_eq!(
            url.as_str(),
            "http://api.nytimes.com/svc/politics/v3/us/legislative/congress/111/house/members.json?state=CA"
        );
    }

    #[test]
    fn relative_links_keep_their_query() {
        let c = client(ApiFamily::ProPublica);
        let url = c.link_url("members/new.json?offset=20").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.propublica.org/congress/v1/members/new.json?offset=20"
        );
        let url = c.link_url("/members/new?offset=20&x=a%20b").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.propublica.org/congress/v1/members/new.json?offset=20&x=a+b"
        );
    }

    #[test]
    fn absolute_links_ignore_scheme() {
        let c = client(ApiFamily::NewYorkTimes);
        let url = c
            .link_url("https://API.nytimes.com/svc/politics/v3/us/legislative/congress/members/P000197.json?api-key=old&offset=20")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://api.nytimes.com/svc/politics/v3/us/legislative/congress/members/P000197.json?offset=20"
        );
    }

    #[test]
    fn links_outside_base_are_rejected() {
        let c = client(ApiFamily::NewYorkTimes);
        for link in [
            "https://example.org/x.json",
            "http://api.nytimes.com/svc/other/v1/x.json",
            "ftp://api.nytimes.com/svc/politics/v3/us/legislative/congress/x.json",
        ] {
            let err = c.link_url(link).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "{link}: {err:?}");
        }
    }

    #[test]
    fn family_guard() {
        let c = client(ApiFamily::NewYorkTimes);
        assert!(c.require_family(ApiFamily::NewYorkTimes, "x").is_ok());
        let err = c.require_family(ApiFamily::ProPublica, "members.party").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument: members.party is not available on the NewYorkTimes API"
        );
    }

    #[test]
    fn congress_resolution_order() {
        let c = client(ApiFamily::ProPublica);
        assert_eq!(c.congress(Some(110)), 110);
        assert_eq!(c.congress(None), current_congress());

        let c = Client::new(
            ApiFamily::ProPublica,
            ClientConfig::new("k").without_cache().with_default_congress(111),
        )
        .unwrap();
        assert_eq!(c.congress(None), 111);
        assert_eq!(c.congress(Some(112)), 112);
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let c = Client::new(
            ApiFamily::ProPublica,
            ClientConfig::new("k").without_cache().with_base_url("http://127.0.0.1:9"),
        )
        .unwrap();
        assert_eq!(c.base_url(), "http://127.0.0.1:9/");
    }

    #[test]
    fn failure_message_sources() {
        assert_eq!(
            failure_message(
                StatusCode::NOT_FOUND,
                r#"{"status":"ERROR","errors":[{"error":"Record not found"}]}"#
            ),
            "Record not found"
        );
        assert_eq!(
            failure_message(StatusCode::FORBIDDEN, r#"{"message":"Forbidden"}"#),
            "Forbidden"
        );
        assert_eq!(
            failure_message(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>"),
            "HTTP 500 Internal Server Error"
        );
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert!(out.len() <= 2000 + "...[truncated]".len());
        assert_eq!(truncate_body("short"), "short");
    }
}
