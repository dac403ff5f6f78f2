//! Bitbucket Cloud pull request service

use crate::auth::Auth;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::platform::PullRequestService;
use crate::types::{Provider, PullRequest, ServiceConfig};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::value::MapAccessDeserializer;
use serde::de::{Deserializer, MapAccess, Visitor};
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, warn};
use url::Url;

/// Public Bitbucket Cloud API root, used when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://api.bitbucket.org/2.0";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Bitbucket Cloud service using reqwest
pub struct BitbucketCloudService {
    client: Client,
    endpoint: Url,
    config: ServiceConfig,
}

/// One page of `GET /repositories/{owner}/{repo}/pullrequests`
#[derive(Debug, Deserialize)]
struct PullRequestPage {
    page: Option<u32>,
    size: Option<u32>,
    pagelen: Option<u32>,
    next: Option<String>,
    previous: Option<String>,
    values: Vec<Object<BitbucketPullRequest>>,
}

#[derive(Debug, Deserialize)]
struct BitbucketPullRequest {
    id: u64,
    #[serde(deserialize_with = "object")]
    source: Source,
}

#[derive(Debug, Deserialize)]
struct Source {
    #[serde(deserialize_with = "object")]
    branch: Branch,
    #[serde(deserialize_with = "object")]
    commit: Commit,
}

#[derive(Debug, Deserialize)]
struct Branch {
    name: String,
}

#[derive(Debug, Deserialize)]
struct Commit {
    hash: String,
}

/// A struct that must arrive as a JSON object.
///
/// Derived struct impls also accept a sequence and fill fields by position;
/// the API never sends that, so it is rejected as malformed.
#[derive(Debug)]
struct Object<T>(T);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Object<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ObjectVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for ObjectVisitor<T> {
            type Value = Object<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<Self::Value, A::Error> {
                T::deserialize(MapAccessDeserializer::new(map)).map(Object)
            }
        }

        deserializer.deserialize_map(ObjectVisitor(PhantomData))
    }
}

fn object<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Object::deserialize(deserializer).map(|Object(value)| value)
}

impl From<BitbucketPullRequest> for PullRequest {
    fn from(pr: BitbucketPullRequest) -> Self {
        Self {
            number: pr.id,
            branch: pr.source.branch.name,
            head_sha: pr.source.commit.hash,
        }
    }
}

impl BitbucketCloudService {
    /// Create a service from a full configuration
    ///
    /// Validates the base URL, owner and repository slug; performs no I/O.
    pub fn new(mut config: ServiceConfig) -> Result<Self> {
        let repo = config.repo_path();
        if config.owner.trim().is_empty() || config.repo_slug.trim().is_empty() {
            return Err(Error::Config(format!(
                "owner and repository slug are required, got {repo:?}"
            )));
        }

        config.base_url = config.base_url.filter(|u| !u.trim().is_empty());
        let base_url = config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let endpoint = pulls_endpoint(base_url, &config.owner, &config.repo_slug)
            .map_err(|e| {
                Error::Config(format!("error parsing base url of {base_url} for {repo}: {e}"))
            })?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            client,
            endpoint,
            config,
        })
    }

    /// Create a service authenticating with username and (app) password
    ///
    /// An empty `base_url` selects [`DEFAULT_BASE_URL`].
    pub fn with_basic_auth(
        username: &str,
        password: &str,
        base_url: &str,
        owner: &str,
        repo_slug: &str,
    ) -> Result<Self> {
        Self::new(Self::config_for(
            Auth::Basic {
                username: username.to_string(),
                password: password.to_string(),
            },
            base_url,
            owner,
            repo_slug,
        ))
    }

    /// Create a service authenticating with a bearer token
    pub fn with_bearer_token(
        token: &str,
        base_url: &str,
        owner: &str,
        repo_slug: &str,
    ) -> Result<Self> {
        Self::new(Self::config_for(
            Auth::Bearer {
                token: token.to_string(),
            },
            base_url,
            owner,
            repo_slug,
        ))
    }

    /// Create an unauthenticated service; only public repositories are visible
    pub fn with_no_auth(base_url: &str, owner: &str, repo_slug: &str) -> Result<Self> {
        Self::new(Self::config_for(Auth::Anonymous, base_url, owner, repo_slug))
    }

    fn config_for(auth: Auth, base_url: &str, owner: &str, repo_slug: &str) -> ServiceConfig {
        ServiceConfig {
            provider: Provider::BitbucketCloud,
            owner: owner.to_string(),
            repo_slug: repo_slug.to_string(),
            base_url: Some(base_url.to_string()),
            auth,
        }
    }

    /// The pull request listing URL this service queries
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.auth {
            Auth::Basic { username, password } => request.basic_auth(username, Some(password)),
            Auth::Bearer { token } => request.bearer_auth(token),
            Auth::Anonymous => request,
        }
    }

    async fn fetch_page(&self) -> Result<PullRequestPage> {
        let repo = self.config.repo_path();
        let transport = |e: reqwest::Error| {
            Error::Transport(format!("error listing pull requests for {repo}: {e}"))
        };

        let body = self
            .authorize(self.client.get(self.endpoint.clone()))
            .query(&[("state", "OPEN")])
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .bytes()
            .await
            .map_err(transport)?;

        decode_page(&body)
            .map_err(|e| Error::Decode(format!("unexpected pull request response for {repo}: {e}")))
    }
}

fn pulls_endpoint(
    base_url: &str,
    owner: &str,
    repo_slug: &str,
) -> std::result::Result<Url, String> {
    let mut url = Url::parse(base_url).map_err(|e| e.to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme `{}`", url.scheme()));
    }
    url.path_segments_mut()
        .map_err(|()| "URL cannot be a base".to_string())?
        .pop_if_empty()
        .extend(["repositories", owner, repo_slug, "pullrequests"]);
    Ok(url)
}

fn decode_page(body: &[u8]) -> serde_json::Result<PullRequestPage> {
    serde_json::from_slice::<Object<PullRequestPage>>(body).map(|Object(page)| page)
}

#[async_trait]
impl PullRequestService for BitbucketCloudService {
    async fn list(&self, ctx: &Context) -> Result<Vec<PullRequest>> {
        debug!("Listing open pull requests from {}", self.endpoint);

        let page = ctx.run(self.fetch_page()).await??;

        // Only the first page is read.
        if let Some(next) = &page.next {
            warn!(
                "{} has more open pull requests than one page (pagelen {:?}); ignoring {next}",
                self.config.repo_path(),
                page.pagelen
            );
        }

        let pulls: Vec<PullRequest> = page
            .values
            .into_iter()
            .map(|Object(pr)| PullRequest::from(pr))
            .collect();
        debug!(
            "Found {} open pull requests in {} (page {:?}, total {:?}, previous {:?})",
            pulls.len(),
            self.config.repo_path(),
            page.page,
            page.size,
            page.previous
        );
        Ok(pulls)
    }

    fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
