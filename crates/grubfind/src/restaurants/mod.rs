use crate::prelude::{eprintln, *};
use grubfind_core::query::QueryError;
use grubfind_core::restaurant::{parse_collection, RestaurantCollection};
use grubfind_core::session::DiscoverySession;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod facets;
pub mod search;

/// Discovery API configuration from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl DiscoveryConfig {
    /// Default discovery API base URL
    pub const DEFAULT_BASE_URL: &'static str = "https://uk.api.just-eat.io";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// Load configuration from environment variables
    ///
    /// Uses GRUBFIND_API_BASE, GRUBFIND_TIMEOUT_SECS and GRUBFIND_USER_AGENT,
    /// each with a default fallback.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let timeout_secs = match var("GRUBFIND_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                Error::Config(f!("GRUBFIND_TIMEOUT_SECS must be a whole number, got {raw:?}"))
            })?,
            None => Self::DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url: var("GRUBFIND_API_BASE")
                .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string()),
            timeout_secs,
            user_agent: var("GRUBFIND_USER_AGENT")
                .unwrap_or_else(|| f!("grubfind/{}", env!("CARGO_PKG_VERSION"))),
        })
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        self
    }
}

/// Where restaurant data comes from
#[derive(Debug, clap::Args, Clone, Default)]
pub struct SourceOptions {
    /// Read the restaurant list from a JSON file instead of the API
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Discovery API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

/// Create an HTTP client for the discovery API
pub fn create_client(config: &DiscoveryConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}

/// Discovery endpoint for a postcode
pub fn restaurants_url(base_url: &str, postcode: &str) -> String {
    f!(
        "{}/discovery/uk/restaurants/enriched/bypostcode/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(postcode)
    )
}

/// Fetch the restaurant collection for a postcode
///
/// Every failure is mapped onto [`QueryError`]; nothing is retried.
pub async fn fetch_restaurants(
    client: &reqwest::Client,
    config: &DiscoveryConfig,
    postcode: &str,
) -> std::result::Result<RestaurantCollection, QueryError> {
    let url = restaurants_url(&config.base_url, postcode);
    debug!("GET {url}");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| QueryError::network(f!("A network error occurred: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.ok();
        return Err(QueryError::from_status(
            status.as_u16(),
            postcode,
            body.as_deref(),
        ));
    }

    let body = response
        .text()
        .await
        .map_err(|e| QueryError::network(f!("Failed to read response: {e}")))?;

    parse_collection(&body)
        .map_err(|e| QueryError::unknown(f!("Failed to parse restaurants for {postcode}: {e}")))
}

/// Read a restaurant collection from a JSON file
pub fn load_collection_file(path: &Path) -> Result<RestaurantCollection> {
    let body = std::fs::read_to_string(path)
        .with_context(|| f!("Failed to read {}", path.display()))?;

    parse_collection(&body).with_context(|| f!("Failed to parse restaurants in {}", path.display()))
}

/// Load data for the selected location, if the session is waiting for any
///
/// Does nothing while the session is idle or already loaded.
pub async fn load_pending(
    session: &mut DiscoverySession,
    source: &SourceOptions,
    global: &crate::Global,
) -> Result<()> {
    let Some(postcode) = session.pending_fetch().map(str::to_string) else {
        debug!("No pending fetch, skipping");
        return Ok(());
    };

    let collection = match &source.file {
        Some(path) => {
            if global.verbose {
                eprintln!("Loading restaurants from {}", path.display());
            }
            load_collection_file(path)?
        }
        None => {
            let config = DiscoveryConfig::from_env()?.with_overrides(source.base_url.clone());
            if global.verbose {
                eprintln!("Fetching restaurants for {postcode} from {}", config.base_url);
            }
            let client = create_client(&config)?;
            fetch_restaurants(&client, &config, &postcode)
                .await
                .map_err(|err| {
                    warn!("Query for {postcode} failed ({}): {err}", err.status_label());
                    Error::Query(err.user_message())
                })?
        }
    };

    debug!(
        "Loaded {} restaurants for {postcode}",
        collection.restaurants().len()
    );
    session.receive(collection);
    Ok(())
}

/// Start a session for a raw location input
pub fn start_session(location: &str) -> Result<DiscoverySession> {
    let mut session = DiscoverySession::new();
    session
        .submit(location)
        .map_err(|_| Error::InvalidLocation {
            input: location.to_string(),
            hint: crate::locations::location_hint(location),
        })?;
    Ok(session)
}
