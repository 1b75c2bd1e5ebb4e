use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use tracing::{debug, error, warn};

use crate::anaf::error::{AnafError, TransportError};
use crate::anaf::wire::{AnafResponse, CuiQuery, GeneralData};
use crate::anaf::CompanyInfo;
use crate::validator::validate_cui;

/// Default ANAF VAT-payer endpoint.
pub const DEFAULT_ANAF_URL: &str = "https://webservicesp.anaf.ro/PlatitorTvaRest/api/v9/ws/tva";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_MAX_RETRIES: u32 = 2;
const DEFAULT_MAX_BATCH_SIZE: usize = 500;

const INITIAL_BACKOFF: Duration = Duration::from_millis(500);
const MAX_BACKOFF: Duration = Duration::from_millis(2000);

/// Client for the public ANAF VAT-payer registry.
///
/// Validates every CUI before any network activity, collapses duplicate
/// inputs into a single request line, and retries transient failures with
/// exponential backoff (500 ms doubling, capped at 2 s).
///
/// A single instance is cheap to clone and safe for concurrent use; no
/// per-call state outlives the call. Dropping a pending lookup future
/// aborts the in-flight request or backoff sleep.
///
/// # Example
///
/// ```ignore
/// let client = AnafClient::new()?;
/// let info = client.lookup("RO18547290").await?;
/// assert!(info.found_in_registry);
/// ```
#[derive(Debug, Clone)]
pub struct AnafClient {
    http: reqwest::Client,
    base_url: String,
    max_retries: u32,
    max_batch_size: usize,
}

/// Builder for [`AnafClient`].
#[derive(Debug, Clone)]
pub struct AnafClientBuilder {
    base_url: String,
    timeout: Duration,
    max_retries: u32,
    max_batch_size: usize,
}

impl Default for AnafClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ANAF_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        }
    }
}

impl AnafClientBuilder {
    /// Override the registry endpoint (mainly for tests).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Per-request timeout. Default: 10 s.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Number of retries after the first failed attempt. Default: 2.
    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Maximum number of CUIs per batch. Default: 500.
    #[must_use]
    pub fn max_batch_size(mut self, size: usize) -> Self {
        self.max_batch_size = size;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`AnafError::Configuration`] if the underlying HTTP client
    /// cannot be constructed (e.g. TLS backend initialization failure).
    pub fn build(self) -> Result<AnafClient, AnafError> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| AnafError::Configuration(e.to_string()))?;

        Ok(AnafClient {
            http,
            base_url: self.base_url,
            max_retries: self.max_retries,
            max_batch_size: self.max_batch_size,
        })
    }
}

impl AnafClient {
    /// Create a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AnafError::Configuration`] if the HTTP client cannot be
    /// constructed.
    pub fn new() -> Result<Self, AnafError> {
        Self::builder().build()
    }

    /// Create a builder for custom configuration.
    #[must_use]
    pub fn builder() -> AnafClientBuilder {
        AnafClientBuilder::default()
    }

    /// Look up a single CUI.
    ///
    /// Accepts the same input forms as
    /// [`validate_cui`](crate::validator::validate_cui); an `RO` prefix is
    /// stripped before the request is built.
    ///
    /// # Errors
    ///
    /// [`AnafError::InvalidCui`] if the input fails validation, or
    /// [`AnafError::RegistryUnavailable`] after retry exhaustion.
    pub async fn lookup(&self, cui: &str) -> Result<CompanyInfo, AnafError> {
        debug!(cui, "looking up CUI");

        let mut results = self.lookup_batch(&[cui]).await?;
        if results.is_empty() {
            // A one-element batch must yield one result; an empty mapping
            // means the registry dropped the entry. The exchange itself
            // succeeded, so this counts as a single attempt.
            return Err(AnafError::RegistryUnavailable {
                attempts: 1,
                source: TransportError::EmptyResponse,
            });
        }
        Ok(results.swap_remove(0))
    }

    /// Look up multiple CUIs in one batched request.
    ///
    /// Duplicate inputs collapse to a single request line. The returned
    /// order is found entries first, then not-found entries — NOT the input
    /// order, and the registry is not guaranteed to answer with exactly one
    /// entry per requested CUI. Use
    /// [`index_by_cui`](crate::anaf::index_by_cui) to re-key results.
    ///
    /// # Errors
    ///
    /// [`AnafError::EmptyBatch`], [`AnafError::BatchTooLarge`], or
    /// [`AnafError::InvalidCui`] before any network activity;
    /// [`AnafError::RegistryUnavailable`] after retry exhaustion.
    pub async fn lookup_batch<S: AsRef<str>>(
        &self,
        cuis: &[S],
    ) -> Result<Vec<CompanyInfo>, AnafError> {
        if cuis.is_empty() {
            return Err(AnafError::EmptyBatch);
        }
        if cuis.len() > self.max_batch_size {
            return Err(AnafError::BatchTooLarge {
                size: cuis.len(),
                max: self.max_batch_size,
            });
        }

        debug!(count = cuis.len(), "looking up CUIs in batch");

        // Validate and normalize, deduplicating on the canonical value while
        // keeping one representative original literal per key.
        let mut normalized: BTreeMap<u64, &str> = BTreeMap::new();
        for cui in cuis {
            let cui = cui.as_ref();
            let key = validate_and_normalize(cui)?;
            normalized.entry(key).or_insert(cui);
        }

        // One shared reference date so a batch straddling midnight stays
        // internally consistent.
        let reference_date = Local::now().date_naive();
        let queries: Vec<CuiQuery> = normalized
            .keys()
            .map(|&cui| CuiQuery {
                cui,
                data: reference_date,
            })
            .collect();

        let response = self.execute_with_retry(&queries).await?;
        Ok(map_response(response, reference_date))
    }

    async fn execute_with_retry(&self, queries: &[CuiQuery]) -> Result<AnafResponse, AnafError> {
        let mut backoff = INITIAL_BACKOFF;
        let mut attempt: u32 = 0;

        loop {
            if attempt > 0 {
                warn!(attempt, max_retries = self.max_retries, "retrying ANAF request");
                tokio::time::sleep(backoff).await;
                backoff = (backoff * 2).min(MAX_BACKOFF);
            }

            match self.post(queries).await {
                Ok(response) => return Ok(response),
                Err(source) => {
                    if attempt >= self.max_retries {
                        let attempts = attempt + 1;
                        error!(attempts, %source, "failed to query ANAF registry");
                        return Err(AnafError::RegistryUnavailable { attempts, source });
                    }
                    attempt += 1;
                }
            }
        }
    }

    /// A single request/response exchange. Every failure mode here is
    /// transient from the retry loop's point of view.
    async fn post(&self, queries: &[CuiQuery]) -> Result<AnafResponse, TransportError> {
        let response = self
            .http
            .post(&self.base_url)
            .json(queries)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TransportError::Status { status, body });
        }
        if body.trim().is_empty() {
            return Err(TransportError::EmptyResponse);
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn validate_and_normalize(input: &str) -> Result<u64, AnafError> {
    let result = validate_cui(input);
    let invalid = |reason: String| AnafError::InvalidCui {
        input: input.to_owned(),
        reason,
    };

    if !result.valid {
        return Err(invalid(
            result.error.unwrap_or_else(|| "unknown error".to_owned()),
        ));
    }

    result
        .normalized
        .as_deref()
        .and_then(|cui| cui.parse::<u64>().ok())
        .ok_or_else(|| invalid("not a numeric CUI".to_owned()))
}

/// Maps the registry response: found entries first, then not-found entries.
fn map_response(response: AnafResponse, reference_date: NaiveDate) -> Vec<CompanyInfo> {
    let mut results = Vec::with_capacity(response.found.len() + response.notfound.len());

    for entry in response.found {
        match entry.date_generale {
            Some(general) => match map_general_data(general) {
                Some(info) => results.push(info),
                None => warn!("found entry without a CUI, skipping"),
            },
            None => warn!("found entry without date_generale, skipping"),
        }
    }

    for entry in response.notfound {
        if let Some(cui) = entry.cui {
            results.push(CompanyInfo::not_found(cui, reference_date));
        }
    }

    results
}

fn map_general_data(general: GeneralData) -> Option<CompanyInfo> {
    let cui = general.cui?;
    Some(CompanyInfo {
        cui,
        reference_date: parse_date(general.reference_date.as_deref()),
        company_name: general.company_name,
        registration_date: parse_date(general.registration_date.as_deref()),
        address: general.address,
        phone_number: general.phone_number,
        postal_code: general.postal_code,
        is_vat_payer: general.is_vat_payer == Some(true),
        vat_registration_date: parse_date(general.vat_registration_date.as_deref()),
        is_split_vat: general.split_vat_start_date.is_some(),
        is_inactive: general.is_inactive == Some(true),
        found_in_registry: true,
    })
}

/// Parses a `YYYY-MM-DD` date; a malformed value degrades to `None` with a
/// warning rather than failing the whole mapping.
fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    let raw = value?.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            warn!(value = raw, "failed to parse date in ANAF response");
            None
        }
    }
}
