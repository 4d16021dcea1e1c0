use std::time::Duration;

use actix_web::web::Bytes;
use reqwest::Client;
use serde::de::IgnoredAny;
use url::Url;

use crate::error::GatewayError;
use crate::model::PredictionQuery;

/// HTTP client for the prediction aggregator.
///
/// Cloning is cheap; the inner `reqwest::Client` shares its connection pool.
#[derive(Clone, Debug)]
pub struct AggregatorClient {
    client: Client,
    base: Url,
}

impl AggregatorClient {
    /// # Errors
    ///
    /// Will return `Err` if the base cannot carry a path or the TLS backend
    /// fails to initialise.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, GatewayError> {
        if base.cannot_be_a_base() {
            return Err(GatewayError::Url(format!("'{base}' cannot be used as a base url")));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }

    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `<base>/<kind>?year=&month=&day=&country=`, every value form-encoded.
    /// Date parts the browser left out are left out here too.
    #[must_use]
    pub fn prediction_url(&self, query: &PredictionQuery) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(query.kind.path());
        }
        url.set_query(None);
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in [
                ("year", &query.year),
                ("month", &query.month),
                ("day", &query.day),
            ] {
                if let Some(value) = value {
                    pairs.append_pair(key, value);
                }
            }
            pairs.append_pair("country", &query.country);
        }
        url
    }

    /// Issue one GET and hand back the body untouched once it is known to be JSON.
    ///
    /// # Errors
    ///
    /// Will return `Err` on connection failure, timeout, or a body that does not parse as JSON.
    pub async fn fetch(&self, query: &PredictionQuery) -> Result<Bytes, GatewayError> {
        let url = self.prediction_url(query);
        tracing::debug!(%url, "forwarding prediction request");

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        serde_json::from_slice::<IgnoredAny>(&body)?;

        if !status.is_success() {
            tracing::warn!(%status, kind = query.kind.path(), "aggregator answered with an error status");
        }
        Ok(body)
    }
}
