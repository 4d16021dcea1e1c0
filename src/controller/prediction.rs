use actix_web::http::header::ContentType;
use actix_web::web::{self, Data};
use actix_web::HttpResponse;
use serde_json::json;
use std::collections::HashMap;

use crate::controller::aggregator::AggregatorClient;
use crate::error::GatewayError;
use crate::model::{PredictionKind, PredictionQuery};

pub const MISSING_COUNTRY: &str = "country was undefined";

pub async fn heat_prediction(
    query: web::Query<HashMap<String, String>>,
    aggregator: Data<AggregatorClient>,
) -> Result<HttpResponse, GatewayError> {
    forward(PredictionKind::Heat, &query, &aggregator).await
}

pub async fn air_pollution_prediction(
    query: web::Query<HashMap<String, String>>,
    aggregator: Data<AggregatorClient>,
) -> Result<HttpResponse, GatewayError> {
    forward(PredictionKind::Air, &query, &aggregator).await
}

pub async fn score(
    query: web::Query<HashMap<String, String>>,
    aggregator: Data<AggregatorClient>,
) -> Result<HttpResponse, GatewayError> {
    forward(PredictionKind::Score, &query, &aggregator).await
}

/// # Errors
///
/// Will return `Err` if the aggregator cannot be reached or answers with something that isn't JSON.
pub async fn forward(
    kind: PredictionKind,
    params: &HashMap<String, String>,
    aggregator: &AggregatorClient,
) -> Result<HttpResponse, GatewayError> {
    let Some(query) = PredictionQuery::from_params(kind, params) else {
        return Ok(HttpResponse::Ok().json(json!({ "error": MISSING_COUNTRY })));
    };

    let body = aggregator.fetch(&query).await.inspect_err(|e| {
        tracing::warn!(kind = kind.path(), country = %query.country, "aggregator request failed: {e}");
    })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body))
}
