use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::TEAM_NAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionKind {
    Heat,
    Air,
    Score,
}

impl PredictionKind {
    pub const ALL: [PredictionKind; 3] = [Self::Heat, Self::Air, Self::Score];

    /// Path segment on both the gateway and the aggregator.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            PredictionKind::Heat => "heat_prediction",
            PredictionKind::Air => "air_pollution_prediction",
            PredictionKind::Score => "score",
        }
    }
}

/// One prediction lookup as it will be forwarded to the aggregator.
///
/// Date parts are kept as the browser sent them; only the presence of
/// `country` is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionQuery {
    pub kind: PredictionKind,
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
    pub country: String,
}

impl PredictionQuery {
    /// Returns `None` when the `country` parameter is missing.
    #[must_use]
    pub fn from_params<S: std::hash::BuildHasher>(
        kind: PredictionKind,
        params: &HashMap<String, String, S>,
    ) -> Option<Self> {
        let country = params.get("country")?.clone();
        Some(Self {
            kind,
            year: params.get("year").cloned(),
            month: params.get("month").cloned(),
            day: params.get("day").cloned(),
            country,
        })
    }
}

/// What every rendered page gets to work with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageModel {
    pub title: String,
    pub name: String,
    pub error_message: Option<String>,
    pub route_prefix: String,
}

impl PageModel {
    #[must_use]
    pub fn new(title: &str, route_prefix: &str) -> Self {
        Self {
            title: title.to_string(),
            name: TEAM_NAME.to_string(),
            error_message: None,
            route_prefix: route_prefix.to_string(),
        }
    }

    #[must_use]
    pub fn with_error(mut self, message: &str) -> Self {
        self.error_message = Some(message.to_string());
        self
    }

    /// Absolute path of a gateway route or asset under the route prefix.
    #[must_use]
    pub fn href(&self, path: &str) -> String {
        format!("{}{}", self.route_prefix, path)
    }
}

/// Payload the landing page posts to `/messages` on every search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageRequest {
    #[serde(rename = "locationSearch", default)]
    pub location_search: Option<Value>,
    #[serde(rename = "inputDate", default)]
    pub input_date: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_requires_country() {
        let mut params = HashMap::new();
        params.insert("year".to_string(), "2024".to_string());
        assert!(PredictionQuery::from_params(PredictionKind::Heat, &params).is_none());

        params.insert("country".to_string(), "FRA".to_string());
        let query = PredictionQuery::from_params(PredictionKind::Heat, &params).unwrap();
        assert_eq!(query.year.as_deref(), Some("2024"));
        assert_eq!(query.month, None);
        assert_eq!(query.country, "FRA");
    }

    #[test]
    fn null_location_search_is_none() {
        let req: MessageRequest = serde_json::from_str(r#"{"locationSearch": null}"#).unwrap();
        assert!(req.location_search.is_none());
        let req: MessageRequest = serde_json::from_str("{}").unwrap();
        assert!(req.location_search.is_none());
        let req: MessageRequest =
            serde_json::from_str(r#"{"locationSearch": "France", "inputDate": "2024-06-01 00:00:00"}"#)
                .unwrap();
        assert_eq!(req.location_search, Some(Value::from("France")));
    }
}
