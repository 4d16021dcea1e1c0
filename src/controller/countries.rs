use actix_web::web::{self, Data};
use actix_web::HttpResponse;
use serde_json::json;
use std::collections::HashMap;

use crate::controller::prediction::MISSING_COUNTRY;
use crate::model::CountryRegistry;

/// Autocomplete for the country box: `?country=<fragment>` to a JSON array of names.
pub async fn countries(
    query: web::Query<HashMap<String, String>>,
    registry: Data<CountryRegistry>,
) -> HttpResponse {
    let Some(fragment) = query.get("country") else {
        return HttpResponse::Ok().json(json!({ "error": MISSING_COUNTRY }));
    };

    HttpResponse::Ok().json(registry.autocomplete(fragment))
}
