use actix_web::web::Bytes;
use actix_web::{HttpMessage, HttpRequest, HttpResponse};
use serde_json::{json, Value};

use crate::model::MessageRequest;

pub const NULL_COUNTRY: &str = "Cannot input null for country";

/// Acknowledges the search the landing page reports before each prediction.
/// Accepts a JSON or form-encoded body. Nothing is stored.
pub async fn messages(req: HttpRequest, body: Bytes) -> HttpResponse {
    let request = parse_message(req.content_type(), &body);

    let Some(location) = request.location_search else {
        return HttpResponse::Ok().json(json!({ "error": NULL_COUNTRY }));
    };

    tracing::debug!(%location, input_date = ?request.input_date, "search message received");
    HttpResponse::Ok().json(json!({ "message": "Success!" }))
}

/// An absent or malformed body counts as one without a country.
#[must_use]
pub fn parse_message(content_type: &str, body: &[u8]) -> MessageRequest {
    if content_type.eq_ignore_ascii_case("application/x-www-form-urlencoded") {
        let mut request = MessageRequest::default();
        for (key, value) in url::form_urlencoded::parse(body) {
            match key.as_ref() {
                "locationSearch" => request.location_search = Some(Value::from(value.into_owned())),
                "inputDate" => request.input_date = Some(Value::from(value.into_owned())),
                _ => {}
            }
        }
        return request;
    }
    serde_json::from_slice(body).unwrap_or_default()
}
