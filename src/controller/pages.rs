use actix_web::http::StatusCode;
use actix_web::web::Data;
use actix_web::{HttpResponse, HttpResponseBuilder};
use maud::Markup;

use crate::model::PageModel;
use crate::router::RoutePrefix;
use crate::view;
use crate::APP_TITLE;

pub const PAGE_NOT_FOUND: &str = "Page not found.";
pub const HELP_NOT_FOUND: &str = "Help article not found.";

pub async fn index(prefix: Data<RoutePrefix>) -> HttpResponse {
    let model = PageModel::new(APP_TITLE, prefix.as_str());
    html(StatusCode::OK, view::index::render_index_template(&model))
}

pub async fn about(prefix: Data<RoutePrefix>) -> HttpResponse {
    let model = PageModel::new("About Us", prefix.as_str());
    html(StatusCode::OK, view::about::render_about_template(&model))
}

pub async fn help_not_found(prefix: Data<RoutePrefix>) -> HttpResponse {
    render_not_found(prefix.as_str(), HELP_NOT_FOUND)
}

pub async fn not_found(prefix: Data<RoutePrefix>) -> HttpResponse {
    render_not_found(prefix.as_str(), PAGE_NOT_FOUND)
}

#[must_use]
pub fn render_not_found(route_prefix: &str, message: &str) -> HttpResponse {
    let model = PageModel::new("404", route_prefix).with_error(message);
    html(StatusCode::NOT_FOUND, view::not_found::render_not_found_template(&model))
}

fn html(status: StatusCode, markup: Markup) -> HttpResponse {
    HttpResponseBuilder::new(status)
        .content_type("text/html; charset=utf-8")
        .body(markup.into_string())
}
