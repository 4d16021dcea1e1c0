use maud::{html, Markup};

use crate::model::PageModel;

/// Shared `<head>`; pages add their own scripts through `extra`. Callers own
/// the doctype and the `<html>` root.
#[must_use]
pub fn head(model: &PageModel, extra: &Markup) -> Markup {
    html! {
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href=(model.href("/css/styles.css"));
            title { (model.title) }
            (extra)
        }
    }
}

#[must_use]
pub fn header(model: &PageModel) -> Markup {
    html! {
        div class="header" {
            h1 { (model.title) }
            nav {
                a href=(home_href(model)) { "Map" }
                a href=(model.href("/about")) { "About" }
            }
        }
    }
}

#[must_use]
pub fn footer(model: &PageModel) -> Markup {
    html! {
        footer {
            p { "Created by " (model.name) }
        }
    }
}

fn home_href(model: &PageModel) -> String {
    if model.route_prefix.is_empty() {
        "/".to_string()
    } else {
        model.route_prefix.clone()
    }
}
