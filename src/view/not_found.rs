use maud::{html, Markup, DOCTYPE};

use crate::model::PageModel;
use crate::view::partials;

#[must_use]
pub fn render_not_found_template(model: &PageModel) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (partials::head(model, &html! {}))
            body {
                (partials::header(model))
                div class="main-content" {
                    @if let Some(message) = &model.error_message {
                        p class="error-message" { (message) }
                    }
                }
                (partials::footer(model))
            }
        }
    }
}
