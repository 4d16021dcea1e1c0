use maud::{html, Markup, DOCTYPE};

use crate::model::PageModel;
use crate::view::partials;

#[must_use]
pub fn render_about_template(model: &PageModel) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (partials::head(model, &html! {}))
            body {
                (partials::header(model))
                div class="main-content" {
                    p {
                        "Live Long estimates how liveable a country will be on a chosen date, "
                        "from predicted heat and air pollution levels."
                    }
                    p {
                        "Pick a country and a date on the map page; the overall score runs from "
                        "0 (worst) to 1 (best)."
                    }
                }
                (partials::footer(model))
            }
        }
    }
}
