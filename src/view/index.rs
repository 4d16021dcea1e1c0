use maud::{html, Markup, DOCTYPE};

use crate::model::{PageModel, PredictionKind};
use crate::view::partials;
use crate::GEOCHART_LOADER;

#[must_use]
pub fn render_index_template(model: &PageModel) -> Markup {
    let scripts = html! {
        script src=(GEOCHART_LOADER) {}
        script type="module" src=(model.href("/js/client-side.js")) defer {}
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            (partials::head(model, &scripts))
            body data-route-prefix=(model.route_prefix) {
                (partials::header(model))
                div class="search" {
                    form autocomplete="off" onsubmit="return false;" {
                        div class="autocomplete" {
                            input id="myInput" type="text" name="country" placeholder="Country";
                        }
                        div id="dateDiv" {}
                        fieldset class="display" {
                            legend { "Show" }
                            @for kind in PredictionKind::ALL {
                                label {
                                    input type="radio" name="display" value=(radio_value(kind)) checked[kind == PredictionKind::Score];
                                    (radio_label(kind))
                                }
                            }
                        }
                        button id="country_submit_button" type="button" { "Search" }
                    }
                }
                div id="regions_div" {}
                div id="error_modal" class="modal" hidden {
                    div class="modal-content" {
                        span class="close" { "\u{00d7}" }
                        p id="error_modal_text" {}
                    }
                }
                (partials::footer(model))
            }
        }
    }
}

fn radio_value(kind: PredictionKind) -> &'static str {
    match kind {
        PredictionKind::Heat => "heat",
        PredictionKind::Air => "air",
        PredictionKind::Score => "score",
    }
}

fn radio_label(kind: PredictionKind) -> &'static str {
    match kind {
        PredictionKind::Heat => "Heat",
        PredictionKind::Air => "Air pollution",
        PredictionKind::Score => "Overall score",
    }
}
