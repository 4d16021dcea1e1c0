use std::path::{Path, PathBuf};

use actix_files::Files;
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::web::{self, Data};
use actix_web::HttpResponse;

use crate::controller::aggregator::AggregatorClient;
use crate::controller::{countries, messages, pages, prediction};
use crate::model::{CountryRegistry, PredictionKind};

/// Path prefix shared by every route, either `""` or `/segment[/segment...]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutePrefix(String);

impl RoutePrefix {
    /// Adds the leading slash and drops trailing ones, so `live/`, `/live` and
    /// `/live/` all mean the same thing.
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        let trimmed = prefix.trim().trim_matches('/');
        if trimmed.is_empty() {
            Self(String::new())
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

/// Everything a worker needs to serve requests.
#[derive(Clone)]
pub struct Gateway {
    pub registry: Data<CountryRegistry>,
    pub aggregator: Data<AggregatorClient>,
    pub prefix: Data<RoutePrefix>,
    pub public_dir: PathBuf,
}

impl Gateway {
    #[must_use]
    pub fn new(
        registry: CountryRegistry,
        aggregator: AggregatorClient,
        prefix: RoutePrefix,
        public_dir: PathBuf,
    ) -> Self {
        Self {
            registry: Data::new(registry),
            aggregator: Data::new(aggregator),
            prefix: Data::new(prefix),
            public_dir,
        }
    }

    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.registry.clone())
            .app_data(self.aggregator.clone())
            .app_data(self.prefix.clone());
        configure_routes(cfg, &self.prefix, &self.public_dir);
    }
}

/// Register the route table under `prefix`. Explicit routes come first; the
/// static tree catches the rest and falls back to the 404 page.
pub fn configure_routes(cfg: &mut web::ServiceConfig, prefix: &RoutePrefix, public_dir: &Path) {
    if prefix.as_str().is_empty() {
        cfg.route("/", web::get().to(pages::index));
    } else {
        cfg.route(prefix.as_str(), web::get().to(pages::index))
            .route(&prefix.join("/"), web::get().to(pages::index));
    }

    cfg.route(&prefix.join("/about"), web::get().to(pages::about))
        .route(&prefix.join("/messages"), web::post().to(messages::messages))
        .route(&prefix.join("/countries"), web::get().to(countries::countries))
        .route("/health", web::get().to(HttpResponse::Ok));

    for kind in PredictionKind::ALL {
        let path = prefix.join(&format!("/{}", kind.path()));
        let route = match kind {
            PredictionKind::Heat => web::get().to(prediction::heat_prediction),
            PredictionKind::Air => web::get().to(prediction::air_pollution_prediction),
            PredictionKind::Score => web::get().to(prediction::score),
        };
        cfg.route(&path, route);
    }

    cfg.route(&prefix.join("/help/{tail:.*}"), web::get().to(pages::help_not_found));

    // No index.html ships under public/, so directory requests miss the index
    // and land on the default handler instead of a bare IsDirectory error.
    let mount = if prefix.as_str().is_empty() { "/" } else { prefix.as_str() };
    cfg.service(
        Files::new(mount, public_dir)
            .index_file("index.html")
            .default_handler(fn_service(|req: ServiceRequest| async move {
                let (req, _) = req.into_parts();
                let route_prefix = req
                    .app_data::<Data<RoutePrefix>>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                let res = pages::render_not_found(&route_prefix, pages::PAGE_NOT_FOUND);
                Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
            })),
    );

    cfg.default_service(web::to(pages::not_found));
}
