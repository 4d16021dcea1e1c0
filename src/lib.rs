pub mod args;
pub mod error;
pub mod logger;
pub mod model;
pub mod router;
pub mod controller {
    pub mod aggregator;
    pub mod countries;
    pub mod messages;
    pub mod pages;
    pub mod prediction;
}
pub mod view {
    pub mod about;
    pub mod index;
    pub mod not_found;
    pub mod partials;
}
#[cfg(feature = "sqlite")]
pub mod db;

pub const APP_TITLE: &str = "Live Long App";
pub const TEAM_NAME: &str = "TEAM 31 SETAP";
const GEOCHART_LOADER: &str = "https://www.gstatic.com/charts/loader.js";

pub use controller::aggregator::AggregatorClient;
pub use model::countries::CountryRegistry;
pub use router::configure_routes;
