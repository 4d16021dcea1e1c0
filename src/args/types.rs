use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Every setting can also come from the environment (or a `.env` file next to the binary).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Origin of the prediction aggregator, e.g. http://livelong_api:8080
    #[arg(
        long,
        env = "AGGREGATOR_BASE",
        value_name = "URL",
        default_value = "http://aggregator:8000",
        value_parser = crate::args::validation::check_aggregator_base
    )]
    pub aggregator_base: Url,
    /// Path prefix applied to every route, e.g. /live
    #[arg(
        long,
        env = "ROUTE_PREFIX",
        value_name = "PREFIX",
        default_value = "",
        value_parser = crate::args::validation::check_route_prefix
    )]
    pub route_prefix: String,
    #[arg(long, env = "LISTEN_HOST", value_name = "HOST", default_value = "0.0.0.0")]
    pub listen_host: String,
    #[arg(long, env = "LISTEN_PORT", value_name = "PORT", default_value = "3000")]
    pub listen_port: u16,
    /// Upper bound on one aggregator round trip.
    #[arg(
        long,
        env = "UPSTREAM_TIMEOUT_SECS",
        value_name = "SECONDS",
        default_value = "10",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub upstream_timeout_secs: u64,
    #[arg(long, env = "PUBLIC_DIR", value_name = "DIR", default_value = "./public")]
    pub public_dir: PathBuf,
    /// Defaults to data/countries.json under the public directory.
    #[arg(long, env = "COUNTRIES_PATH", value_name = "FILE")]
    pub countries_path: Option<PathBuf>,
    #[arg(long, env = "DATABASE_PATH", value_name = "FILE", default_value = "data.db")]
    pub database_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub aggregator_base: Url,
    pub route_prefix: String,
    pub listen_host: String,
    pub listen_port: u16,
    pub upstream_timeout: Duration,
    pub public_dir: PathBuf,
    pub countries_path: PathBuf,
    pub database_path: PathBuf,
}
