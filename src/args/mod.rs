use clap::Parser;
use std::time::Duration;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

use crate::error::StartupError;

/// Parse flags and environment, then check what clap can't.
///
/// # Errors
///
/// Will return `Err` if the public directory or country file are unreadable
pub fn args_checks() -> Result<CleanArgs, StartupError> {
    let args = Args::parse();
    args.validate()?;
    Ok(CleanArgs::new(args))
}

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if the public directory or country file are unreadable
    pub fn validate(&self) -> Result<(), String> {
        validation::check_readable_dir(&self.public_dir)?;
        validation::check_readable_file(&self.countries_path())?;
        Ok(())
    }

    #[must_use]
    pub fn countries_path(&self) -> std::path::PathBuf {
        self.countries_path
            .clone()
            .unwrap_or_else(|| self.public_dir.join("data").join("countries.json"))
    }
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        let countries_path = args.countries_path();
        CleanArgs {
            aggregator_base: args.aggregator_base,
            route_prefix: args.route_prefix,
            listen_host: args.listen_host,
            listen_port: args.listen_port,
            upstream_timeout: Duration::from_secs(args.upstream_timeout_secs),
            public_dir: args.public_dir,
            countries_path,
            database_path: args.database_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_single_host_deployment() {
        let args = Args::try_parse_from(["live-long"]).unwrap();
        assert_eq!(args.listen_port, 3000);
        assert_eq!(args.route_prefix, "");
        assert_eq!(args.aggregator_base.as_str(), "http://aggregator:8000/");
        assert_eq!(args.upstream_timeout_secs, 10);

        let clean = CleanArgs::new(args);
        assert_eq!(clean.countries_path, std::path::Path::new("./public/data/countries.json"));
        assert_eq!(clean.upstream_timeout, Duration::from_secs(10));
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "live-long",
            "--aggregator-base",
            "http://livelong_api:8080",
            "--route-prefix",
            "live/",
            "--upstream-timeout-secs",
            "3",
        ])
        .unwrap();
        assert_eq!(args.route_prefix, "/live");
        assert_eq!(args.aggregator_base.host_str(), Some("livelong_api"));
        assert_eq!(args.upstream_timeout_secs, 3);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Args::try_parse_from(["live-long", "--upstream-timeout-secs", "0"]).is_err());
    }
}
