#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use live_long::router::{Gateway, RoutePrefix};
use live_long::{AggregatorClient, CountryRegistry};
use url::Url;

/// Nothing listens on port 1, so connecting fails straight away.
pub const UNREACHABLE_AGGREGATOR: &str = "http://127.0.0.1:1";

pub fn test_registry() -> CountryRegistry {
    CountryRegistry::from_pairs([
        ("World", ""),
        ("France", "FRA"),
        ("Germany", "DEU"),
        ("United Kingdom", "GBR"),
        ("Nigeria", "NGA"),
        ("Niger", "NER"),
        ("Denmark", "DNK"),
    ])
    .expect("fixture registry is valid")
}

pub fn public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

pub fn gateway(aggregator_base: &str, prefix: &str) -> Gateway {
    gateway_with_timeout(aggregator_base, prefix, Duration::from_secs(2))
}

pub fn gateway_with_timeout(aggregator_base: &str, prefix: &str, timeout: Duration) -> Gateway {
    let base = Url::parse(aggregator_base).expect("valid aggregator base");
    let aggregator = AggregatorClient::new(base, timeout).expect("client builds");
    Gateway::new(
        test_registry(),
        aggregator,
        RoutePrefix::new(prefix),
        public_dir(),
    )
}
