use live_long::args::{self, CleanArgs};
use live_long::error::StartupError;
use live_long::logger;
use live_long::router::{Gateway, RoutePrefix};
use live_long::{AggregatorClient, CountryRegistry};

use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{App, HttpServer};

#[actix_web::main]
async fn main() {
    dotenvy::dotenv().ok();
    logger::init_logger();

    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            tracing::error!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args).await {
        tracing::error!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: CleanArgs) -> Result<(), StartupError> {
    #[cfg(feature = "sqlite")]
    live_long::db::open_and_migrate(&args.database_path)?;

    let registry = CountryRegistry::load(&args.countries_path)?;
    tracing::info!(countries = registry.len(), path = %args.countries_path.display(), "country registry loaded");

    let aggregator = AggregatorClient::new(args.aggregator_base.clone(), args.upstream_timeout)?;

    let gateway = Gateway::new(
        registry,
        aggregator,
        RoutePrefix::new(&args.route_prefix),
        args.public_dir.clone(),
    );

    let server = HttpServer::new(move || {
        let gateway = gateway.clone();
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(Logger::default())
            .configure(move |cfg| gateway.configure(cfg))
    })
    .bind((args.listen_host.as_str(), args.listen_port))?;

    tracing::info!(
        aggregator = %args.aggregator_base,
        prefix = %args.route_prefix,
        "Server is up on {}:{}.",
        args.listen_host,
        args.listen_port
    );
    server.run().await?;
    Ok(())
}
