//! kbri — nearest Indonesian representative office from the terminal.
//!
//! Usage examples
//! --------------
//!
//! - Show catalog sizes
//!   $ kbri stats
//!
//! - Nearest offices to a city, region or country
//!   $ kbri nearest Paris
//!   $ kbri nearest "New Jersey" -k 5
//!   $ kbri nearest Lyon --json
//!
//! - See which city a name resolves to
//!   $ kbri resolve bavaria
//!
//! Data source
//! -----------
//!
//! By default the bundled CSVs from `kbri-core/data` are used and a binary
//! snapshot is cached next to them for fast subsequent runs. Use
//! `--cities` / `--offices` (or `KBRI_CITIES` / `KBRI_OFFICES`) to point at
//! other datasets, and `--no-cache` to skip the snapshot.
use anyhow::{bail, Context};
use clap::Parser;
use kbri_cli::args::{CliArgs, Commands};
use kbri_cli::default_log_level;
use kbri_cli::render::{render_outcome, render_resolution};
use kbri_core::{Catalog, NearestOfficeQuery};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(args: &CliArgs) -> anyhow::Result<Catalog> {
    let cities = args
        .cities
        .clone()
        .unwrap_or_else(Catalog::default_cities_path);
    let offices = args
        .offices
        .clone()
        .unwrap_or_else(Catalog::default_offices_path);

    let catalog = if args.no_cache {
        Catalog::load_from_paths(&cities, &offices)
    } else {
        Catalog::load_cached(&cities, &offices)
    };
    catalog.with_context(|| {
        format!(
            "loading catalogs from {} and {}",
            cities.display(),
            offices.display()
        )
    })
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let catalog = load_catalog(&args)?;
    // An empty office catalog is a broken install, not a per-query answer.
    if catalog.offices.is_empty() {
        bail!("office catalog is empty; check --offices / KBRI_OFFICES");
    }
    let stats = catalog.stats();
    info!(cities = stats.cities, offices = stats.offices, "catalog ready");
    let query = NearestOfficeQuery::from_catalog(catalog);

    match args.command {
        Commands::Stats => {
            println!("Catalog statistics:");
            println!("  Cities: {}", stats.cities);
            println!("  Offices: {}", stats.offices);
        }

        Commands::Offices { filter } => {
            let offices = query
                .index()
                .offices_matching(filter.as_deref().unwrap_or_default());
            if offices.is_empty() {
                println!("No offices match.");
            }
            for o in offices {
                println!(
                    "{} {} — {} ({:.4}, {:.4})",
                    o.kind.abbreviation(),
                    o.city,
                    o.country,
                    o.location.lat(),
                    o.location.lon()
                );
            }
        }

        Commands::Resolve { query: q } => {
            print!("{}", render_resolution(&query.resolver().resolve(&q)));
        }

        Commands::Nearest { query: q, top, json } => {
            let outcome = query.answer(&q, top);
            if json {
                println!("{}", outcome.to_json_pretty()?);
            } else {
                print!("{}", render_outcome(&outcome));
            }
        }
    }

    Ok(())
}
