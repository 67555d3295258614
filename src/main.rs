use anyhow::Context;
use clap::Parser;
use hungerhelp::config::Config;
use hungerhelp::envelope::ResponseEnvelope;
use hungerhelp::location::LocateRequest;
use hungerhelp::server;
use std::path::PathBuf;
use std::sync::Arc;

/// HungerHelp — find food banks near you
///
/// Looks up food banks by coordinates or by a place/keyword, or serves
/// the same lookups over HTTP.
///
/// Examples:
///   hungerhelp harlem
///   hungerhelp --query "staten island"
///   hungerhelp --lat 40.7128 --lon -74.0060 --radius 10
///   hungerhelp --list
///   hungerhelp --serve --port 8000
#[derive(Parser)]
#[command(name = "hungerhelp", version, about, long_about = None)]
struct Cli {
    /// Place or keyword (positional). Example: hungerhelp harlem
    #[arg(index = 1)]
    query_positional: Option<String>,

    /// Place or keyword (named). Example: --query "new york"
    #[arg(long, short = 'q')]
    query: Option<String>,

    /// Latitude (-90 to 90).
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude (-180 to 180).
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Search radius in km. Defaults to search.default_radius_km (20).
    #[arg(long, short = 'r', allow_hyphen_values = true)]
    radius: Option<f64>,

    /// Catalog JSON file. Overrides catalog.path from the config.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Config file (default: ~/.hungerhelp/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the whole catalog and exit.
    #[arg(long)]
    list: bool,

    /// Run the HTTP API instead of a one-shot lookup.
    #[arg(long)]
    serve: bool,

    /// Bind host for --serve.
    #[arg(long)]
    host: Option<String>,

    /// Bind port for --serve.
    #[arg(long, short = 'p')]
    port: Option<u16>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // ── Configuration & catalog ─────────────────────────────────

    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    if let Some(path) = &cli.catalog {
        cfg.catalog.path = Some(path.clone());
    }
    if let Some(host) = &cli.host {
        cfg.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        cfg.server.port = port;
    }

    let catalog = Arc::new(cfg.load_catalog().context("loading catalog")?);
    let locator = cfg.locator(catalog);

    // ── Modes ───────────────────────────────────────────────────

    if cli.serve {
        let runtime = tokio::runtime::Runtime::new()?;
        let addr = cfg.bind_addr();
        return runtime
            .block_on(server::start(locator, &addr))
            .with_context(|| format!("serving on {}", addr));
    }

    if cli.list {
        let listing = locator.catalog().listing();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    let req = LocateRequest {
        latitude: cli.lat,
        longitude: cli.lon,
        radius_km: cli.radius,
        query: cli.query.or(cli.query_positional),
    };

    let envelope = match locator.locate(&req) {
        Ok(env) => env,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Human summary to stderr
    eprint!("{}", render_summary(&envelope));

    // JSON to stdout
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

fn render_summary(env: &ResponseEnvelope<'_>) -> String {
    let mut out = format!("  {}\n", env.message);
    for (i, m) in env.results.iter().enumerate() {
        let distance = match m.distance_km {
            Some(d) => format!(" ({:.2} km)", d),
            None => String::new(),
        };
        out.push_str(&format!(
            "    {}. {}{}\n       {}\n",
            i + 1,
            m.entity.name,
            distance,
            m.entity.address
        ));
    }
    out
}
