use std::io::{self, Read, Write};

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use surge2clash::settings::init_settings;
use surge2clash::utils::http::{web_get, FetchConfig};
use surge2clash::{surge_to_clash, Settings};

/// Convert a Surge configuration into a Clash configuration
///
/// Reads the Surge configuration from stdin unless --input or --url is given,
/// and writes the Clash configuration to stdout unless --output is given.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the settings file (TOML or YAML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Read the Surge configuration from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "url")]
    input: Option<String>,

    /// Fetch the Surge configuration from a URL
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Write the Clash configuration to a file
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<String>,

    /// Start the web server instead of converting once
    #[arg(long)]
    serve: bool,

    /// Listen address (e.g., 127.0.0.1 or 0.0.0.0)
    #[arg(short, long, value_name = "ADDRESS", requires = "serve")]
    address: Option<String>,

    /// Listen port
    #[arg(short, long, value_name = "PORT", requires = "serve")]
    port: Option<u16>,
}

fn main() {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or("");
    if let Err(e) = init_settings(config_path) {
        eprintln!("Error: failed to load settings: {}", e);
        std::process::exit(1);
    }
    let settings = Settings::current();

    env_logger::init_from_env(Env::default().default_filter_or(settings.log_level.as_str()));
    if !config_path.is_empty() {
        info!("Loaded settings from {}", config_path);
    }

    let result = if args.serve {
        serve(&args, &settings).map_err(Into::into)
    } else {
        run(&args, &settings)
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let source = match (&args.url, &args.input) {
        (Some(url), _) => {
            info!("Fetching Surge configuration from {}", url);
            web_get(url, &FetchConfig::from(&settings.fetch))?
        }
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            content
        }
    };

    let clash_config = surge_to_clash(&source)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, clash_config)?;
            info!("Successfully wrote Clash configuration to {}", path);
        }
        None => io::stdout().write_all(clash_config.as_bytes())?,
    }
    Ok(())
}

#[cfg(feature = "web-api")]
fn serve(args: &Args, settings: &Settings) -> io::Result<()> {
    use actix_web::{App, HttpServer};
    use surge2clash::web_handlers::interfaces;

    let mut settings = settings.clone();
    if let Some(address) = &args.address {
        settings.server.listen_address = address.clone();
    }
    if let Some(port) = args.port {
        settings.server.listen_port = port;
    }
    let listen_address = settings.listen_address();
    let workers = settings.server.max_concur_threads.max(1);

    info!("surge2clash starting on {}", listen_address);

    actix_web::rt::System::new().block_on(async move {
        HttpServer::new(|| App::new().configure(interfaces::config))
            .bind(listen_address)?
            .workers(workers)
            .run()
            .await
    })
}

#[cfg(not(feature = "web-api"))]
fn serve(_args: &Args, _settings: &Settings) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "--serve requires building with the web-api feature",
    ))
}
