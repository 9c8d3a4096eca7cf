#[macro_use]
extern crate tracing;

use std::env;
use std::fs::File;
use std::io::{self, BufReader, Write as _};
use std::path::PathBuf;

use anyhow::{anyhow, Context as _};
use clap::Parser;
use directories::ProjectDirs;
use pointer_brakes::cli::{Cli, Sub};
use pointer_brakes::replay::{read_samples, replay};
use pointer_brakes::PointerMotionSim;
use pointer_brakes_config::{Config, ConfigPath};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "pointer_brakes=debug,info";

fn main() -> anyhow::Result<()> {
    let directives = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_owned());
    let env_filter = EnvFilter::builder().parse_lossy(directives);
    tracing_subscriber::fmt()
        .compact()
        .with_writer(io::stderr)
        .with_env_filter(env_filter)
        .init();

    let cli = Cli::parse();

    let _client = tracy_client::Client::start();

    let config_path = config_path(cli.config)?;
    let config = load_config(&config_path)?;

    match cli.subcommand {
        Sub::Validate => {
            info!("config at {:?} is valid", config_path.path());
        }
        Sub::Replay {
            file,
            json,
            braking,
        } => {
            let mut sim = match braking {
                Some(braking) => PointerMotionSim::new(braking),
                None => PointerMotionSim::from_config(&config.braking),
            };

            let samples = match file {
                Some(path) if path.as_os_str() != "-" => {
                    let file = File::open(&path)
                        .with_context(|| format!("error opening samples at {path:?}"))?;
                    read_samples(BufReader::new(file))
                }
                _ => read_samples(io::stdin().lock()),
            }
            .context("error reading samples")?;

            info!(
                "replaying {} samples with braking {}",
                samples.len(),
                sim.braking()
            );
            let frames = replay(&mut sim, samples).context("error replaying samples")?;

            let mut stdout = io::stdout().lock();
            for frame in &frames {
                if json {
                    serde_json::to_writer(&mut stdout, frame)?;
                    writeln!(stdout)?;
                } else {
                    writeln!(stdout, "{frame}")?;
                }
            }
        }
    }

    Ok(())
}

fn config_path(cli_path: Option<PathBuf>) -> anyhow::Result<ConfigPath> {
    if let Some(path) = cli_path.or_else(|| env::var_os("POINTER_BRAKES_CONFIG").map(PathBuf::from))
    {
        return Ok(ConfigPath::Explicit(path));
    }

    let dirs = ProjectDirs::from("", "", "pointer-brakes")
        .context("error retrieving home directory")?;
    Ok(ConfigPath::Regular {
        user_path: dirs.config_dir().join("config.kdl"),
    })
}

fn load_config(path: &ConfigPath) -> anyhow::Result<Config> {
    // miette reports render their diagnostics through Debug.
    path.load().map_err(|err| anyhow!("{err:?}"))
}
