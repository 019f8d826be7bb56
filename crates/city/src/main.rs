//! contribution-city: renders the last week of GitHub contributions as an isometric night city.

mod config;
mod github;

use anyhow::{bail, Context, Result};
use clap::Parser;
use config::{default_config_path, CityConfig};
use github::{CalendarSource, FileSource, GithubSource};
use rand::rngs::StdRng;
use rand::SeedableRng;
use renderer::CityRenderer;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Render a week of contributions as an isometric SVG city")]
struct Args {
    /// GitHub login to render. Falls back to $USERNAME.
    #[arg(long, env = "GITHUB_USER")]
    user: Option<String>,

    /// Token for the GraphQL API. Not needed with --calendar.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Read a saved GraphQL response instead of calling the API.
    #[arg(long, value_name = "FILE")]
    calendar: Option<PathBuf>,

    /// Output path; overrides the config file.
    #[arg(long, short, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Seed for windows, grass and stars. Unseeded runs use OS entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Config file (default: ./city.ron).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = CityConfig::load(&args.config.clone().unwrap_or_else(default_config_path));

    let Some(user) = args.user.clone().or_else(|| std::env::var("USERNAME").ok()) else {
        bail!("No user given: pass --user or set GITHUB_USER");
    };

    let source: Box<dyn CalendarSource> = match &args.calendar {
        Some(path) => Box::new(FileSource { path: path.clone() }),
        None => {
            let Some(token) = args.token.clone() else {
                bail!("No token given: pass --token or set GITHUB_TOKEN");
            };
            Box::new(GithubSource::new(user.clone(), token)?)
        }
    };

    let calendar = source.fetch()?;
    let week = calendar.last_week().context("Calendar does not cover a full week")?;
    log::info!(
        "Week of {}: {} contributions ({} total)",
        week.latest().date,
        week.week_total(),
        week.total()
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let renderer = CityRenderer::new(config.layout, config.star_count);
    let svg = renderer.render(&user, &week, &mut rng)?;

    let output = args.output.unwrap_or(config.output);
    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("Could not create {:?}", dir))?;
    }
    std::fs::write(&output, svg).with_context(|| format!("Could not write {:?}", output))?;
    log::info!("Wrote {:?}", output);
    Ok(())
}
