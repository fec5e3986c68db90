//! `lurk`: fetch posts, comments and subreddits by fullname.
//!
//! # Usage
//!
//! ```
//! lurk info t5_2qh23 t3_i2gvg4 t1_g05v931
//! lurk posts i2gvg4 i2gwgz --request-order
//! lurk --config lurk.toml info t1_g05v931 --kinds t1
//! ```
//!
//! Settings are read from the config file (if any), then `LURK_*`
//! environment variables (`LURK_HTTP__BASE_URL`, `LURK_BATCH__CONCURRENT`,
//! ...), then command-line flags. The assembled buckets are printed to
//! stdout as JSON.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use lurk_client::{BatchConfig, HttpConfig, HttpFetcher, Listings, OrderMode};
use lurk_core::{Fullname, Kind};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "lurk", version, about = "Fetch objects from the listing API")]
struct Args {
  /// Path to a config file (TOML, JSON or YAML).
  #[arg(short, long, value_name = "FILE", default_value = "lurk.toml")]
  config: PathBuf,

  /// Base URL of the API (default: https://www.reddit.com). The config
  /// layer reads the same setting from `LURK_HTTP__BASE_URL`.
  #[arg(long)]
  base_url: Option<String>,

  /// Maximum identifiers per request.
  #[arg(long, value_name = "N")]
  batch_size: Option<usize>,

  /// Re-sort each bucket to follow the order the ids were given in.
  #[arg(long)]
  request_order: bool,

  /// Fetch partitions one after another instead of concurrently.
  #[arg(long)]
  sequential: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Fetch any mix of posts, comments and subreddits by fullname.
  Info {
    /// Fullnames such as `t3_i2gvg4`.
    #[arg(required = true, value_parser = parse_fullname)]
    ids: Vec<Fullname>,

    /// Only collect these kinds (comma separated type codes, e.g. `t1,t3`).
    #[arg(long, value_delimiter = ',', value_parser = parse_kind)]
    kinds: Vec<Kind>,
  },

  /// Fetch posts by id; the `t3_` prefix is optional.
  Posts {
    #[arg(required = true, value_parser = parse_post_id)]
    ids: Vec<Fullname>,
  },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the layered configuration.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct Settings {
  batch: BatchConfig,
  http:  HttpConfig,
}

impl Settings {
  fn load(args: &Args) -> Result<Self> {
    let mut settings: Settings = config::Config::builder()
      .add_source(config::File::from(args.config.clone()).required(false))
      .add_source(
        config::Environment::with_prefix("LURK")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()
      .context("failed to read config")?
      .try_deserialize()
      .context("failed to deserialise settings")?;

    // Flags override file and environment.
    if let Some(base_url) = &args.base_url {
      settings.http.base_url = base_url.clone();
    }
    if let Some(size) = args.batch_size {
      settings.batch.max_ids_per_request = size;
    }
    if args.request_order {
      settings.batch.ordering = OrderMode::RequestOrder;
    }
    if args.sequential {
      settings.batch.concurrent = false;
    }
    Ok(settings)
  }
}

// ─── Argument parsers ─────────────────────────────────────────────────────────

fn parse_fullname(raw: &str) -> Result<Fullname, String> {
  raw.parse().map_err(|e: lurk_core::Error| e.to_string())
}

/// Anything already spelled as a fullname is kept as is, so a stray comment
/// id is rejected by the planner rather than silently turned into a post id.
fn parse_post_id(raw: &str) -> Result<Fullname, String> {
  match raw.parse::<Fullname>() {
    Ok(name) => Ok(name),
    Err(_) => Fullname::new(Kind::Link, raw).map_err(|e| e.to_string()),
  }
}

fn parse_kind(raw: &str) -> Result<Kind, String> {
  Kind::from_code(raw.trim()).ok_or_else(|| format!("unknown kind {raw:?}"))
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();
  let settings = Settings::load(&args)?;
  tracing::debug!(?settings, "loaded settings");

  let fetcher = HttpFetcher::new(settings.http).context("failed to build HTTP client")?;
  let listings = Listings::new(fetcher, settings.batch);

  let buckets = match &args.command {
    Command::Info { ids, kinds } if kinds.is_empty() => listings.get(ids).await,
    Command::Info { ids, kinds } => listings.get_with_kinds(ids, kinds).await,
    Command::Posts { ids } => listings.get_posts(ids).await,
  }
  .context("fetch failed")?;

  for warning in &buckets.warnings {
    tracing::warn!(position = warning.position, error = %warning.error, "skipped child");
  }

  let json = serde_json::to_string_pretty(&buckets).context("failed to encode result")?;
  println!("{json}");
  Ok(())
}
