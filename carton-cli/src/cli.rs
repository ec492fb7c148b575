use std::path::PathBuf;

use anyhow::Context;
use carton::{CartonFactory, CartonOptions, Dimensions, IdPolicy};
use carton_shared::constants::envs;
use clap::{Args, Parser, Subcommand};

use crate::commands;

#[derive(Parser, Debug)]
#[command(name = "carton", author, version, about = "Build, inspect and sort encoded cartons")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalFlags {
    /// Options file (JSON, or YAML with a .yaml/.yml extension)
    #[arg(long, global = true, env = envs::CONFIG)]
    pub config: Option<PathBuf>,

    /// How decoded ids are treated: reassign or adopt (overrides the config)
    #[arg(long, global = true)]
    pub id_policy: Option<IdPolicy>,

    /// Log every carton state change to stderr
    #[arg(long, global = true)]
    pub debug: bool,
}

impl GlobalFlags {
    pub fn load_options(&self) -> anyhow::Result<CartonOptions> {
        let mut options = match &self.config {
            Some(path) => CartonOptions::load(path)
                .with_context(|| format!("failed to load options from {}", path.display()))?,
            None => CartonOptions::default(),
        };
        if let Some(policy) = self.id_policy {
            options.id_policy = policy;
        }
        Ok(options)
    }

    pub fn create_factory(&self) -> anyhow::Result<CartonFactory> {
        let options = self.load_options()?;
        Ok(CartonFactory::new(options)?)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build cartons and print one encoding per line
    New(commands::new::NewArgs),

    /// Decode cartons and describe them
    Inspect(commands::inspect::InspectArgs),

    /// Read cartons from stdin and print them ordered by volume
    Sort(commands::sort::SortArgs),
}

/// Parses `LxWxH` (e.g. `10x20x30`) or an encoded `{length: .., ...}` value.
pub fn parse_dimensions(s: &str) -> Result<Dimensions, String> {
    let s = s.trim();
    if s.starts_with('{') {
        return Dimensions::decode(s).map_err(|e| e.to_string());
    }

    let parts: Vec<&str> = s.split(['x', 'X']).collect();
    let [length, width, height] = parts.as_slice() else {
        return Err(format!("expected LxWxH, got '{}'", s));
    };
    let side = |name: &str, value: &str| {
        value
            .trim()
            .parse::<i32>()
            .map_err(|_| format!("invalid {} '{}' in '{}'", name, value, s))
    };
    Ok(Dimensions::new(
        side("length", length)?,
        side("width", width)?,
        side("height", height)?,
    ))
}
