use std::cmp::Ordering;

use anyhow::Context;
use clap::Args;

use crate::cli::GlobalFlags;
use crate::commands::read_input;

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Largest volume first
    #[arg(short, long)]
    pub reverse: bool,
}

/// Cartons of equal volume keep their input order. Ids follow the id
/// policy, so pass `--id-policy adopt` to keep the encoded ones.
pub fn execute(args: SortArgs, global: &GlobalFlags) -> anyhow::Result<()> {
    let factory = global.create_factory()?;
    let text = read_input(None)?;
    let mut cartons = factory
        .decode_all(&text)
        .context("failed to decode cartons from stdin")?;

    if args.reverse {
        cartons.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    } else {
        cartons.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    }
    tracing::debug!(count = cartons.len(), reverse = args.reverse, "Sorted cartons");

    for carton in &cartons {
        println!("{}", carton.encode()?);
    }
    Ok(())
}
