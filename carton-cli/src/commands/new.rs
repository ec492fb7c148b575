use anyhow::Context;
use carton::Dimensions;
use clap::Args;

use crate::cli::{GlobalFlags, parse_dimensions};

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Carton size as LxWxH (defaults to the configured size)
    #[arg(long, value_parser = parse_dimensions)]
    pub size: Option<Dimensions>,

    /// Item to put inside, as LxWxH
    #[arg(long, value_parser = parse_dimensions)]
    pub item: Option<Dimensions>,

    /// Leave the lid open
    #[arg(long)]
    pub open: bool,

    /// Number of cartons to build
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,
}

pub fn execute(args: NewArgs, global: &GlobalFlags) -> anyhow::Result<()> {
    let factory = global.create_factory()?;
    let size = args.size.unwrap_or(factory.options().default_size);

    for _ in 0..args.count {
        let mut carton = factory
            .create(size)
            .with_context(|| format!("failed to create carton of size {}", size))?;

        if args.open || args.item.is_some() {
            carton.open()?;
        }
        if let Some(item) = args.item {
            carton
                .put_item(item)
                .with_context(|| format!("failed to put item {}", item))?;
            if !args.open {
                carton.close()?;
            }
        }
        println!("{}", carton.encode()?);
    }
    Ok(())
}
