use anyhow::Context;
use carton::{Carton, CartonResult, Dimensions};
use clap::{Args, ValueEnum};
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::read_input;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table
    #[default]
    Text,
    /// One JSON array
    Json,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Encoded cartons; read from stdin when omitted or "-"
    pub input: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct CartonReport {
    id: u64,
    status: &'static str,
    volume: i128,
    size: Dimensions,
    item: Option<Dimensions>,
    encoding: String,
}

impl CartonReport {
    fn new(carton: &Carton) -> CartonResult<Self> {
        let size = carton.size()?;
        Ok(Self {
            id: carton.id()?.as_u64(),
            status: carton.status().as_str(),
            volume: size.volume(),
            size,
            item: carton.item()?,
            encoding: carton.encode()?,
        })
    }
}

pub fn execute(args: InspectArgs, global: &GlobalFlags) -> anyhow::Result<()> {
    let factory = global.create_factory()?;
    let text = read_input(args.input.as_deref())?;
    let cartons = factory
        .decode_all(&text)
        .context("failed to decode cartons")?;

    let reports = cartons
        .iter()
        .map(CartonReport::new)
        .collect::<CartonResult<Vec<_>>>()?;
    tracing::debug!(count = reports.len(), "Inspected cartons");

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Text => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.load_preset(comfy_table::presets::NOTHING);
            table.set_header(["ID", "STATUS", "VOLUME", "ENCODING"]);
            for report in &reports {
                table.add_row([
                    report.id.to_string(),
                    report.status.to_string(),
                    report.volume.to_string(),
                    report.encoding.clone(),
                ]);
            }
            println!("{table}");
        }
    }
    Ok(())
}
