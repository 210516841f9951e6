// Command-line entry point: print computer name, FQDN and domain membership.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use crate::config::{load_config, OutputFormat, Settings};
use crate::logging;
use crate::membership::{check_domain_status, DomainMembershipQuery, DomainStatusReport};

#[derive(Debug, Parser)]
#[command(name = "domaincheck", version, about = "Report whether this computer is in a domain or a workgroup")]
pub struct Args {
    /// Config file (default: ~/.domaincheck/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// `--json` wins over the configured format.
    pub fn output_format(&self, settings: &Settings) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            settings.output.format
        }
    }
}

pub fn run(args: Args) -> Result<()> {
    let settings = load_config(args.config.as_deref())?;
    logging::init(&settings.logging.level, args.verbose)?;

    let mut query = DomainMembershipQuery::system(&settings);
    let report = check_domain_status(&mut query);

    let rendered = render(&report, args.output_format(&settings))?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered).context("Failed to write report")?;
    Ok(())
}

pub fn render(report: &DomainStatusReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.render_text()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to serialize report")
        }
    }
}
