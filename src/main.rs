// domaincheck - domain vs. workgroup membership report
// Main entry point

use anyhow::Result;
use clap::Parser;

use domaincheck::cli::{self, Args};

fn main() -> Result<()> {
    cli::run(Args::parse())
}
