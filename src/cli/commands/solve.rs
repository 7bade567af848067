//! Solve command - Export the optimal policy for every reachable position

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        GlobalArgs,
        output::{format_number, print_kv, print_section},
    },
    export::{PolicyFormat, solve_policy, write_policy},
};

#[derive(Parser, Debug)]
#[command(about = "Solve every reachable position and export the policy")]
pub struct SolveArgs {
    /// Output file
    #[arg(long)]
    pub export: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: PolicyFormat,
}

pub fn execute(args: SolveArgs, global: &GlobalArgs) -> Result<()> {
    // Whole-tree solves always run with the cache
    let config = global.search_config()?.with_transposition(true);
    let records = solve_policy(config);
    write_policy(&records, config, &args.export, args.format)?;

    print_section("Optimal Policy");
    print_kv("Positions", &format_number(records.len()));
    print_kv("Exported to", &args.export.display().to_string());
    Ok(())
}
