//! CLI argument parsing for todoprogress

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::domain::EmployeeId;

#[derive(Parser, Debug)]
#[command(name = "tp")]
#[command(author, version, about = "Report an employee's TODO list progress", long_about = None)]
pub struct Cli {
    /// Employee ID (positive integer)
    #[arg(required = true, allow_negative_numbers = true, value_parser = parse_employee_id)]
    pub employee_id: EmployeeId,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL of the REST API (overrides config)
    #[arg(short = 'u', long)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_employee_id(s: &str) -> Result<EmployeeId, String> {
    s.parse::<EmployeeId>().map_err(|e| e.to_string())
}
