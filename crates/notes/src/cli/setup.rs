use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "notes",
    bin_name = "notes",
    version,
    disable_help_subcommand = true
)]
#[command(about = "A small REST API for managing text notes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Address to bind (overrides config)
    #[arg(long, global = true, help_heading = "Options")]
    pub host: Option<String>,

    /// Port to bind (overrides config)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub port: Option<u16>,

    /// JSON file to persist notes to (overrides config)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub data_file: Option<PathBuf>,

    /// Extra directory to search for notes.toml
    #[arg(long, global = true, help_heading = "Options")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Print the resolved configuration and exit
    Config,
}
