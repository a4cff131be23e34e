use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "xout", version)]
#[command(about = "Overwrite byte patterns in files with x's, length preserved")]
pub struct Cli {
    /// Files to clean
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Patterns to substitute with x's
    #[arg(short = 'x', long = "x-out", required = true, num_args = 1..)]
    pub x_out: Vec<String>,
}
