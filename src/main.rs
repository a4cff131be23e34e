use clap::Parser;
use tracing::info;

use xout::cli::Cli;
use xout::files;
use xout::logger;
use xout::redactor::Redactor;

fn main() {
    logger::init();
    let cli = Cli::parse();

    let redactor = Redactor::new(&cli.x_out);
    let summary = files::clean_all(&cli.files, &redactor);
    info!("cleaned {} file(s), {} failed", summary.cleaned, summary.failed);
}
