use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "td", about = concat!("[x] td v", env!("CARGO_PKG_VERSION"), " - a to-do list in your terminal"), version)]
pub struct Cli {
    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// Use a different storage file
    #[arg(short = 'f', long = "storage", value_name = "PATH")]
    pub storage: Option<PathBuf>,
}
