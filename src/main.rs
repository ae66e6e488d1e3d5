use clap::Parser;
use todo::cli::Cli;
use todo::io::config_io;
use todo::menu;
use todo::ops::TaskStore;

fn main() {
    let cli = Cli::parse();
    let config = config_io::read_config();

    if !cli.no_banner && config.ui.banner {
        println!("{}", menu::banner());
    }

    let path = cli.storage.unwrap_or(config.storage.file);
    let mut store = TaskStore::open(path);
    if let Err(e) = menu::run(&mut store) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
