// src/bin/cli.rs
use std::io;

use author_graph::{
    Universe, cli::Session, config::options::UniverseOptions, core::HttpFetcher, log,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = log::init() {
        eprintln!("Warning: debug log disabled: {e}");
    }

    let universe = Universe::new(UniverseOptions::default(), Box::new(HttpFetcher::new()?));
    let mut session = Session::new(universe, io::stdin().lock(), io::stdout());
    session.start()?;
    session.run()?;
    Ok(())
}
