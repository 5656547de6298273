use std::path::PathBuf;

use anyhow::Result;

use treetop::commands::{self, monitor};

fn main() -> Result<()> {
    let matches = commands::build_cli().get_matches();

    let log_file = matches.get_one::<PathBuf>("log-file");
    treetop::init_logging(log_file.map(PathBuf::as_path))?;

    monitor::execute(&matches)
}
