use anyhow::Result;
use clap::Parser;

use new_release_version::cli::{orchestration, Args};
use new_release_version::{logging, ui};

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logger(args.debug);

    if args.version {
        println!("{}", ui::tool_version());
        return Ok(());
    }

    let version = match orchestration::run(&args) {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&format!("failed to get new version: {:#}", e));
            std::process::exit(1);
        }
    };

    ui::display_version(&version)?;
    Ok(())
}
