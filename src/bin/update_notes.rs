use clap::Parser;
use portfolio::{update_notes, UpdateNotesArgs};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = UpdateNotesArgs::parse();

    match update_notes(&args.source_dir, &args.output) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
