use clap::Parser;
use portfolio::{build_site, SiteArgs};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = SiteArgs::parse();

    match build_site(&args.site_dir, &args.output_dir, &args.templates_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
