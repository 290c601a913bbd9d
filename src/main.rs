use clap::Parser;
use std::env;
use tracing::{debug, error};

use repohop::cli::CliArgs;
use repohop::config::{self, Config};
use repohop::scan::{RepoDetector, RepoScanner};
use repohop::select::Selector;
use repohop::shell;
use repohop::status::Status;
use repohop::ui;

fn main() {
    // Initialize tracing with env filter; diagnostics go to stderr so they
    // never mix into the prompts on stdout
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let status = Status::new();
    let code = match run(&status) {
        Ok(shell_code) => shell_code,
        Err(err) => {
            error!("Fatal: {:#}", err);
            eprintln!("Error: {:#}", err);
            1
        }
    };
    std::process::exit(status.exit_code(code));
}

fn run(status: &Status) -> repohop::Result<i32> {
    let args = CliArgs::parse();
    let config = Config::from_cli_and_file(&args)?;

    let env_roots = env::var(config::REPOHOP_PATH_ENV).ok();
    let roots = config::search_roots(&args.dirs, env_roots.as_deref(), &config);
    debug!("Search roots {:?}, max depth {}", roots, config.max_depth);

    let picker = ui::picker_for(args.picker);
    let scanner = RepoScanner::new(RepoDetector::new(), status);
    let selector = Selector::new(scanner, picker.as_ref());

    let base_dir = selector.select_base_dir(&roots)?;
    let target = selector.select_target(&base_dir, config.max_depth)?;
    debug!("Opening shell in {}", target.display());

    shell::run_in(&target, &shell::shell_executable())
}
