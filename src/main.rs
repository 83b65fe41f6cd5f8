use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use raven_deploy::config;
use raven_deploy::exec::{CommandRunner, DryRunRunner, ShellRunner};
use raven_deploy::files::FsStore;
use raven_deploy::ui::{self, TerminalPrompter};
use raven_deploy::workflow;

#[derive(clap::Parser)]
#[command(
    name = "raven-deploy",
    about = "Bump, build, tag and publish a release step by step"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Print commands instead of running them")]
    dry_run: bool,

    #[arg(short, long, help = "Enable debug logging")]
    debug: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("raven_deploy")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("raven-deploy {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    initialize_logger(args.debug)?;

    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };
    if args.dry_run {
        config.behavior.dry_run = true;
    }

    let root = std::env::current_dir()?;
    let store = FsStore::new(&root);
    let prompter = TerminalPrompter::new();
    let runner: Box<dyn CommandRunner> = if config.behavior.dry_run {
        log::info!("dry run: commands will be printed, not executed");
        Box::new(DryRunRunner)
    } else {
        Box::new(ShellRunner::new(&root))
    };

    let result = workflow::run_release(&config, &prompter, &store, runner.as_ref());
    match &result {
        Ok(summary) => ui::display_complete(&config.project_name, &summary.next),
        Err(e) => {
            log::error!("release aborted: {:?}", e);
            ui::display_error(&e.to_string());
        }
    }

    let code = workflow::exit_code(&result);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
