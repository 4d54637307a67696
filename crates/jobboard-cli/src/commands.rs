use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::logging::init_logging;
use anyhow::{Context, Result};
use jobboard_runtime::{Config, JobBoard, resolve_data_dir};
use std::future::Future;
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level)?;

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let config_path = Config::path_in(&data_dir);
    let config = effective_config(&config_path, cli.source.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&config);
        return Ok(());
    };

    match command {
        Commands::Feed { batches, all } => {
            let board = JobBoard::new(config);
            block_on(handlers::feed::handle(&board, batches, all, cli.format))
        }

        Commands::List { page } => {
            let board = JobBoard::new(config);
            block_on(handlers::list::handle(&board, page, cli.format))
        }

        Commands::Show { timestamp } => {
            let board = JobBoard::new(config);
            block_on(handlers::show::handle(&board, &timestamp, cli.format))
        }

        Commands::Import { input, output } => handlers::import::handle(&input, &output),

        Commands::CheckLinks {
            input,
            output,
            dry_run,
            timeout,
            pause_ms,
        } => {
            let options = handlers::check_links::CheckLinksArgs {
                input,
                output,
                dry_run,
                timeout_secs: timeout,
                pause_ms,
            };
            block_on(handlers::check_links::handle(options))
        }

        Commands::Config { command } => match command {
            ConfigCommand::Init { force } => handlers::config::init(&config_path, force),
            ConfigCommand::Show => handlers::config::show(&config, &config_path, cli.format),
        },
    }
}

/// Config file, then environment, then `--source`.
fn effective_config(config_path: &Path, source: Option<&str>) -> Result<Config> {
    let mut config = Config::load_from(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    config.apply_env_overrides()?;
    if let Some(source) = source {
        config.source = source.to_string();
    }
    Ok(config)
}

/// One cooperative thread: the fetch and the load-more delay are the only
/// suspension points.
fn block_on<F: Future<Output = Result<()>>>(future: F) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(future)
}

fn show_guidance(config: &Config) {
    println!("jobboard - browse the job listing feed");
    println!();
    println!("Source: {}", config.source);
    println!();
    println!("Try:");
    println!("  jobboard feed              newest postings");
    println!("  jobboard list --page 2     paged listing");
    println!("  jobboard show <timestamp>  a single posting");
    println!();
    println!("Run 'jobboard --help' for all commands.");
}
