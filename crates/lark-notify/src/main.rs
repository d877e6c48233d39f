use std::io;

use clap::Parser;
use tokio::runtime::Builder;
use tracing_subscriber::EnvFilter;

use lark_notify::cli::{Cli, Commands};
use lark_notify::env::Environment;
use lark_notify::orchestrator::run;
use lark_notify::sink::HttpSink;

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("lark_notify=info")),
        1 => EnvFilter::new("lark_notify=debug"),
        _ => EnvFilter::new("lark_notify=trace,reqwest=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or(Commands::Send) {
        Commands::Send => {
            // Snapshot before anything else reads the environment.
            let env = Environment::capture();
            let rt = Builder::new_current_thread().enable_all().build()?;
            let sink = HttpSink::new();
            let mut stdout = io::stdout().lock();
            rt.block_on(run(env, &sink, &mut stdout))?;
        }
        Commands::Version { json } => {
            if json {
                let info = serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION"),
                    "commit": option_env!("GIT_SHA").unwrap_or("unknown"),
                    "build_date": option_env!("BUILD_DATE").unwrap_or("unknown"),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "lark-notify {} (commit: {}, built: {})",
                    env!("CARGO_PKG_VERSION"),
                    option_env!("GIT_SHA").unwrap_or("unknown"),
                    option_env!("BUILD_DATE").unwrap_or("unknown"),
                );
            }
        }
    }
    Ok(())
}
