use std::time::Instant;

use clap::Parser;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[cfg(target_env = "msvc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use impviz::ImpvizOptions;
use impviz::run_main;
use impviz_error::Result;

#[derive(Parser, Debug)]
#[command(
    name = "impviz",
    about = "impviz: draw a readable import diagram for a Python project",
    version
)]
pub struct Cli {
    /// Root module or package to analyze; must resolve to a path relative
    /// to the current directory and be importable by pydeps
    #[arg(value_name = "MODULE")]
    module: String,
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = ImpvizOptions {
        module: args.module,
    };

    match run_main(&opts) {
        Ok(written) => {
            tracing::info!(path = %written.display(), "diagram written");
        }
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            return Err(e);
        }
    }

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
