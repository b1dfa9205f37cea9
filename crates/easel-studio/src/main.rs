use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use winit::dpi::LogicalSize;

use easel_engine::device::GpuInit;
use easel_engine::logging::{LoggingConfig, init_logging};
use easel_engine::window::{Runtime, RuntimeConfig};

mod app;
mod keymap;
mod script;
mod session;

use app::StudioApp;
use session::Session;

#[derive(Parser, Debug)]
#[command(name = "easel")]
#[command(about = "Interactive 2D scene editor driven by a small command language", long_about = None)]
#[command(version)]
struct Args {
    /// Command scripts to run in order. Reads stdin when none are given.
    scripts: Vec<PathBuf>,

    /// Window title
    #[arg(long, default_value = "easel")]
    title: String,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 640.0)]
    width: f64,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 480.0)]
    height: f64,

    /// Log filter in env_logger syntax (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,

    /// Run the scripts and print the shape listing without opening a window
    #[arg(long)]
    no_window: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..LoggingConfig::default()
    });

    let mut session = Session::new();
    let mut failures = 0;
    if args.scripts.is_empty() {
        failures += script::run_reader(&mut session, "-", io::stdin().lock())?;
    } else {
        for path in &args.scripts {
            failures += script::run_file(&mut session, path)?;
        }
    }
    if failures > 0 {
        log::warn!("{failures} command(s) failed");
    }

    if args.no_window {
        session.print_listing();
    } else {
        let config = RuntimeConfig {
            title: args.title,
            initial_size: LogicalSize::new(args.width, args.height),
        };
        Runtime::run(config, GpuInit::default(), StudioApp::new(session))?;
    }

    Ok(if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
