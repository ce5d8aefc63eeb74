//! # Dump Demo
//!
//! Builds a small in-memory scene and exports it to a `.dump` file.
//!
//! ```text
//! dump_demo --out ./export
//! dump_demo --out ./export --select Dome --config export.toml
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use assetdump_core::dump::{ExportSettings, FileSystemSink, export_selection};
use assetdump_demos::demo_scene;
use clap::Parser;

/// Export the demo scene.
#[derive(Parser, Debug)]
#[command(name = "dump_demo", about = "Export the assetdump demo scene", version)]
struct Args {
    /// Output directory for the dump file.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Export settings TOML file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Select an object by name (repeatable). Exports every mesh if omitted.
    #[arg(long)]
    select: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    assetdump_core::profiling::init();
    assetdump_core::init();

    let args = Args::parse();
    log::debug!("{args:?}");

    let settings = match &args.config {
        Some(path) => match ExportSettings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => ExportSettings::default(),
    };

    let scene = demo_scene(&args.select);
    let sink = FileSystemSink::new(&args.out);
    match export_selection(&scene, &sink, &settings) {
        Ok(Some(file)) => {
            log::info!("wrote {}", sink.root().join(&file.name).display());
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("export failed: {e}");
            ExitCode::FAILURE
        }
    }
}
