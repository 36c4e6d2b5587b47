//! Example: Inspect a StepMania chart
//!
//! Prints the metadata and levels of a `.sm` file, renders its parse diagnostics,
//! and optionally dumps the arrow plan of a level as JSON.
//!
//! ```sh
//! cargo run --example sm_info -- path/to/song.sm --level 1 --json
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;
use log::{LevelFilter, info, warn};
use sm_rs::{
    chart_process::prelude::*,
    diagnostics::{SimpleSource, ToAriadne, emit_chart_warnings},
    sm::prelude::*,
};

/// Configuration parameters
#[derive(Parser, Debug)]
#[command(name = "sm_info")]
#[command(about = "Inspect a StepMania chart", long_about = None)]
struct Config {
    /// Chart file path
    #[arg(value_name = "FILE")]
    chart_path: PathBuf,

    /// Text encoding label, used unless the file starts with a BOM
    #[arg(short, long, default_value = "utf-8", value_name = "LABEL")]
    encoding: String,

    /// Level index to lay out
    #[arg(short, long, default_value = "0")]
    level: usize,

    /// Playfield configuration in JSON, overriding the defaults
    #[arg(short, long, value_name = "FILE")]
    playfield: Option<PathBuf>,

    /// Print the arrow plan as JSON
    #[arg(long)]
    json: bool,
}

/// Reads the file and decodes it with the BOM encoding or `label`.
fn read_text(path: &Path, label: &str) -> Result<String, String> {
    let bytes = std::fs::read(path).map_err(|e| format!("Failed to read file: {e}"))?;
    let encoding = encoding_rs::Encoding::for_label(label.as_bytes())
        .ok_or_else(|| format!("Unknown encoding: {label}"))?;
    let (text, used, had_errors) = encoding.decode(&bytes);
    if had_errors {
        warn!("{} contains bytes invalid in {}", path.display(), used.name());
    }
    Ok(text.into_owned())
}

fn load_playfield(path: Option<&Path>) -> Result<PlayfieldConfig, String> {
    let Some(path) = path else {
        return Ok(PlayfieldConfig::default());
    };
    let text = std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {e}"))?;
    serde_json::from_str(&text).map_err(|e| format!("Invalid playfield: {e}"))
}

fn print_chart(chart: &Chart) {
    println!("Title:  {}", chart.title);
    println!("Artist: {}", chart.artist);
    println!("Offset: {}s", chart.offset);
    println!("BPMs:   {}", chart.bpms_display());
    match get_bpm(chart) {
        Ok(bpm) => {
            let clock = ScrollClock::new(bpm, &PlayfieldConfig::default());
            println!("Scroll: {} per second", clock.height_per_second());
        }
        Err(e) => println!("Scroll: {e}"),
    }
    println!("Levels:");
    for (index, level) in chart.levels.iter().enumerate() {
        let rows: usize = level.rows_per_measure().sum();
        println!(
            "  [{index}] {} {}: {} measures, {rows} rows",
            level.level_type,
            level.difficulty,
            level.notes.len()
        );
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .filter_module("sm_rs", LevelFilter::Debug)
        .init();
    let config = Config::parse();
    let name = config.chart_path.display().to_string();
    let source = read_text(&config.chart_path, &config.encoding)?;
    let playfield = load_playfield(config.playfield.as_deref())?;

    let output = match parse_chart(&source) {
        Ok(output) => output,
        Err(e) => {
            let report = e.to_report(&SimpleSource::new(&name, &source));
            let _ = report.eprint((name.clone(), ariadne::Source::from(source.as_str())));
            return Err(format!("Parse error: {e}"));
        }
    };
    emit_chart_warnings(&name, &source, &output.warnings);
    let chart = output.chart.ok_or("Parsed no song")?;
    info!("parsed {name} with {} warnings", output.warnings.len());

    print_chart(&chart);

    let plan = plan_arrows(&chart, config.level, &playfield)
        .map_err(|e| format!("{e} ({:?})", e.kind()))?;
    if config.json {
        let json = serde_json::to_string_pretty(&plan).map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        println!("Level {} has {} arrows", config.level, plan.len());
    }
    Ok(())
}
