use std::env;
use std::fs;
use std::process;

use swara::{RecordingTarget, TickOutcome, Viewer, ViewerConfig};

const USAGE: &str = "Usage: swara <labels.csv> [--base KEY] [--at SECONDS] [--config viewer.yaml]";

struct Options {
    input_path: String,
    base: Option<String>,
    at: Option<f64>,
    config_path: Option<String>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut input_path = None;
    let mut base = None;
    let mut at = None;
    let mut config_path = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--base" => {
                base = Some(iter.next().ok_or("--base needs a key such as Ga1")?.clone());
            }
            "--at" => {
                let value = iter.next().ok_or("--at needs a time in seconds")?;
                at = Some(
                    value
                        .parse::<f64>()
                        .map_err(|_| format!("--at expects seconds, got '{}'", value))?,
                );
            }
            "--config" => {
                config_path = Some(iter.next().ok_or("--config needs a file path")?.clone());
            }
            other if input_path.is_none() => input_path = Some(other.to_string()),
            other => return Err(format!("Unexpected argument '{}'", other)),
        }
    }

    Ok(Options {
        input_path: input_path.ok_or("Missing label file")?,
        base,
        at,
        config_path,
    })
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    let config = match &options.config_path {
        Some(path) => {
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading config '{}': {}", path, e);
                    process::exit(1);
                }
            };
            match ViewerConfig::from_yaml(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("{}", e);
                    process::exit(1);
                }
            }
        }
        None => ViewerConfig::default(),
    };

    let source = match fs::read_to_string(&options.input_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", options.input_path, e);
            process::exit(1);
        }
    };

    let mut viewer = Viewer::new(RecordingTarget::state_only(), config);
    let report = match viewer.on_label_file_loaded(&source) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(1);
        }
    };
    for row in &report.skipped {
        eprintln!("Skipped line {}: {}", row.line, row.content);
    }

    if let Some(key) = &options.base {
        viewer.on_base_selection_changed(key);
    }
    if let Some(time) = options.at {
        if let TickOutcome::Playing { active: None, .. } = viewer.on_playback_tick(time) {
            eprintln!("No label covers {:.2}s", time);
        }
    }

    println!("Base: {}", viewer.base().key());
    let highlighted = viewer.target().highlighted();
    for item in viewer.target().items() {
        let marker = if Some(item.index) == highlighted { '>' } else { ' ' };
        println!(
            "{} {:>4}  {:<8} {:<8} {}",
            marker,
            item.index,
            item.text,
            item.original_text,
            item.tooltip()
        );
    }
}
