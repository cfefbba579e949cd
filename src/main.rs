use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use songline::{load_checked, load_config, load_timeline, LayoutConfig, TimelineLayout};

/// Lay out a song timeline on the beat axis and print the result as JSON
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Timeline file (JSON or YAML)
    #[arg(value_name = "TIMELINE")]
    input: PathBuf,

    /// Write the layout here instead of stdout
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Skip tempo/section/chord validation
    #[arg(long)]
    no_validate: bool,

    /// Layout config overriding the default constants (JSON or YAML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env().filter_level(level).init();

    let config = match &args.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Config error: {}", e);
                process::exit(1);
            }
        },
        None => LayoutConfig::default(),
    };

    let result = if args.no_validate {
        load_timeline(&args.input)
    } else {
        load_checked(&args.input)
    };

    let timeline = match result {
        Ok(timeline) => timeline,
        Err(e) => {
            eprintln!("Timeline error: {}", e);
            process::exit(1);
        }
    };

    let layout = TimelineLayout::build(&timeline, &config);
    log::info!(
        "{} sections, {} chords, {} lyrics at {} BPM; grid ends at beat {}",
        timeline.sections.len(),
        timeline.chords.len(),
        timeline.lyrics.len(),
        layout.bpm,
        layout.last_occupied_beat
    );

    let json = match serde_json::to_string_pretty(&layout) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Could not serialize layout: {}", e);
            process::exit(1);
        }
    };

    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                eprintln!("Error writing to '{}': {}", path.display(), e);
                process::exit(1);
            }
            eprintln!("Wrote layout to {}", path.display());
        }
        None => {
            println!("{}", json);
        }
    }
}
