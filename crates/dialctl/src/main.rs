mod config;
mod script;

use crate::config::{Dial, DialKind};
use clap::{Parser, Subcommand};
use rotor::{HitArea, Label};
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dialctl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read dials from this file instead of the user config
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// List the configured dials
    List,
    /// Print the resting rotation for a value (range) or label (selector)
    Angle {
        dial: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Print the value or label a rotation settles on
    Resolve {
        dial: String,
        #[arg(allow_hyphen_values = true)]
        angle: f64,
    },
    /// Replay an event script through a dial, one outcome per line
    Replay {
        dial: String,

        /// Starting value or label (defaults to the minimum / first label)
        #[arg(short = 'v', long, allow_hyphen_values = true)]
        value: Option<String>,

        /// Script file (defaults to stdin)
        #[arg(short = 's', long)]
        script: Option<PathBuf>,

        /// Dead zone around the center, as a fraction of the dial radius
        #[arg(long, default_value_t = 0.0)]
        dead_zone: f64,
    },
    /// Write the default config file if there is none
    Init,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    run(Cli::parse())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let load = || config::load_config(cli.config.as_deref());

    match cli.command {
        Commands::Init => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
        }
        Commands::List => {
            for dial in &load()?.dials {
                println!("{:<12} {:<9} {}", dial.name, dial.kind, describe(&dial.kind));
            }
        }
        Commands::Angle { dial, value } => match load()?.dial(&dial)? {
            Dial::Range(rotary) => {
                let value = parse_value(&value)?;
                println!("{:.1}", rotary.angle_for_value(value));
            }
            Dial::Selector(rotary) => {
                println!("{:.1}", rotary.rotation_for_label(&Label::from(value))?);
            }
        },
        Commands::Resolve { dial, angle } => match load()?.dial(&dial)? {
            Dial::Range(rotary) => {
                let precision = precision(rotary.config().step);
                println!("{:.*}", precision, rotary.value_for_angle(angle));
            }
            Dial::Selector(rotary) => println!("{}", rotary.label_for_rotation(angle)),
        },
        Commands::Replay {
            dial,
            value,
            script,
            dead_zone,
        } => {
            let dial = load()?.dial(&dial)?;
            let reader: Box<dyn BufRead> = match &script {
                Some(path) => Box::new(BufReader::new(fs_err::File::open(path)?)),
                None => Box::new(io::stdin().lock()),
            };
            let hit_area = HitArea {
                inner_ratio: dead_zone,
            };
            replay_dial(dial, value, hit_area, reader)?;
        }
    }
    Ok(())
}

fn replay_dial(
    dial: Dial,
    value: Option<String>,
    hit_area: HitArea,
    reader: Box<dyn BufRead>,
) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    match dial {
        Dial::Range(rotary) => {
            let start = match value {
                Some(v) => parse_value(&v)?,
                None => rotary.config().min,
            };
            let start = rotary.quantize(start);
            let precision = precision(rotary.config().step);
            let last = script::replay(rotary, start, hit_area, reader, &mut out, |v| {
                format!("{v:.precision$}")
            })?;
            log::info!("final value {last:.precision$}");
        }
        Dial::Selector(rotary) => {
            let start = match value {
                Some(v) => rotary.apply_direct_select(&Label::from(v))?,
                None => rotary.labels()[0].clone(),
            };
            let last = script::replay(rotary, start, hit_area, reader, &mut out, |v| {
                v.to_string()
            })?;
            log::info!("final label {last}");
        }
    }
    Ok(())
}

fn parse_value(value: &str) -> anyhow::Result<f64> {
    value
        .parse::<f64>()
        .map_err(|e| anyhow::anyhow!("'{}' is not a number: {}", value, e))
}

/// Decimal places needed to show multiples of `step`.
fn precision(step: f64) -> usize {
    (0..6)
        .find(|&places| {
            let scaled = step * 10f64.powi(places as i32);
            (scaled - scaled.round()).abs() < 1e-9
        })
        .unwrap_or(6)
}

fn describe(kind: &DialKind) -> String {
    match kind {
        DialKind::Range(range) => format!(
            "{}..{} step {} over {}° from {}°",
            range.min, range.max, range.step, range.sweep_degrees, range.start_angle_degrees
        ),
        DialKind::Selector(selection) => selection
            .labels
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join(" / "),
    }
}
