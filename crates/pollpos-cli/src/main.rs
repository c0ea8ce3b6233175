use pollpos::render::{ChartConfig, PollChartScene, Viewport, layout_poll_chart};
use pollpos::{PollSnapshot, decode_poll_rows, flatten_rankings};
use serde_json::Value;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Decode(pollpos::Error),
    Layout(pollpos_render::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Decode(err) => write!(f, "{err}"),
            CliError::Layout(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<pollpos::Error> for CliError {
    fn from(value: pollpos::Error) -> Self {
        Self::Decode(value)
    }
}

impl From<pollpos_render::Error> for CliError {
    fn from(value: pollpos_render::Error) -> Self {
        Self::Layout(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    /// Full scene JSON.
    #[default]
    Layout,
    /// Delta annotations only.
    Deltas,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    output: Option<String>,
    poll: Option<String>,
    width: Option<f64>,
    height: Option<f64>,
    pretty: bool,
}

const USAGE: &str = "Usage: pollpos-cli [layout|deltas] [options]\n\
  -i, --input <file|->    poll payload JSON (default: stdin)\n\
  -o, --output <file>     write JSON here instead of stdout\n\
  -p, --poll <name>       poll to keep (required for nested week-rankings payloads)\n\
      --width <px>        container width (default: 1200, capped by config)\n\
      --height <px>       explicit height (default: width x 0.65)\n\
      --pretty            pretty-print the JSON output";

fn parse_args() -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "layout" => args.command = Command::Layout,
            "deltas" => args.command = Command::Deltas,
            "-i" | "--input" => {
                args.input = Some(it.next().ok_or(CliError::Usage("--input needs a value"))?);
            }
            "-o" | "--output" => {
                args.output = Some(it.next().ok_or(CliError::Usage("--output needs a value"))?);
            }
            "-p" | "--poll" => {
                args.poll = Some(it.next().ok_or(CliError::Usage("--poll needs a value"))?);
            }
            "--width" => {
                let raw = it.next().ok_or(CliError::Usage("--width needs a value"))?;
                args.width = Some(raw.parse().map_err(|_| CliError::Usage("--width must be a number"))?);
            }
            "--height" => {
                let raw = it.next().ok_or(CliError::Usage("--height needs a value"))?;
                args.height = Some(raw.parse().map_err(|_| CliError::Usage("--height must be a number"))?);
            }
            "--pretty" => args.pretty = true,
            "-h" | "--help" => return Err(CliError::Usage(USAGE)),
            _ => return Err(CliError::Usage(USAGE)),
        }
    }
    Ok(args)
}

fn read_payload(input: Option<&str>) -> Result<Value, CliError> {
    let text = match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)?,
    };
    Ok(serde_json::from_str(&text)?)
}

/// Nested payloads have `polls` arrays inside week entries; flat payloads are
/// poll-row objects directly.
fn looks_nested(payload: &Value) -> bool {
    payload
        .as_array()
        .and_then(|items| items.first())
        .and_then(Value::as_object)
        .is_some_and(|obj| obj.contains_key("polls"))
}

fn run() -> Result<(), CliError> {
    let args = parse_args()?;
    let payload = read_payload(args.input.as_deref())?;

    let rows = if looks_nested(&payload) {
        let Some(poll) = args.poll.as_deref() else {
            return Err(CliError::Usage("--poll is required for nested week-rankings payloads"));
        };
        flatten_rankings(&payload, poll)?
    } else {
        let mut rows = decode_poll_rows(&payload)?;
        if let Some(poll) = args.poll.as_deref() {
            rows.retain(|r| r.poll == poll);
        }
        rows
    };

    let config = ChartConfig::default();
    let viewport = match (args.width, args.height) {
        (Some(w), Some(h)) => Viewport::new(w, h),
        (w, None) => Viewport::from_container_width(w.unwrap_or(config.max_width), &config),
        (None, Some(h)) => Viewport::new(config.max_width, h),
    };

    let snapshot = PollSnapshot::new(rows);
    let scene: PollChartScene = layout_poll_chart(&snapshot, &viewport, &config)?;

    let json = match args.command {
        Command::Layout => {
            if args.pretty {
                serde_json::to_string_pretty(&scene)?
            } else {
                serde_json::to_string(&scene)?
            }
        }
        Command::Deltas => {
            if args.pretty {
                serde_json::to_string_pretty(&scene.delta_labels)?
            } else {
                serde_json::to_string(&scene.delta_labels)?
            }
        }
    };

    match args.output.as_deref() {
        None | Some("-") => println!("{json}"),
        Some(path) => std::fs::write(path, json)?,
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
