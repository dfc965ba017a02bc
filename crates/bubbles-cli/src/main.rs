use bubbles::{Chart, ChartConfig, Mode, NullRender, Scene, SvgOptions, render_svg};
use futures::executor::block_on;
use serde::Serialize;
use std::time::Duration;
use tracing_subscriber::prelude::*;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Chart(bubbles::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Chart(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<bubbles::Error> for CliError {
    fn from(value: bubbles::Error) -> Self {
        Self::Chart(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Check,
    Layout,
    Render,
}

#[derive(Debug)]
struct Args {
    command: Command,
    input: Option<String>,
    mode: Mode,
    seed: Option<u64>,
    max_ticks: usize,
    config: Option<String>,
    pretty: bool,
    out: Option<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            command: Command::Check,
            input: None,
            mode: Mode::Default,
            seed: None,
            max_ticks: 10_000,
            config: None,
            pretty: false,
            out: None,
        }
    }
}

#[derive(Serialize)]
struct NodeOut<'a> {
    id: &'a str,
    x: f64,
    y: f64,
    radius: f64,
}

#[derive(Serialize)]
struct LayoutOut<'a> {
    mode: &'static str,
    ticks: usize,
    converged: bool,
    nodes: Vec<NodeOut<'a>>,
}

fn usage() -> &'static str {
    "bubbles-cli\n\
\n\
USAGE:\n\
  bubbles-cli check  [--config <path>] <csv>\n\
  bubbles-cli layout [--mode <trigger>] [--seed <n>] [--max-ticks <n>] [--config <path>] [--pretty] <csv>\n\
  bubbles-cli render [--mode <trigger>] [--seed <n>] [--max-ticks <n>] [--config <path>] [--out <path>] <csv>\n\
\n\
NOTES:\n\
  - <trigger> is one of: all, soutien, elu, ministre, media.\n\
  - --config reads JSON, or YAML when the file ends in .yaml/.yml.\n\
  - layout prints the settled positions as JSON.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - Set RUST_LOG (e.g. RUST_LOG=debug) to see progress on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "check" => args.command = Command::Check,
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "--pretty" => args.pretty = true,
            "--mode" => {
                let Some(trigger) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.mode =
                    Mode::from_trigger_strict(trigger).map_err(|_| CliError::Usage(usage()))?;
            }
            "--seed" => {
                let Some(seed) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.seed = Some(seed.parse::<u64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--max-ticks" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.max_ticks = n.parse::<usize>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if args.input.is_none() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn load_config(args: &Args) -> Result<ChartConfig, CliError> {
    let mut config = match args.config.as_deref() {
        Some(path) => ChartConfig::from_path(path).map_err(bubbles::Error::from)?,
        None => ChartConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let Some(input) = args.input.as_deref() else {
        return Err(CliError::Usage(usage()));
    };
    let config = load_config(&args)?;
    let records = block_on(bubbles::load_dataset(input))?;

    match args.command {
        Command::Check => {
            let chart = Chart::new(&records, &config, NullRender)?;
            let nodes = chart.nodes();
            let (min, max) = nodes
                .iter()
                .map(|n| n.radius())
                .fold((f64::INFINITY, 0.0_f64), |(lo, hi), r| (lo.min(r), hi.max(r)));
            println!("{} bubbles, radius {min:.2}..{max:.2}", nodes.len());
            for layout in chart.catalog().layouts() {
                let buckets: Vec<String> = layout
                    .anchors
                    .keys()
                    .map(|key| {
                        let count = nodes
                            .iter()
                            .filter(|n| n.category(layout.attribute) == key.as_str())
                            .count();
                        format!("{key} {count}")
                    })
                    .collect();
                println!("{}: {}", layout.mode, buckets.join(", "));
            }
            Ok(())
        }
        Command::Layout => {
            let mut chart = Chart::new(&records, &config, NullRender)?;
            chart.apply_mode(args.mode)?;
            let ticks = chart.run_to_convergence(args.max_ticks);
            let out = LayoutOut {
                mode: args.mode.trigger(),
                ticks,
                converged: !chart.is_running(),
                nodes: chart
                    .nodes()
                    .iter()
                    .map(|n| NodeOut {
                        id: n.id(),
                        x: n.x(),
                        y: n.y(),
                        radius: n.radius(),
                    })
                    .collect(),
            };
            write_json(&out, args.pretty)
        }
        Command::Render => {
            let scene = Scene::new(
                config.width,
                config.height,
                Duration::from_millis(config.grow_in_ms),
            );
            let mut chart = Chart::new(&records, &config, scene)?;
            chart.apply_mode(args.mode)?;
            let ticks = chart.run_to_convergence(args.max_ticks);
            tracing::info!(mode = %args.mode, ticks, "rendering snapshot");
            let svg = render_svg(chart.render(), &SvgOptions::default());
            write_text(&svg, args.out.as_deref())
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
