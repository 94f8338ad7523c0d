use crate::core::{render, Measurement, UnitSystem};
use crate::frontend::config::{Config, OutputFormat};
use crate::infrastructure::{init_cli_logging, init_file_logging};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Scale { measurement: Measurement, multiplier: f64 },
    Convert { measurement: Measurement },
    Demo,
    InitConfig { path: PathBuf },
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub command: Command,
    pub json: bool,
    pub precision: Option<usize>,
    pub config_path: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub verbose: bool,
    pub no_color: bool,
}

impl CliConfig {
    fn new(command: Command) -> Self {
        Self {
            command,
            json: false,
            precision: None,
            config_path: None,
            log_dir: None,
            verbose: false,
            no_color: false,
        }
    }
}

/// One computed line of output
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub operation: &'static str,
    pub input: Measurement,
    pub result: Measurement,
    pub rendered: String,
}

pub struct Cli {
    config: CliConfig,
    settings: Config,
}

impl Cli {
    pub fn new(config: CliConfig, settings: Config) -> Self {
        Self { config, settings }
    }

    fn precision(&self) -> usize {
        self.config.precision.unwrap_or(self.settings.display.precision)
    }

    fn format(&self) -> OutputFormat {
        if self.config.json {
            OutputFormat::Json
        } else {
            self.settings.display.format
        }
    }

    /// Colors apply to text output only, and `--no-color` wins over the config.
    fn color(&self) -> bool {
        self.settings.display.color && !self.config.no_color && self.format() == OutputFormat::Text
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.color() {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    }

    pub fn paint_error(&self, message: &str) -> String {
        self.paint(message, RED)
    }

    /// Run the command and return the text to print on stdout.
    pub fn run(&self) -> Result<String, String> {
        let outcomes = match &self.config.command {
            Command::Help => return Ok(usage("heightwise")),
            Command::InitConfig { path } => {
                if path.exists() {
                    return Err(format!("Refusing to overwrite {}", path.display()));
                }
                Config::default().save(path)?;
                info!(path = %path.display(), "Wrote default config");
                return Ok(format!("Wrote {}", path.display()));
            }
            Command::Scale { measurement, multiplier } => {
                vec![self.outcome("scale", *measurement, measurement.scale(*multiplier))]
            }
            Command::Convert { measurement } => {
                let converted = measurement.convert().map_err(|e| e.to_string())?;
                vec![self.outcome("convert", *measurement, converted)]
            }
            Command::Demo => demo_inputs()
                .into_iter()
                .map(|(measurement, multiplier)| {
                    self.outcome("scale", measurement, measurement.scale(multiplier))
                })
                .collect(),
        };

        debug!(count = outcomes.len(), "Computed results");
        self.print(&outcomes)
    }

    fn outcome(&self, operation: &'static str, input: Measurement, result: Measurement) -> Outcome {
        Outcome {
            operation,
            input,
            result,
            rendered: render(&result, self.precision()),
        }
    }

    fn print(&self, outcomes: &[Outcome]) -> Result<String, String> {
        match self.format() {
            OutputFormat::Text => Ok(outcomes
                .iter()
                .map(|o| self.paint(&o.rendered, GREEN))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => serde_json::to_string_pretty(outcomes)
                .map_err(|e| format!("Failed to serialize output: {}", e)),
        }
    }
}

/// 2.60m doubled and 3'5" tripled.
fn demo_inputs() -> [(Measurement, f64); 2] {
    [
        (Measurement::metric(2.0, 60.0), 2.0),
        (Measurement::imperial(3.0, 5.0), 3.0),
    ]
}

pub fn usage(prog: &str) -> String {
    format!(
        "heightwise - compound unit arithmetic\n\n\
        USAGE:\n    \
        {prog} [OPTIONS] scale <imperial|metric> <major> <minor> <multiplier>\n    \
        {prog} [OPTIONS] convert <imperial|metric> <major> <minor>\n    \
        {prog} [OPTIONS] demo\n    \
        {prog} init-config [path]\n\n\
        OPTIONS:\n    \
        -h, --help        Print help information\n    \
        --json            Emit JSON instead of text\n    \
        --precision N     Decimal places in rendered output\n    \
        --config PATH     Read settings from PATH instead of discovering .heightwiserc\n    \
        --verbose         Debug logging\n    \
        --log-dir DIR     Write JSON logs to a daily file in DIR instead of stderr\n    \
        --no-color        Disable colored output\n\n\
        EXAMPLES:\n    \
        {prog} scale metric 2 60 2\n    \
        {prog} convert imperial 5 10",
    )
}

pub fn parse_args() -> Result<CliConfig, String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    parse_args_from(&args)
}

/// Parse arguments, excluding the program name.
pub fn parse_args_from(args: &[String]) -> Result<CliConfig, String> {
    let mut json = false;
    let mut verbose = false;
    let mut no_color = false;
    let mut log_dir = None;
    let mut precision = None;
    let mut config_path = None;
    let mut positional: Vec<&str> = Vec::new();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(CliConfig::new(Command::Help)),
            "--json" => json = true,
            "--verbose" | "-v" => verbose = true,
            "--no-color" => no_color = true,
            "--precision" => {
                i += 1;
                let value = args.get(i).ok_or("--precision requires an argument")?;
                precision = Some(value.parse::<usize>()
                    .map_err(|_| format!("Invalid value for --precision: {}", value))?);
            }
            "--config" => {
                i += 1;
                let value = args.get(i).ok_or("--config requires an argument")?;
                config_path = Some(PathBuf::from(value));
            }
            "--log-dir" => {
                i += 1;
                let value = args.get(i).ok_or("--log-dir requires an argument")?;
                log_dir = Some(PathBuf::from(value));
            }
            arg if arg.starts_with("--") => {
                return Err(format!("Unknown option: {}", arg));
            }
            arg => positional.push(arg),
        }
        i += 1;
    }

    let command = match positional.split_first() {
        None => return Err("No command specified".to_string()),
        Some((&"scale", rest)) => {
            let [system, major, minor, multiplier] = expect_args::<4>("scale", rest)?;
            Command::Scale {
                measurement: parse_measurement(system, major, minor)?,
                multiplier: parse_number("multiplier", multiplier)?,
            }
        }
        Some((&"convert", rest)) => {
            let [system, major, minor] = expect_args::<3>("convert", rest)?;
            Command::Convert { measurement: parse_measurement(system, major, minor)? }
        }
        Some((&"demo", rest)) => {
            let [] = expect_args::<0>("demo", rest)?;
            Command::Demo
        }
        Some((&"init-config", rest)) => match rest {
            [] => Command::InitConfig { path: PathBuf::from(".heightwiserc") },
            [path] => Command::InitConfig { path: PathBuf::from(*path) },
            _ => return Err("init-config takes at most one path".to_string()),
        },
        Some((other, _)) => return Err(format!("Unknown command: {}", other)),
    };

    Ok(CliConfig { command, json, precision, config_path, log_dir, verbose, no_color })
}

fn expect_args<'a, const N: usize>(command: &str, rest: &[&'a str]) -> Result<[&'a str; N], String> {
    <[&str; N]>::try_from(rest)
        .map_err(|_| format!("{} expects {} argument(s), got {}", command, N, rest.len()))
}

fn parse_measurement(system: &str, major: &str, minor: &str) -> Result<Measurement, String> {
    let system: UnitSystem = system.parse()?;
    Ok(Measurement::new(
        system,
        parse_number(system.major_name(), major)?,
        parse_number(system.minor_name(), minor)?,
    ))
}

fn parse_number(name: &str, value: &str) -> Result<f64, String> {
    value.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("Invalid number for {}: {}", name, value))
}

/// Entry point for CLI binary
pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args()?;

    let (settings, discovery_error) = match &config.config_path {
        Some(path) => (Config::load(path)?, None),
        None => match Config::discover() {
            Ok(settings) => (settings, None),
            Err(e) => (Config::default(), Some(e)),
        },
    };

    let _guard = match &config.log_dir {
        Some(dir) => init_file_logging(dir, config.verbose),
        None => init_cli_logging(&settings.logging, config.verbose),
    };
    debug!(command = ?config.command, "Parsed arguments");

    if let Some(error) = &discovery_error {
        eprintln!("warning: ignoring config: {}", error);
        debug!(error = %error, "Using default settings");
    }

    let cli = Cli::new(config, settings);
    let output = cli.run().map_err(|e| cli.paint_error(&e))?;
    println!("{}", output);
    Ok(())
}
