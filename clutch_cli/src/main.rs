//! # Clutchcalc CLI Application
//!
//! Terminal interface for multi-plate friction clutch calculations.
//!
//! ## Usage
//!
//! ```text
//! clutch_cli calc --friction 0.35 --surfaces 2 --outer-radius 0.12 --inner-radius 0.06 \
//!     --pressure 200000 --theory wear
//! clutch_cli calc --json            # full result as JSON (for LLM/API use)
//! clutch_cli interactive            # prompt for each value
//! clutch_cli equations              # print the equation reference
//! ```
//!
//! Logs go to stderr and are controlled with `RUST_LOG`.

mod render;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use clutch_core::equations::generate_equations_markdown;
use clutch_core::{calculate_with_settings, CalcError, ClutchInput, DesignSettings, Theory};

#[derive(Parser, Debug)]
#[command(name = "clutch_cli")]
#[command(about = "Clutchcalc - multi-plate friction clutch design calculator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate a clutch design from command-line values
    Calc {
        #[command(flatten)]
        params: ClutchArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Prompt for each value, then calculate
    Interactive {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the equation reference (markdown)
    Equations,
}

/// Clutch parameters; defaults are the reference design.
#[derive(Args, Debug)]
struct ClutchArgs {
    /// Coefficient of friction μ (recommended 0.2-0.6)
    #[arg(short = 'm', long = "friction", default_value_t = 0.35)]
    friction_coefficient: f64,

    /// Number of friction surfaces n
    #[arg(short = 'n', long = "surfaces", default_value_t = 2)]
    surface_count: u32,

    /// Outer radius Ro (m)
    #[arg(long = "outer-radius", default_value_t = 0.12)]
    outer_radius_m: f64,

    /// Inner radius Ri (m)
    #[arg(long = "inner-radius", default_value_t = 0.06)]
    inner_radius_m: f64,

    /// Allowable pressure p (Pa)
    #[arg(short = 'p', long = "pressure", default_value_t = 200_000.0)]
    allowable_pressure_pa: f64,

    /// Design theory: wear | pressure
    #[arg(short = 't', long, default_value = "wear")]
    theory: Theory,
}

impl From<ClutchArgs> for ClutchInput {
    fn from(args: ClutchArgs) -> Self {
        ClutchInput {
            friction_coefficient: args.friction_coefficient,
            surface_count: args.surface_count,
            outer_radius_m: args.outer_radius_m,
            inner_radius_m: args.inner_radius_m,
            allowable_pressure_pa: args.allowable_pressure_pa,
            theory: args.theory,
        }
    }
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Print the full result as JSON
    #[arg(long)]
    json: bool,

    /// Include the torque-vs-axial-force table
    #[arg(long)]
    curve: bool,

    /// Settings file (JSON) overriding thresholds and curve sampling
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("clutch_cli=info,clutch_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Calc { params, output } => {
            let input = ClutchInput::from(params);
            calculate_and_print(&input, &output)
        }
        Commands::Interactive { output } => {
            let mut prompts = prompt_sink(output.json);
            let input = interactive_input(&mut io::stdin().lock(), &mut prompts)?;
            calculate_and_print(&input, &output)
        }
        Commands::Equations => {
            print!("{}", generate_equations_markdown());
            Ok(())
        }
    }
}

fn load_settings(path: Option<&PathBuf>) -> Result<DesignSettings> {
    let Some(path) = path else {
        return Ok(DesignSettings::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading settings file {}", path.display()))?;
    let settings = DesignSettings::from_json_str(&json)
        .with_context(|| format!("parsing settings file {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded design settings");
    Ok(settings)
}

fn calculate_and_print(input: &ClutchInput, output: &OutputArgs) -> Result<()> {
    let settings = load_settings(output.config.as_ref())?;

    match calculate_with_settings(input, &settings) {
        Ok(design) => {
            for warning in &design.warnings {
                tracing::warn!(
                    field = %warning.field,
                    value = %warning.value,
                    "{}",
                    warning.message
                );
            }
            if output.json {
                println!("{}", serde_json::to_string_pretty(&design)?);
            } else {
                print!("{}", render::report(input, &design, output.curve));
            }
            Ok(())
        }
        Err(e) => {
            if output.json {
                eprintln!("{}", serde_json::to_string_pretty(&e)?);
            }
            Err(calc_failure(e))
        }
    }
}

fn calc_failure(e: CalcError) -> anyhow::Error {
    let code = e.error_code();
    anyhow::Error::new(e).context(format!("clutch calculation failed ({})", code))
}

/// Read one value, falling back to `default` on empty or unparsable input.
fn prompt_value<T, R, W>(reader: &mut R, writer: &mut W, prompt: &str, default: T) -> Result<T>
where
    T: std::str::FromStr + std::fmt::Display,
    R: BufRead,
    W: Write,
{
    write!(writer, "{} [{}]: ", prompt, default)?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    match trimmed.parse() {
        Ok(value) => Ok(value),
        Err(_) => {
            tracing::warn!(
                input = trimmed,
                "could not parse '{}', using default {}",
                prompt,
                default
            );
            Ok(default)
        }
    }
}

fn prompt_input<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<ClutchInput> {
    let d = ClutchInput::default();
    let friction_coefficient = prompt_value(
        reader,
        writer,
        "Coefficient of friction μ (0.2-0.6)",
        d.friction_coefficient,
    )?;
    let surface_count =
        prompt_value(reader, writer, "Number of friction surfaces n", d.surface_count)?;
    let outer_radius_m = prompt_value(reader, writer, "Outer radius Ro (m)", d.outer_radius_m)?;
    let inner_radius_m = prompt_value(reader, writer, "Inner radius Ri (m)", d.inner_radius_m)?;
    let allowable_pressure_pa =
        prompt_value(reader, writer, "Allowable pressure p (Pa)", d.allowable_pressure_pa)?;
    let theory = prompt_value(reader, writer, "Theory (wear/pressure)", d.theory)?;

    Ok(ClutchInput {
        friction_coefficient,
        surface_count,
        outer_radius_m,
        inner_radius_m,
        allowable_pressure_pa,
        theory,
    })
}

/// Prompts go to stderr when stdout carries JSON.
fn prompt_sink(json: bool) -> Box<dyn Write> {
    if json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    }
}

/// Banner, then every prompt, all written to `writer`.
fn interactive_input<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<ClutchInput> {
    writeln!(writer, "Clutchcalc - Clutch Plate Design & Performance Calculator")?;
    writeln!(writer, "=========================================================")?;
    writeln!(writer)?;
    let input = prompt_input(reader, writer)?;
    writeln!(writer)?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_calc_defaults() {
        let cli = Cli::try_parse_from(["clutch_cli", "calc"]).unwrap();
        let Commands::Calc { params, output } = cli.command else {
            panic!("expected calc subcommand");
        };
        assert!(!output.json);
        assert_eq!(ClutchInput::from(params), ClutchInput::default());
    }

    #[test]
    fn test_calc_flags() {
        let cli = Cli::try_parse_from([
            "clutch_cli",
            "calc",
            "-m",
            "0.4",
            "-n",
            "6",
            "--outer-radius",
            "0.15",
            "--inner-radius",
            "0.1",
            "-p",
            "250000",
            "--theory",
            "uniform-pressure",
            "--json",
            "--curve",
        ])
        .unwrap();
        let Commands::Calc { params, output } = cli.command else {
            panic!("expected calc subcommand");
        };
        assert!(output.json && output.curve);
        let input = ClutchInput::from(params);
        assert_eq!(input.surface_count, 6);
        assert_eq!(input.friction_coefficient, 0.4);
        assert_eq!(input.theory, Theory::UniformPressure);
    }

    #[test]
    fn test_unknown_theory_rejected() {
        assert!(Cli::try_parse_from(["clutch_cli", "calc", "--theory", "magnetic"]).is_err());
    }

    #[test]
    fn test_prompt_uses_defaults_and_overrides() {
        let mut reader = Cursor::new("0.3\n\nabc\n0.05\n\npressure\n");
        let mut sink = Vec::new();
        let input = prompt_input(&mut reader, &mut sink).unwrap();

        assert_eq!(input.friction_coefficient, 0.3);
        assert_eq!(input.surface_count, 2);
        assert_eq!(input.outer_radius_m, 0.12);
        assert_eq!(input.inner_radius_m, 0.05);
        assert_eq!(input.allowable_pressure_pa, 200_000.0);
        assert_eq!(input.theory, Theory::UniformPressure);
        assert!(String::from_utf8(sink).unwrap().contains("Outer radius Ro (m) [0.12]: "));
    }

    #[test]
    fn test_prompt_at_eof_keeps_defaults() {
        let mut reader = Cursor::new("");
        let input = prompt_input(&mut reader, &mut Vec::<u8>::new()).unwrap();
        assert_eq!(input, ClutchInput::default());
    }

    #[test]
    fn test_missing_settings_file() {
        let path = PathBuf::from("/nonexistent/clutch-settings.json");
        let err = load_settings(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("reading settings file"));
    }

    #[test]
    fn test_calc_failure_keeps_error_code() {
        let err = calc_failure(CalcError::invalid_geometry("inner_radius_m", "0.2", "too big"));
        assert!(err.to_string().contains("INVALID_GEOMETRY"));
        assert!(err.downcast_ref::<CalcError>().is_some());
    }

    #[test]
    fn test_interactive_banner_and_prompts_share_writer() {
        let mut reader = Cursor::new("\n\n\n\n\n\n");
        let mut prompts = Vec::new();
        let input = interactive_input(&mut reader, &mut prompts).unwrap();
        assert_eq!(input, ClutchInput::default());

        let text = String::from_utf8(prompts).unwrap();
        assert!(text.starts_with("Clutchcalc - Clutch Plate Design"));
        assert!(text.contains("Allowable pressure p (Pa) [200000]: "));
    }

    #[test]
    fn test_interactive_json_flag_parses() {
        let cli = Cli::try_parse_from(["clutch_cli", "interactive", "--json"]).unwrap();
        let Commands::Interactive { output } = cli.command else {
            panic!("expected interactive subcommand");
        };
        assert!(output.json);
    }
}
