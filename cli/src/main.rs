mod toml_output;

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use confl::render_error;
use confl_core::{evaluator, parser};
use miette::{IntoDiagnostic, Result, WrapErr};

/// confl - convert a confl configuration into TOML
#[derive(Parser, Debug)]
#[command(name = "confl")]
#[command(about = "Convert confl configuration files to TOML", long_about = None)]
struct Args {
    /// Input file (if not provided, reads from stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output TOML file, or `-` for stdout
    #[arg(short, long, default_value = "result.toml")]
    output: PathBuf,

    /// Print the parsed AST to stderr (for debugging)
    #[arg(long)]
    debug_ast: bool,
}

fn read_source(input: Option<&PathBuf>) -> Result<(String, String)> {
    match input {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("cannot open input file {}", path.display()))?;
            Ok((path.display().to_string(), text))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .into_diagnostic()
                .wrap_err("cannot read configuration from stdin")?;
            Ok(("<stdin>".to_string(), text))
        }
    }
}

fn convert(args: &Args) -> Result<ExitCode> {
    let (name, source) = read_source(args.input.as_ref())?;
    tracing::debug!(input = %name, bytes = source.len(), "read configuration");

    let program = match parser::parse(&source) {
        Ok(program) => program,
        Err(e) => {
            render_error(&name, &source, &e.into());
            return Ok(ExitCode::FAILURE);
        }
    };

    if args.debug_ast {
        eprintln!("=== Parsed AST ===");
        eprintln!("{:#?}", program.statements);
        eprintln!();
    }

    let document = match evaluator::eval(&program) {
        Ok(document) => document,
        Err(e) => {
            render_error(&name, &source, &e.into());
            return Ok(ExitCode::FAILURE);
        }
    };

    let text = toml_output::to_toml_string(&document).into_diagnostic()?;

    if args.output.as_os_str() == "-" {
        print!("{}", text);
    } else {
        std::fs::write(&args.output, text)
            .into_diagnostic()
            .wrap_err_with(|| format!("cannot write {}", args.output.display()))?;
        println!("Successfully written to {}", args.output.display());
    }
    tracing::info!(entries = document.len(), "conversion finished");

    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    convert(&args)
}
