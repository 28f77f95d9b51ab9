use clap::{Parser, Subcommand};
use jams_launch::params::ParameterSet;
use jams_launch::resolve;
use jams_launch::{build_launch_command, LaunchOptions};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "JAMS launch command builder", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Compose(ComposeArgs),
    Resolve(ResolveArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// TOML parameter file; explicit flags below override its fields.
    #[arg(long)]
    params: Option<PathBuf>,
    #[arg(long)]
    threads: Option<u32>,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    size: Option<String>,
    #[arg(long)]
    temperature: Option<String>,
    #[arg(long)]
    alpha: Option<String>,
    #[arg(long)]
    cmc_constraint_theta: Option<String>,
    #[arg(long)]
    cmc_constraint_phi: Option<String>,
    #[arg(long)]
    extra: Option<String>,
    #[arg(long)]
    exe: Option<String>,
    #[arg(long)]
    input: Vec<PathBuf>,
    #[arg(long)]
    output: Vec<PathBuf>,
    #[arg(long)]
    log: Option<String>,
    /// Print the full launch report as JSON instead of the bare command.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    #[arg(long)]
    exe: Option<String>,
    #[arg(long)]
    input: Vec<PathBuf>,
}

fn main() {
    let args = Args::parse();

    match args.command {
        Command::Compose(compose) => {
            if let Err(err) = run_compose(compose) {
                eprintln!("Compose error: {err}");
                std::process::exit(1);
            }
        }
        Command::Resolve(resolve) => {
            if let Err(err) = run_resolve(resolve) {
                eprintln!("Resolve error: {err}");
                std::process::exit(1);
            }
        }
    }
}

fn run_compose(args: ComposeArgs) -> Result<(), String> {
    let params = gather_params(&args)?;
    let options = LaunchOptions {
        params,
        input_files: args.input,
        output_files: args.output,
        log_redirection: args.log,
    };
    let report = build_launch_command(&options).map_err(|err| err.to_string())?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|err| err.to_string())?;
        println!("{json}");
        return Ok(());
    }

    print_warnings(&report.warnings);
    println!("{}", report.command);
    Ok(())
}

fn run_resolve(args: ResolveArgs) -> Result<(), String> {
    let mut warnings = Vec::new();
    let executable = resolve::resolve(args.exe.as_deref(), &args.input, &mut warnings)
        .map_err(|err| err.to_string())?;
    print_warnings(&warnings);
    println!("{}", executable.display());
    Ok(())
}

// Warnings go to stderr so stdout stays a clean command string.
fn print_warnings(warnings: &[String]) {
    if warnings.is_empty() {
        return;
    }
    eprintln!("Warnings:");
    for warning in warnings {
        eprintln!("- {warning}");
    }
}

fn gather_params(args: &ComposeArgs) -> Result<ParameterSet, String> {
    let mut params = match &args.params {
        Some(path) => {
            let src = fs::read_to_string(path)
                .map_err(|err| format!("read parameter file {}: {err}", path.display()))?;
            ParameterSet::parse(&src)?
        }
        None => {
            let threads = args
                .threads
                .ok_or_else(|| "--threads is required when no parameter file is given".to_string())?;
            ParameterSet::new(threads)
        }
    };

    if let Some(threads) = args.threads {
        params.threads = threads;
    }
    if args.name.is_some() {
        params.name = args.name.clone();
    }
    if args.size.is_some() {
        params.size = args.size.clone();
    }
    if args.temperature.is_some() {
        params.temperature = args.temperature.clone();
    }
    if args.alpha.is_some() {
        params.alpha = args.alpha.clone();
    }
    if args.cmc_constraint_theta.is_some() {
        params.cmc_constraint_theta = args.cmc_constraint_theta.clone();
    }
    if args.cmc_constraint_phi.is_some() {
        params.cmc_constraint_phi = args.cmc_constraint_phi.clone();
    }
    if args.extra.is_some() {
        params.extra = args.extra.clone();
    }
    if args.exe.is_some() {
        params.exe = args.exe.clone();
    }

    Ok(params)
}
