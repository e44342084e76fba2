//! `cpu-sched` command-line interface.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use cpu_sched::comparison::Comparison;
use cpu_sched::telemetry::init_tracing;
use cpu_sched::validation::validate_processes;
use cpu_sched::workload::{self, WorkloadGenerator};
use cpu_sched::{
    report, AlgorithmKind, OutputFormat, SchedError, SimulationConfig, Simulator,
};

#[derive(Debug, Parser)]
#[command(name = "cpu-sched", version, about = "CPU scheduling algorithm simulator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Simulate a workload file under every algorithm (or one).
    Run {
        /// Workload file: pid,arrival_time,burst_time,priority per line.
        input: PathBuf,

        /// Round Robin time quantum [default: 3, or the config file's].
        #[arg(env = "CPU_SCHED_QUANTUM", allow_negative_numbers = true)]
        quantum: Option<i64>,

        /// Output format [default: text, or the config file's].
        #[arg(long, short)]
        format: Option<OutputFormat>,

        /// JSON configuration file; flags override its values.
        #[arg(long, env = "CPU_SCHED_CONFIG")]
        config: Option<PathBuf>,

        /// Run a single algorithm: fcfs, sjf, round_robin, or priority.
        #[arg(long, short)]
        algorithm: Option<AlgorithmKind>,

        /// Append the best-algorithm analysis.
        #[arg(long)]
        compare: bool,
    },

    /// Write a random workload.
    Generate {
        /// Number of processes.
        #[arg(long, short, default_value_t = 5)]
        count: usize,

        /// RNG seed.
        #[arg(long, short, default_value_t = 0)]
        seed: u64,

        /// Latest arrival time.
        #[arg(long, default_value_t = 10)]
        max_arrival: u64,

        /// Longest burst time.
        #[arg(long, default_value_t = 10)]
        max_burst: u64,

        /// Largest priority number.
        #[arg(long, default_value_t = 5)]
        max_priority: i32,

        /// Output file (stdout if omitted).
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Write the built-in four-process sample workload.
    Sample {
        /// Output file (stdout if omitted).
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match execute(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Command) -> Result<()> {
    match command {
        Command::Run {
            input,
            quantum,
            format,
            config,
            algorithm,
            compare,
        } => {
            let config = resolve_config(config.as_deref(), quantum, format)?;
            run(&input, &config, algorithm, compare)
        }
        Command::Generate {
            count,
            seed,
            max_arrival,
            max_burst,
            max_priority,
            output,
        } => {
            let processes = WorkloadGenerator::new(seed)
                .with_max_arrival(max_arrival)
                .with_max_burst(max_burst)
                .with_max_priority(max_priority)
                .generate(count);
            emit_workload(&processes, output)
        }
        Command::Sample { output } => emit_workload(&workload::sample_processes(), output),
    }
}

/// Config file (or defaults) with command-line overrides applied.
fn resolve_config(
    path: Option<&Path>,
    quantum: Option<i64>,
    format: Option<OutputFormat>,
) -> Result<SimulationConfig> {
    let mut config = match path {
        Some(path) => SimulationConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SimulationConfig::new(),
    };
    if let Some(quantum) = quantum {
        config = config.with_time_quantum(quantum);
    }
    if let Some(format) = format {
        config = config.with_format(format);
    }
    info!(time_quantum = config.time_quantum, format = %config.format, "configuration resolved");
    Ok(config.validated()?)
}

fn run(
    input: &Path,
    config: &SimulationConfig,
    algorithm: Option<AlgorithmKind>,
    compare: bool,
) -> Result<()> {
    let processes = workload::load_workload(input)
        .with_context(|| format!("failed to load {}", input.display()))?;
    if processes.is_empty() {
        return Err(SchedError::EmptyWorkload)
            .with_context(|| format!("no valid processes found in {}", input.display()));
    }
    if let Err(errors) = validate_processes(&processes) {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("invalid workload: {}", details.join("; "));
    }
    info!(path = %input.display(), processes = processes.len(), "workload loaded");

    let simulator = Simulator::new(processes);

    if let Some(kind) = algorithm {
        let record = simulator.run(kind, config.time_quantum)?;
        match config.format {
            OutputFormat::Text => print!("{}", report::render_record(&record)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
        }
        return Ok(());
    }

    let results = simulator.run_all(config.time_quantum)?;
    let comparison = if compare {
        Comparison::from_results(&results)
    } else {
        None
    };

    match config.format {
        OutputFormat::Text => {
            print!("{}", report::render_results(&results));
            if let Some(c) = &comparison {
                print!("{}", report::render_comparison(c));
            }
        }
        OutputFormat::Json => {
            let json = match &comparison {
                Some(c) => serde_json::json!({ "results": results, "comparison": c }),
                None => serde_json::to_value(&results)?,
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

fn emit_workload(processes: &[cpu_sched::Process], output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            workload::save_workload(&path, processes)?;
            info!(path = %path.display(), processes = processes.len(), "workload written");
        }
        None => print!("{}", workload::render_workload(processes)),
    }
    Ok(())
}
