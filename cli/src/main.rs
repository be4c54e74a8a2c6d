mod interactive;
mod report;

use clap::{Parser, Subcommand};
use descent_common::run::core::RunSetup;
use descent_common::run::parser::lines;
use descent_common::util::config::Config;
use descent_common::util::{check, generator, logger, visualization};
use descent_optimizer::objective::ObjectiveFunction;
use descent_optimizer::solver::steepest::{SteepestDescent, SteepestParams};
use report::TextReporter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the descent described by the config file.
    Run,
    /// Enter the run parameters interactively on stdin.
    Interactive {
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
    },
    /// Write a run definition with a random in-bounds initial point.
    Generate {
        #[arg(long, default_value = "quadratic")]
        function: String,
        #[arg(long, default_value_t = 2)]
        dimensionality: usize,
        #[arg(long, default_value_t = 0.1)]
        step_size: f64,
        #[arg(long, default_value = "inputs/random.toml")]
        output: String,
    },
}

fn main() -> anyhow::Result<()> {
    logger::init();
    let args = Args::parse();

    let config = if args.config.exists() {
        log::info!("Loading configuration from {:?}", args.config);
        let config_str = std::fs::read_to_string(&args.config)
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;
        toml::from_str(&config_str)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?
    } else {
        log::warn!(
            "Configuration file {:?} not found. Using internal defaults.",
            args.config
        );
        Config::default()
    };

    let command = args.command.unwrap_or(Commands::Run);

    match command {
        Commands::Generate {
            function,
            dimensionality,
            step_size,
            output,
        } => {
            let objective: ObjectiveFunction = function.parse()?;
            let safe_dim = dimensionality.max(objective.min_dimensionality());
            if safe_dim != dimensionality {
                log::warn!(
                    "Requested dimensionality {} is too small for {}. Raised to {}.",
                    dimensionality,
                    objective.name(),
                    safe_dim
                );
            }

            if let Some(parent) = Path::new(&output).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            generator::generate_random_run(
                &output,
                &function.to_lowercase(),
                safe_dim,
                step_size,
                objective.bounds(),
            )?;
            log::info!("Generated: {}", output);
        }
        Commands::Run => {
            let setup = load_run_setup(&config)?;
            let report_file = config.output.report_file.clone().map(PathBuf::from);
            run_descent(&config, setup, report_file)?;
        }
        Commands::Interactive { report } => {
            let setup = interactive::read_run_setup()?;
            run_descent(&config, setup, report)?;
        }
    }

    Ok(())
}

fn load_run_setup(config: &Config) -> anyhow::Result<RunSetup> {
    if let Some(run_file) = &config.input.run_file {
        log::info!("Loading run definition from {}", run_file);
        return lines::parse(run_file);
    }

    Ok(RunSetup {
        function_name: config.run.function.clone(),
        dimensionality: config.run.dimensionality,
        iterations: config.run.iterations,
        tolerance: config.run.tolerance,
        step_size: config.run.step_size,
        initial_point: config.run.initial_point.clone(),
    })
}

fn run_descent(
    config: &Config,
    setup: RunSetup,
    report_file: Option<PathBuf>,
) -> anyhow::Result<()> {
    let objective: ObjectiveFunction = setup.function_name.parse()?;
    check::run_setup_check(
        &setup,
        objective.bounds(),
        objective.min_dimensionality(),
        objective.name(),
    )?;

    let out: Box<dyn Write> = match &report_file {
        Some(path) => {
            prepare_output_dir(path)?;
            log::info!("Writing report to {:?}", path);
            Box::new(BufWriter::new(File::create(path).map_err(|e| {
                anyhow::anyhow!("Failed to create report file {:?}: {}", path, e)
            })?))
        }
        None => Box::new(std::io::stdout()),
    };

    let want_plot = config.output.plot_file.is_some() && setup.dimensionality >= 2;
    let mut reporter = TextReporter::new(out, want_plot);
    reporter.print_parameters(&objective, &setup);

    let params = SteepestParams {
        max_iterations: setup.iterations,
        step_size: setup.step_size,
        tolerance: setup.tolerance,
    };
    let mut solver = SteepestDescent::new(params, setup.dimensionality);
    let mut point = setup.initial_point.clone();

    let start = Instant::now();
    let verdict = solver.optimize(&objective, &mut point, &mut reporter)?;
    log::info!("Steepest descent finished in {:?}", start.elapsed());

    reporter.print_verdict(&verdict);

    if let Some(plot) = &config.output.plot_file
        && want_plot
    {
        prepare_output_dir(Path::new(plot))?;
        visualization::draw_trajectory(
            reporter.trajectory(),
            objective.bounds(),
            plot,
            config.output.plot_dimension,
        );
        log::info!("Wrote trajectory plot to {}", plot);
    }

    reporter.finish()?;
    Ok(())
}

fn prepare_output_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() && !parent.as_os_str().is_empty() {
            log::info!("Creating output directory: {:?}", parent);
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
