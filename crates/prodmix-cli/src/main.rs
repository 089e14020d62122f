use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod report;

#[derive(Parser)]
#[command(name = "prodmix")]
#[command(about = "Compare single-product and balanced production strategies", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate every strategy and report the most profitable one
    Solve {
        #[command(flatten)]
        input: InputArgs,
        /// Relative tolerance for detecting a singular consumption matrix
        #[arg(short, long, default_value_t = 1e-9)]
        tolerance: f64,
        /// Output format (json, pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Check that the input parses and is valid
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Number of variables (products)
    #[arg(short, long)]
    variables: String,
    /// Profit per unit of each variable, separated by spaces (e.g.: "3000 2000 3000")
    #[arg(short, long)]
    profits: String,
    /// Consumption of each resource per variable; values separated by spaces,
    /// variables by commas (e.g.: "2 1 8,4 2 0,5 4 3")
    #[arg(short, long)]
    matrix: String,
    /// Limit of each resource, separated by spaces (e.g.: "300 200 300")
    #[arg(short, long)]
    limits: String,
}

impl InputArgs {
    fn problem(&self) -> prodmix_solver::ProductionProblem {
        match prodmix_input::parse_problem(&self.variables, &self.profits, &self.matrix, &self.limits) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Input error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve { input, tolerance, format } => {
            let problem = input.problem();

            let engine = prodmix_solver::Engine::new().with_tolerance(tolerance);
            let evaluation = match engine.evaluate(&problem) {
                Ok(e) => e,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            if format == "json" {
                match serde_json::to_string_pretty(&evaluation) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error serializing result: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                print!("{}", report::render(&evaluation));
            }
        }
        Commands::Check { input } => {
            let problem = input.problem();
            print!("{}", report::render_check(&problem));
        }
    }
}
