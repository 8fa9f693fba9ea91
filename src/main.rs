/* 3rd party libraries */
use clap::Parser;
use env_logger::Env;
use log::{debug, error};
use std::path::PathBuf;

/* Custom libraries */
use elevator_sim::unwrap_or_exit;
use elevator_sim::{config, input, OutputFormat};

/// Simulates a single elevator car serving a list of floor requests.
///
/// With request tokens on the command line, e.g. `start=1 floor=2,3,5`, one request is
/// simulated and printed as `<total_time> <visited floors>`. Without them every line of the
/// batch input file is processed into the batch output file.
#[derive(Parser, Debug)]
#[clap(name = "elevator-sim", version, about)]
struct Cli {
    /// Request tokens, `start=<floor>` and `floor=<floor>,<floor>,...`
    request: Vec<String>,

    /// Path to the configuration file
    #[clap(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Batch input file, overrides the configured path
    #[clap(short, long)]
    input: Option<PathBuf>,

    /// Batch output file, overrides the configured path
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Print results as JSON
    #[clap(long)]
    json: bool,
}

/* Main */
fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = unwrap_or_exit!(config::load_config(&cli.config));
    debug!("Loaded configuration: {:?}", config);

    let floor_travel_time = config.simulation.floor_travel_time;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    // Command-line request
    if !cli.request.is_empty() {
        let line = cli.request.join(" ");
        match input::process_input(&line, floor_travel_time) {
            Ok(result) => println!("{}", format.render(&result)),
            Err(e) => {
                error!("Rejected request '{}': {}", line, e);
                println!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    // File input/output
    let input_path = cli.input.unwrap_or(config.batch.input_path);
    let output_path = cli.output.unwrap_or(config.batch.output_path);
    unwrap_or_exit!(input::run_batch(
        &input_path,
        &output_path,
        floor_travel_time,
        format
    ));
}
