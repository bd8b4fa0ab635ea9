use clap::{Parser, Subcommand};
use dotenv::dotenv;
use pipeline_filters::pipeline::loader::ConfigLoader;
use pipeline_filters::PipelineFilters;
use serde_json::json;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a pipeline config and list every filter binding
    Check {
        /// Path to the pipeline config file
        #[arg(short, long)]
        file: String,

        /// Merge conditions of the same type on an edge into one filter
        #[arg(long)]
        reuse: bool,
    },
    /// Show the filters bound to one edge
    Lookup {
        /// Path to the pipeline config file
        #[arg(short, long)]
        file: String,

        /// Producer stage name
        #[arg(short, long)]
        input: String,

        /// Consumer stage name
        #[arg(short, long)]
        output: String,

        /// Merge conditions of the same type on an edge into one filter
        #[arg(long)]
        reuse: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn load(file: &str, reuse: bool) -> anyhow::Result<PipelineFilters> {
    let mut config = ConfigLoader::new().load(file)?;
    config.reuse_solvers_by_type |= reuse;
    log::info!(
        "Loaded {} filter specs from '{}' (reuse by type: {})",
        config.filters.len(),
        file,
        config.reuse_solvers_by_type
    );
    Ok(PipelineFilters::from_config(&config))
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Check { file, reuse } => {
            let filters = load(&file, reuse)?;
            for (input, output, solver) in filters.bindings() {
                println!(
                    "{} -> {}: {}={}",
                    input,
                    output,
                    solver.type_tag(),
                    solver.conditions().join("|")
                );
            }
            println!(
                "{} bindings on {} edges",
                filters.len(),
                filters.edges().len()
            );
        }
        Commands::Lookup {
            file,
            input,
            output,
            reuse,
            json,
        } => {
            let filters = load(&file, reuse)?;
            let found = filters.find_filters(&input, &output);

            if json {
                let solvers: Vec<_> = found
                    .iter()
                    .map(|s| json!({"type": s.type_tag(), "conditions": s.conditions()}))
                    .collect();
                let report = json!({"input": input, "output": output, "filters": solvers});
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if found.is_empty() {
                println!("{} -> {}: unfiltered", input, output);
            } else {
                for solver in found {
                    println!("{}={}", solver.type_tag(), solver.conditions().join("|"));
                }
            }
        }
    }

    Ok(())
}
