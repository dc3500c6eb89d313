use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use maintenance_forecast::{
    analysis::{validate_sweep, Forecaster},
    io,
    models::{GrowthRates, ProjectionParameters},
    visualization::{print_cost_chart, print_headline, print_projection_table, print_sweep_table},
};

#[derive(Parser)]
#[command(
    name = "cost-forecast",
    about = "Maintenance Cost Forecaster - phased growth projection and economic limit detection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Projection inputs. Flags override values loaded from `--config`.
#[derive(Args, Debug)]
struct ParamArgs {
    /// Parameter file (.toml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Annual maintenance cost at year 0
    #[arg(long)]
    initial_cost: Option<f64>,

    /// Economic limit tested against both trajectories
    #[arg(short, long)]
    limit: Option<f64>,

    /// Growth rates in percent for years 1-6, 7-12 and 13+ (e.g. 17.6,3.5,0.7)
    #[arg(short, long, allow_hyphen_values = true)]
    rates: Option<GrowthRates>,

    /// Year the re-forecast starts; enables the intervention
    #[arg(long, allow_hyphen_values = true)]
    intervention_year: Option<i32>,

    /// Cost the re-forecast restarts from; enables the intervention
    #[arg(long)]
    intervention_cost: Option<f64>,

    /// Disable the intervention even if the config enables it
    #[arg(long)]
    no_intervention: bool,

    /// Project out-of-range parameters instead of rejecting them
    #[arg(long)]
    unchecked: bool,
}

impl ParamArgs {
    fn resolve(&self) -> Result<ProjectionParameters> {
        let mut params = match &self.config {
            Some(path) => io::read_parameters(path)?,
            None => ProjectionParameters::default(),
        };

        if let Some(cost) = self.initial_cost {
            params.initial_cost = cost;
        }
        if let Some(limit) = self.limit {
            params.economic_limit = limit;
        }
        if let Some(rates) = self.rates {
            params.growth_rates = rates;
        }
        if let Some(year) = self.intervention_year {
            params.intervention.year = year;
            params.intervention.enabled = true;
        }
        if let Some(cost) = self.intervention_cost {
            params.intervention.cost = cost;
            params.intervention.enabled = true;
        }
        if self.no_intervention {
            params.intervention.enabled = false;
        }

        if self.unchecked {
            if let Err(e) = params.validate() {
                tracing::warn!(error = %e, "projecting out-of-range parameters");
            }
        } else {
            params.validate()?;
        }
        tracing::debug!(?params, "resolved parameters");
        Ok(params)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Project baseline and adjusted costs and report inflexion years
    Project {
        #[command(flatten)]
        params: ParamArgs,

        /// Output format: table, json, or csv
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Also draw the trajectory chart (table format only)
        #[arg(long)]
        chart: bool,
    },

    /// Write the projection to a CSV, JSON, or Excel file
    Export {
        #[command(flatten)]
        params: ParamArgs,

        /// Output file path (.csv, .json, or .xlsx)
        #[arg(short, long)]
        output: PathBuf,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Re-forecast at every intervention year in a range
    Sweep {
        #[command(flatten)]
        params: ParamArgs,

        /// First intervention year
        #[arg(long, default_value = "1")]
        from: i32,

        /// Last intervention year
        #[arg(long, default_value = "24")]
        to: i32,
    },

    /// Write a starter parameter file with the default scenario
    Init {
        /// Output file path (.toml or .json)
        #[arg(short, long, default_value = "forecast.toml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Start the web API server
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Project {
            params,
            format,
            chart,
        } => {
            let params = params.resolve()?;
            let result = Forecaster::new(&params).project();

            match format.to_lowercase().as_str() {
                "table" => {
                    print_headline(&result, &params);
                    print_projection_table(&result, &params);
                    if chart {
                        print_cost_chart(&result, &params);
                    }
                    println!();
                }
                "json" => println!("{}", serde_json::to_string_pretty(&result)?),
                "csv" => {
                    let bytes = io::result_to_csv_bytes(&result, &params)?;
                    print!("{}", String::from_utf8(bytes)?);
                }
                _ => anyhow::bail!("Unknown output format: {format}. Use: table, json, or csv"),
            }
        }

        Commands::Export {
            params,
            output,
            pretty,
        } => {
            let params = params.resolve()?;
            let result = Forecaster::new(&params).project();
            let writer = io::result_writer_for(&output, pretty)?;
            writer.write(&result, &params, &output)?;

            println!(
                "{} Wrote projection to {}",
                "Success:".green().bold(),
                output.display()
            );
        }

        Commands::Sweep { params, from, to } => {
            if from > to {
                anyhow::bail!("Invalid sweep range: {from} is after {to}");
            }
            let unchecked = params.unchecked;
            let params = params.resolve()?;
            let forecaster = Forecaster::new(&params);
            let points = if unchecked {
                if let Err(e) = validate_sweep(&params, &(from..=to)) {
                    tracing::warn!(error = %e, "sweeping out-of-range parameters");
                }
                forecaster.sweep(from..=to)
            } else {
                forecaster.checked_sweep(from..=to)?
            };
            print_sweep_table(&points);
            println!();
        }

        Commands::Init { output, force } => {
            if output.exists() && !force {
                anyhow::bail!(
                    "{} already exists. Use --force to overwrite",
                    output.display()
                );
            }
            io::write_parameters(&ProjectionParameters::default(), &output)?;
            println!(
                "{} Wrote default parameters to {}",
                "Success:".green().bold(),
                output.display()
            );
        }

        #[cfg(feature = "web")]
        Commands::Serve { port } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(maintenance_forecast::web::start_server(port))?;
        }
    }

    Ok(())
}
