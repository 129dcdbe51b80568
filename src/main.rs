//! nac-tco: NAC vendor TCO, ROI, and compliance comparison tool

#![allow(clippy::too_many_lines, clippy::struct_excessive_bools)]

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use nac_tco::{
    cli,
    config::{self, AppConfig, ConfigPreset},
    engine::Perturbations,
    model::{FrameworkId, IndustryId, OrganizationConfig, VendorId},
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with model support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nPricing Models:",
        "\n  per-device subscription, perpetual license, hybrid, bundled",
        "\n\nBuiltin Frameworks:",
        "\n  hipaa, pci-dss, nist-csf, gdpr, iso-27001, cmmc, ferpa",
        "\n\nOutput Formats:",
        "\n  summary, json, csv"
    )
}

#[derive(Parser)]
#[command(name = "nac-tco")]
#[command(version, long_version = build_long_version())]
#[command(about = "NAC vendor TCO, ROI, and compliance comparison", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Analysis completed
    1  Critical compliance gaps found (with --fail-on-gaps)

EXAMPLES:
    # Compare two vendors for a 2500-device healthcare org
    nac-tco compare portnox cisco-ise --devices 2500 --industry healthcare \\
        --frameworks hipaa

    # Whole-catalog comparison, machine readable
    nac-tco compare -o json > comparison.json

    # What happens if the fleet grows 30%?
    nac-tco sensitivity portnox --device-delta 30

    # Tornado sweep around the base case
    nac-tco sensitivity cisco-ise --tornado -20 20")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "NAC_TCO_CONFIG")]
    config: Option<PathBuf>,

    /// Named assumption preset (default, conservative, aggressive, ci-cd)
    #[arg(long, global = true)]
    preset: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Organization profile arguments shared by the analysis subcommands.
#[derive(Args, Clone)]
struct OrgArgs {
    /// Number of managed devices
    #[arg(long, default_value_t = 1000)]
    devices: u32,

    /// Number of users
    #[arg(long, default_value_t = 800)]
    users: u32,

    /// Number of physical locations
    #[arg(long, default_value_t = 3)]
    locations: u32,

    /// Projection horizon in years (1-10)
    #[arg(long, default_value_t = 3)]
    years: u32,

    /// Average fully-loaded IT salary
    #[arg(long, default_value_t = 95_000.0)]
    salary: f64,

    /// Cost of one hour of network downtime
    #[arg(long, default_value_t = 5_000.0)]
    downtime_cost: f64,

    /// Annual cyber-insurance premium
    #[arg(long, default_value_t = 50_000.0)]
    insurance_premium: f64,

    /// Annual compliance-audit budget
    #[arg(long, default_value_t = 75_000.0)]
    audit_budget: f64,

    /// Industry vertical (healthcare, finance, education, ...)
    #[arg(long, default_value = "technology")]
    industry: String,
}

impl OrgArgs {
    fn to_org(&self) -> OrganizationConfig {
        OrganizationConfig {
            device_count: self.devices,
            user_count: self.users,
            location_count: self.locations,
            projection_years: self.years,
            avg_it_salary: self.salary,
            downtime_cost_per_hour: self.downtime_cost,
            annual_insurance_premium: self.insurance_premium,
            annual_audit_budget: self.audit_budget,
            industry: IndustryId::new(self.industry.clone()),
        }
    }
}

/// Output arguments shared by the analysis subcommands.
#[derive(Args, Clone)]
struct OutputArgs {
    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Path to an external vendor/framework catalog (YAML or JSON)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

/// Arguments for the `compare` subcommand
#[derive(Args)]
struct CompareArgs {
    /// Vendor ids to compare (whole catalog when omitted)
    vendors: Vec<String>,

    /// Framework ids to score against
    #[arg(short, long, value_delimiter = ',')]
    frameworks: Vec<String>,

    /// Exit non-zero when any vendor leaves a critical control uncovered
    #[arg(long)]
    fail_on_gaps: bool,

    #[command(flatten)]
    org: OrgArgs,

    #[command(flatten)]
    out: OutputArgs,
}

/// Arguments for the `sensitivity` subcommand
#[derive(Args)]
struct SensitivityArgs {
    /// Vendor id under analysis
    vendor: String,

    /// Device-count delta in percent (-90 to 500)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    device_delta: f64,

    /// Staff-cost delta in percent (-90 to 500)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    staff_delta: f64,

    /// Implementation-cost delta in percent (-90 to 500)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    impl_delta: f64,

    /// Sweep low/high percent deltas across every parameter
    #[arg(long, num_args = 2, value_names = ["LOW", "HIGH"], allow_hyphen_values = true)]
    tornado: Option<Vec<f64>>,

    #[command(flatten)]
    org: OrgArgs,

    #[command(flatten)]
    out: OutputArgs,
}

/// Arguments for the `score` subcommand
#[derive(Args)]
struct ScoreArgs {
    /// Vendor id under assessment
    vendor: String,

    /// Framework id to score against
    framework: String,

    /// Exit non-zero when critical controls are uncovered
    #[arg(long)]
    fail_on_gaps: bool,

    #[command(flatten)]
    org: OrgArgs,

    #[command(flatten)]
    out: OutputArgs,
}

/// Arguments for the catalog listing subcommands
#[derive(Args)]
struct ListArgs {
    #[command(flatten)]
    out: OutputArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare vendors on TCO, ROI, and compliance
    Compare(CompareArgs),

    /// Perturb cost drivers for one vendor
    Sensitivity(SensitivityArgs),

    /// Score one vendor against one framework
    Score(ScoreArgs),

    /// List the vendor catalog
    Vendors(ListArgs),

    /// List the framework catalog
    Frameworks(ListArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// Configuration file utilities
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print an example .nac-tco.yaml
    Init,
    /// Print the JSON Schema for the config format
    Schema,
    /// Show the effective merged configuration
    Show,
}

/// Merge config file, preset, and global CLI flags into one `AppConfig`.
fn effective_config(cli: &Cli, output: Option<&OutputArgs>) -> Result<AppConfig> {
    let mut app = match cli.preset.as_deref() {
        Some(name) => {
            let preset = ConfigPreset::from_name(name)
                .ok_or_else(|| anyhow::anyhow!("unknown preset '{name}'"))?;
            AppConfig::from_preset(preset)
        }
        None => config::load_or_default(cli.config.as_deref()).0,
    };
    if let Some(out) = output {
        app.output.format = out.output;
        app.output.file = out.output_file.clone();
    }
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        app.output.no_color = true;
    }
    if cli.quiet {
        app.behavior.quiet = true;
    }
    Ok(app)
}

fn vendor_ids(values: &[String]) -> Vec<VendorId> {
    values.iter().map(VendorId::new).collect()
}

fn framework_ids(values: &[String]) -> Vec<FrameworkId> {
    values.iter().map(FrameworkId::new).collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Dispatch to command handlers
    let exit_code = match cli.command {
        Commands::Compare(ref args) => {
            let mut app = effective_config(&cli, Some(&args.out))?;
            if args.fail_on_gaps {
                app.behavior.fail_on_gaps = true;
            }
            cli::run_compare(cli::CompareRun {
                vendors: vendor_ids(&args.vendors),
                frameworks: framework_ids(&args.frameworks),
                org: args.org.to_org(),
                app,
                catalog_path: args.out.catalog.clone(),
            })?
        }

        Commands::Sensitivity(ref args) => {
            let app = effective_config(&cli, Some(&args.out))?;
            let tornado = args.tornado.as_ref().map(|bounds| (bounds[0], bounds[1]));
            cli::run_sensitivity(cli::SensitivityRun {
                vendor: VendorId::new(&args.vendor),
                org: args.org.to_org(),
                perturbations: Perturbations {
                    device_count_delta_pct: args.device_delta,
                    staff_cost_delta_pct: args.staff_delta,
                    implementation_cost_delta_pct: args.impl_delta,
                },
                tornado,
                app,
                catalog_path: args.out.catalog.clone(),
            })?
        }

        Commands::Score(ref args) => {
            let mut app = effective_config(&cli, Some(&args.out))?;
            if args.fail_on_gaps {
                app.behavior.fail_on_gaps = true;
            }
            cli::run_score(cli::ScoreRun {
                vendor: VendorId::new(&args.vendor),
                framework: FrameworkId::new(&args.framework),
                org: args.org.to_org(),
                app,
                catalog_path: args.out.catalog.clone(),
            })?
        }

        Commands::Vendors(ref args) => {
            let app = effective_config(&cli, Some(&args.out))?;
            cli::run_vendors(&app, args.out.catalog.as_deref())?
        }

        Commands::Frameworks(ref args) => {
            let app = effective_config(&cli, Some(&args.out))?;
            cli::run_frameworks(&app, args.out.catalog.as_deref())?
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "nac-tco", &mut io::stdout());
            0
        }

        Commands::Config { ref action } => {
            match action {
                ConfigAction::Init => print!("{}", config::generate_example_config()),
                ConfigAction::Schema => println!("{}", config::generate_json_schema()),
                ConfigAction::Show => {
                    let app = effective_config(&cli, None)?;
                    println!("{}", serde_yaml::to_string(&app)?);
                }
            }
            0
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
