use anyhow::Result;
use clap::{Parser, Subcommand};

use cadence::cli::{handle_analyze_command, AnalyzeArgs};
use cadence::config::{paths::CadencePaths, settings::Settings};
use cadence::display::{format_bucket_table, format_tag_list};
use cadence::logging::init_logging;
use cadence::models::{BucketTable, BucketTableKind};

#[derive(Parser)]
#[command(
    name = "cadence",
    author = "Kaylee Beyene",
    version,
    about = "Detects how often tagged transactions recur",
    long_about = "Cadence groups the transactions in a bank statement by their tags \
                  and classifies each group as weekly, fortnightly, four-weekly, \
                  monthly or unknown."
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every tag group in a statement file
    Analyze(AnalyzeArgs),

    /// List the tags a statement may use
    Tags,

    /// Show the day ranges of a bucket table
    Buckets {
        /// "standard" or "extended" (defaults to the configured one)
        #[arg(short, long)]
        table: Option<BucketTableKind>,
    },

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = CadencePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Analyze(args)) => {
            handle_analyze_command(&settings, args)?;
        }
        Some(Commands::Tags) => {
            print!("{}", format_tag_list());
        }
        Some(Commands::Buckets { table }) => {
            let kind = table.unwrap_or(settings.bucket_table);
            println!("Bucket table: {}", kind);
            print!("{}", format_bucket_table(&BucketTable::for_kind(kind)));
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("Cadence Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Bucket table:          {}", settings.bucket_table);
            println!("  Statement date format: {}", settings.statement_date_format);
            println!("  Parallel:              {}", settings.parallel);
        }
        None => {
            println!("Cadence - transaction periodicity detection");
            println!();
            println!("Run 'cadence --help' for usage information.");
            println!("Run 'cadence analyze <FILE>' to classify a statement.");
        }
    }

    Ok(())
}
