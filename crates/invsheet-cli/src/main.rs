mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "invsheet",
    version,
    about = "Convert fixed-layout invoice PDFs into a spreadsheet"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Deployment settings shared by the commands that parse invoices.
#[derive(Args, Clone)]
pub struct DeploymentArgs {
    /// JSON config file with party_name and bank tables
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Party name written on every row (overrides the config file)
    #[arg(long, value_name = "NAME")]
    party_name: Option<String>,

    /// Extra bank-code table file(s), merged over the builtin table
    #[arg(short, long = "banks", value_name = "FILE")]
    banks: Vec<PathBuf>,

    /// Bundled bank-code table(s): default, india-extended
    #[arg(long = "bank-preset", value_name = "NAME")]
    bank_presets: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one or more invoice PDFs into an xlsx workbook
    Convert {
        /// Invoice PDFs, in the order their rows should appear
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// Workbook to write
        #[arg(short = 'O', long = "out", value_name = "FILE", default_value = "invoices.xlsx")]
        out: PathBuf,

        /// Preview format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Also write the extracted text of every PDF to this file
        #[arg(long, value_name = "FILE")]
        debug_text: Option<PathBuf>,

        #[command(flatten)]
        deployment: DeploymentArgs,
    },
    /// Parse a single invoice PDF and print the record (no workbook)
    Parse {
        /// Path to the invoice PDF
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        #[command(flatten)]
        deployment: DeploymentArgs,
    },
    /// Read back a workbook written by `convert`
    Read {
        /// Path to the xlsx file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect bank-code tables
    Banks {
        #[command(subcommand)]
        action: BanksAction,
    },
}

#[derive(Subcommand)]
enum BanksAction {
    /// List the bank codes in effect
    List {
        #[arg(short, long = "banks", value_name = "FILE")]
        banks: Vec<PathBuf>,

        #[arg(long = "bank-preset", value_name = "NAME")]
        bank_presets: Vec<String>,
    },
    /// Show the bank name an IFSC code resolves to
    Resolve {
        /// IFSC code, e.g. HDFC0001234
        ifsc: String,

        #[arg(short, long = "banks", value_name = "FILE")]
        banks: Vec<PathBuf>,

        #[arg(long = "bank-preset", value_name = "NAME")]
        bank_presets: Vec<String>,
    },
    /// Validate a bank-code table file
    Validate {
        /// Path to JSON bank table
        file: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input_files,
            out,
            output,
            debug_text,
            deployment,
        } => commands::convert::run(input_files, out, &output, debug_text, deployment),
        Commands::Parse {
            input_file,
            output,
            deployment,
        } => commands::parse::run(input_file, &output, deployment),
        Commands::Read { input_file, output } => commands::read::run(input_file, &output),
        Commands::Banks { action } => match action {
            BanksAction::List {
                banks,
                bank_presets,
            } => commands::banks::list(banks, bank_presets),
            BanksAction::Resolve {
                ifsc,
                banks,
                bank_presets,
            } => commands::banks::resolve(&ifsc, banks, bank_presets),
            BanksAction::Validate { file } => commands::banks::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
