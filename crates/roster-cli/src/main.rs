mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use roster_core::{IngestOptions, SearchColumn};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Merge student record files (CSV, Excel, JSON, PDF) and search them"
)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge the given files and print the combined table
    Load {
        /// Student data files (csv, xlsx, json, pdf)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        read: ReadArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the combined table to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Merge the given files and search them by one column
    Search {
        /// Student data files (csv, xlsx, json, pdf)
        files: Vec<PathBuf>,

        #[command(flatten)]
        read: ReadArgs,

        /// Column to search
        #[arg(short, long, value_enum, default_value = "roll-no")]
        by: SearchBy,

        /// Search term (exact match, case-insensitive). Omit to skip the search
        #[arg(short, long)]
        term: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Do not print the expected data format
        #[arg(long)]
        no_schema: bool,
    },
    /// Print the expected data format
    Schema,
}

#[derive(clap::Args)]
struct ReadArgs {
    /// CSV field delimiter
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Worksheet to read from xlsx files (default: first sheet)
    #[arg(long, value_name = "NAME")]
    sheet: Option<String>,
}

impl ReadArgs {
    fn into_options(self) -> Result<IngestOptions, String> {
        let delimiter = u8::try_from(self.delimiter)
            .map_err(|_| format!("delimiter '{}' must be a single-byte character", self.delimiter))?;
        Ok(IngestOptions {
            delimiter,
            sheet: self.sheet,
        })
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SearchBy {
    RollNo,
    Name,
    FatherName,
    Gender,
}

impl From<SearchBy> for SearchColumn {
    fn from(by: SearchBy) -> Self {
        match by {
            SearchBy::RollNo => SearchColumn::RollNo,
            SearchBy::Name => SearchColumn::Name,
            SearchBy::FatherName => SearchColumn::FatherName,
            SearchBy::Gender => SearchColumn::Gender,
        }
    }
}

fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("roster_core=debug,roster=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("roster=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn read_options(read: ReadArgs) -> IngestOptions {
    match read.into_options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Load {
            files,
            read,
            output,
            out,
        } => {
            let options = read_options(read);
            commands::load::run(&files, &options, &output, out)
        }
        Commands::Search {
            files,
            read,
            by,
            term,
            output,
            no_schema,
        } => {
            let options = read_options(read);
            commands::search::run(
                &files,
                &options,
                by.into(),
                term.as_deref(),
                &output,
                !no_schema,
            )
        }
        Commands::Schema => commands::schema::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
