use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use model_fields::drivers::SqliteConnection;
use model_fields::orm::TableHandle;
use model_fields::output::OutputFormat;
use model_fields::{classify_fields, ClassifyOptions, FieldCategory};

#[derive(Parser)]
#[command(name = "model-fields")]
#[command(
    author,
    version,
    about = "Classify table columns into required, nullable, primary and default fields"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the columns of a table in a SQLite database
    Fields {
        /// Path to the SQLite database file
        database: PathBuf,

        /// Table to classify
        table: String,

        /// Get all fields
        #[arg(short = 'a', long)]
        all: bool,

        /// Get required fields
        #[arg(short = 'r', long)]
        required: bool,

        /// Get nullable fields
        #[arg(short = 'N', long)]
        nullable: bool,

        /// Get primary key fields
        #[arg(short = 'p', long)]
        primary: bool,

        /// Get default fields (application and database)
        #[arg(short = 'd', long)]
        default: bool,

        /// Get application default fields
        #[arg(short = 'A', long)]
        app_default: bool,

        /// Get database default fields
        #[arg(short = 'D', long)]
        db_default: bool,

        /// Output format (list|json|table)
        #[arg(long, default_value = "list")]
        format: String,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fields {
            database,
            table,
            all,
            required,
            nullable,
            primary,
            default,
            app_default,
            db_default,
            format,
            verbose,
        } => {
            let Some(format) = OutputFormat::parse(&format) else {
                bail!("Invalid format '{}'. Use: list, json, or table.", format);
            };

            let category = select_category(&[
                (all, FieldCategory::All),
                (required, FieldCategory::Required),
                (nullable, FieldCategory::Nullable),
                (primary, FieldCategory::Primary),
                (default, FieldCategory::Default),
                (app_default, FieldCategory::ApplicationDefault),
                (db_default, FieldCategory::DatabaseDefault),
            ])?;

            let connection = SqliteConnection::open(&database)?;
            if !connection.table_exists(&table)? {
                bail!("Table '{}' not found in database.", table);
            }

            let options = ClassifyOptions {
                category,
                format,
                verbose,
            };

            let rendered = classify_fields(&connection, &TableHandle::new(table), &options)?;
            println!("{}", rendered);
        }
    }

    Ok(())
}

/// At most one category flag may be set; none means all fields.
fn select_category(flags: &[(bool, FieldCategory)]) -> Result<FieldCategory> {
    let selected: Vec<FieldCategory> = flags
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, category)| *category)
        .collect();

    match selected.as_slice() {
        [] => Ok(FieldCategory::All),
        [category] => Ok(*category),
        _ => bail!("Please specify only one field type option."),
    }
}
