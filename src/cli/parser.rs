use crate::core::detail::DetailTab;
use crate::core::query::SortKey;
use crate::export::ExportFormat;
use crate::models::record::RecordKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rFarmlog
/// CLI application to keep livestock farm records with SQLite
#[derive(Parser)]
#[command(
    name = "rfarmlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A farm record-keeping CLI: livestock, breeding, health, feeding, production and inventory in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a record
    Add {
        /// Record kind
        #[arg(value_enum)]
        kind: RecordKind,

        #[arg(long = "id", help = "Record id (default: next free id, e.g. BR-0004)")]
        id: Option<String>,

        #[arg(
            long = "field",
            short = 'f',
            value_name = "KEY=VALUE",
            help = "Field assignment, repeatable (see `fields <KIND>`)"
        )]
        fields: Vec<String>,
    },

    /// Edit fields of an existing record
    Edit {
        /// Record id
        id: String,

        #[arg(long = "field", short = 'f', value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },

    /// List records of one kind
    List {
        /// Record kind
        #[arg(value_enum)]
        kind: RecordKind,

        #[arg(long, short, help = "Case-insensitive match on id and names")]
        search: Option<String>,

        #[arg(
            long = "filter",
            value_name = "DIM=VALUE",
            help = "Categorical filter, repeatable; same dimension ORs, different dimensions AND"
        )]
        filters: Vec<String>,

        #[arg(long, value_enum, help = "Sort key (default from config)")]
        sort: Option<SortKey>,

        #[arg(long, conflicts_with = "desc")]
        asc: bool,

        #[arg(long)]
        desc: bool,

        #[arg(long, short, help = "Restrict to YYYY, YYYY-MM, YYYY-MM-DD or a start:end range")]
        period: Option<String>,
    },

    /// Show one record, one tab at a time
    Show {
        /// Record id
        id: String,

        #[arg(long, value_enum, default_value = "overview")]
        tab: DetailTab,
    },

    /// Delete a record by id
    Del {
        /// Record id
        id: String,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Run a calculator without storing anything
    Calc {
        #[command(subcommand)]
        calc: CalcCommand,
    },

    /// Describe the form fields of a record kind
    Fields {
        #[arg(value_enum)]
        kind: RecordKind,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export records of one kind
    Export {
        #[arg(long, value_enum)]
        kind: RecordKind,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum CalcCommand {
    /// Expected birth date from species and service date
    Gestation {
        #[arg(long)]
        species: String,

        #[arg(long = "service-date", value_name = "YYYY-MM-DD")]
        service_date: String,
    },

    /// Sale price minus market price
    Profit {
        #[arg(long, allow_hyphen_values = true)]
        sale: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        market: Option<String>,
    },

    /// Weight gained per day up to the sale date
    WeightGain {
        #[arg(long, allow_hyphen_values = true)]
        gain: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        from: String,

        #[arg(long = "sale-date", value_name = "YYYY-MM-DD")]
        sale_date: Option<String>,
    },

    /// Quantity per head
    Production {
        #[arg(long, allow_hyphen_values = true)]
        quantity: Option<String>,

        #[arg(long = "head-count")]
        head_count: Option<u32>,
    },
}
