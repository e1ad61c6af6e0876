use clap::{ArgAction, Parser, Subcommand};
use rollbook::model::{ViewMode, Year};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rollbook", bin_name = "rollbook", version)]
#[command(about = "Local-first student record manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new student
    #[command(alias = "create", display_order = 1)]
    Add {
        /// Full name (letters and spaces)
        #[arg(long)]
        name: String,

        /// Roll number, unique across all students
        #[arg(long)]
        roll_no: String,

        /// Department
        #[arg(long)]
        department: String,

        /// Academic year (1-5)
        #[arg(long)]
        year: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Phone number (10-15 digits)
        #[arg(long)]
        phone: String,
    },

    /// List students
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Search name, roll number, department and email
        #[arg(short, long)]
        search: Option<String>,

        /// Only show this department (exact match)
        #[arg(short, long)]
        department: Option<String>,

        /// Only show this academic year
        #[arg(short, long)]
        year: Option<Year>,

        /// Sort key: name-asc, name-desc, roll-asc, roll-desc, year-asc, year-desc
        #[arg(long)]
        sort: Option<String>,

        /// Layout: table or cards
        #[arg(long)]
        view: Option<ViewMode>,
    },

    /// Show full details for one or more students
    #[command(alias = "v", display_order = 3)]
    View {
        /// Student ids or roll numbers
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Change fields of a student; omitted fields keep their value
    #[command(alias = "e", display_order = 4)]
    Edit {
        /// Student id or roll number
        selector: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        roll_no: Option<String>,

        #[arg(long)]
        department: Option<String>,

        #[arg(long)]
        year: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Permanently delete a student
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Student id or roll number
        selector: String,
    },

    /// Replace all students with the contents of a JSON export
    #[command(display_order = 10)]
    Import {
        /// Path to a JSON array of student records
        path: PathBuf,
    },

    /// Export all students as JSON
    #[command(display_order = 11)]
    Export {
        /// Output file (defaults to rollbook-data-<date>.json)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Write the JSON to stdout instead of a file
        #[arg(long)]
        stdout: bool,
    },

    /// Load a sample student when there are no students yet
    #[command(display_order = 12)]
    Sample,

    /// List known and in-use departments
    #[command(display_order = 20)]
    Departments,

    /// Show record counts
    #[command(display_order = 21)]
    Stats,

    /// Show or change the colour theme (light, dark, toggle)
    #[command(display_order = 22)]
    Theme { value: Option<String> },

    /// Get or set configuration
    #[command(display_order = 23)]
    Config {
        /// Configuration key (default-sort, default-view, export-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
