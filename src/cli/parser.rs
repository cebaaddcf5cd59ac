use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for lessonplanner
#[derive(Parser)]
#[command(
    name = "lessonplanner",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple lesson planner: record lessons, track completion and render them as tables or HTML",
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

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a lesson plan
    Add {
        #[arg(long = "teacher", help = "Teacher name")]
        teacher: Option<String>,

        #[arg(long = "subject", help = "Subject, e.g. Mathematics")]
        subject: Option<String>,

        #[arg(long = "class", help = "Class / section, e.g. 10-B")]
        class_section: Option<String>,

        #[arg(long = "topic", help = "Lesson topic")]
        topic: Option<String>,

        #[arg(
            long = "type",
            help = "Lesson type, e.g. Lecture, Lab, \"Exam / Test\""
        )]
        lesson_type: Option<String>,

        #[arg(long = "date", help = "Lesson date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "status", help = "Planned (default) or Completed")]
        status: Option<String>,
    },

    /// List lesson plans sorted by date
    List {
        #[arg(
            long,
            short,
            help = "Only plans whose subject, class or topic contains this text"
        )]
        filter: Option<String>,

        #[arg(long = "created", help = "Show the creation timestamp column")]
        created: bool,
    },

    /// Mark a lesson plan complete / incomplete
    Toggle {
        /// Lesson plan ID (see `list`)
        id: String,
    },

    /// Delete a lesson plan by ID
    Del {
        /// Lesson plan ID (see `list`)
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show dashboard counts
    Stats,

    /// Export lesson plans to HTML, JSON or CSV
    Export {
        #[arg(long, value_enum, default_value = "html")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Only export matching plans")]
        filter: Option<String>,

        #[arg(long, help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
