use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Options {
    /// Base URL of the portal API; runs on mock data when unset
    #[arg(long, env = "PORTAL_API_BASE_URL", global = true)]
    pub base_url: Option<String>,
    /// File the auth token is kept in between runs
    #[arg(
        long,
        env = "PORTAL_TOKEN_FILE",
        default_value = ".portal_token",
        global = true
    )]
    pub token_file: PathBuf,
    /// Semester to list available courses for (e.g. fall2024)
    #[arg(long, global = true)]
    pub semester: Option<String>,
    /// Format to output data
    #[arg(long, value_enum, default_value_t = DataFormat::Json, global = true)]
    pub format: DataFormat,
    /// Pretty-print the output
    #[arg(long, global = true)]
    pub pretty: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show enrolled and available courses
    Courses {
        /// Only list available courses whose code or name contains this
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Enroll in courses, in order (e.g. CS402 "eng 201")
    Enroll {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Drop courses, in order
    Drop {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Check prerequisites and schedule conflicts for a course
    Check { code: String },
    /// Sign in and remember the token
    Login { email: String, password: String },
    /// Sign out and forget the token
    Logout,
    /// Show the signed in user
    Whoami,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum DataFormat {
    Json,
}
