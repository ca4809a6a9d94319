//! Command-line surface: one subcommand per user gesture the browser client
//! exposed as a page action.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use optibots_client::domain::{OfferDecision, Role};

#[derive(Parser)]
#[command(name = "optibots", about = "Client for the OPTIBOTS tender platform")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Must match --password
        #[arg(long)]
        confirm: String,
        /// admin or applicant
        #[arg(long, value_parser = parse_role)]
        role: Role,
    },
    /// Log in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Drop the stored session token
    Logout,
    /// Show the currently authenticated user
    Whoami,
    /// Fetch a tender attachment
    Download {
        /// File name as listed on the tender
        file: String,
        /// Output path (defaults to the file name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Admin operations
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
    /// Applicant operations
    Applicant {
        #[command(subcommand)]
        command: ApplicantCommands,
    },
}

#[derive(Subcommand)]
pub enum AdminCommands {
    /// List published tenders
    Tenders,
    /// List recent applications
    Applications {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Publish a new tender
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Optional attachment
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Review one application
    Application { id: i64 },
    /// Send an offer to an application
    Offer {
        id: i64,
        #[arg(long)]
        message: String,
    },
    /// Run the AI comparison for a tender
    Summary { tender_id: i64 },
    /// List accepted offers
    Accepted,
}

#[derive(Subcommand)]
pub enum ApplicantCommands {
    /// List open tenders
    Tenders,
    /// Apply to a tender
    Apply {
        tender_id: i64,
        #[arg(long)]
        text: String,
    },
    /// List pending offers
    Notifications,
    /// Accept or reject an offer
    Respond {
        application_id: i64,
        decision: OfferDecision,
    },
    /// List offers you have accepted
    Accepted,
}

fn parse_role(s: &str) -> Result<Role, String> {
    match s.to_lowercase().as_str() {
        "admin" => Ok(Role::Admin),
        "applicant" => Ok(Role::Applicant),
        other => Err(format!("role must be 'admin' or 'applicant', got '{other}'")),
    }
}
