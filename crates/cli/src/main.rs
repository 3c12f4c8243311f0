use std::path::PathBuf;
use std::sync::Arc;

use api_shared::CreateReferralReq;
use clap::{Parser, Subcommand};
use referral_core::{
    config::referrals_file_from_env_value, CoreConfig, DepartmentDirectory, ReferralService,
};

#[derive(Parser)]
#[command(name = "referrals")]
#[command(about = "Hospital referrals CLI")]
struct Cli {
    /// Referrals CSV file (defaults to $REFERRALS_CSV_PATH, then referrals.csv)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the referrals file with its header if it is missing or empty
    Init,
    /// Create a referral
    Create {
        /// Patient ID (PAT followed by at least six digits)
        patient_id: String,
        /// Department the patient is currently under
        current_department: String,
        /// Department the patient is referred to
        referred_department: String,
        /// Referring doctor ID (DOC followed by at least six digits)
        referred_by: String,
        /// Reason for the referral
        #[arg(long, default_value = "")]
        reason: String,
        /// Free-text notes
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Show a referral by ID
    Get {
        /// Referral ID (REF followed by six digits)
        referral_id: String,
    },
    /// List departments and specialist availability
    Departments,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let referrals_file = cli
        .file
        .unwrap_or_else(|| referrals_file_from_env_value(std::env::var("REFERRALS_CSV_PATH").ok()));
    let cfg = CoreConfig::new(referrals_file, DepartmentDirectory::standard())?;
    let service = ReferralService::new(Arc::new(cfg));

    match cli.command {
        Some(Commands::Init) => {
            service.initialise_store()?;
            println!(
                "Referrals file ready: {}",
                service.store().path().display()
            );
        }
        Some(Commands::Create {
            patient_id,
            current_department,
            referred_department,
            referred_by,
            reason,
            notes,
        }) => {
            let req = CreateReferralReq {
                patient_id,
                current_department,
                referred_department,
                reason,
                referred_by,
                notes,
            };
            match service.create(req) {
                Ok(res) => {
                    println!("{} ID: {}", res.message, res.referral_id);
                    println!("{}", res.notification);
                }
                Err(e) => eprintln!("Error creating referral: {}", e),
            }
        }
        Some(Commands::Get { referral_id }) => match service.get(&referral_id) {
            Ok(record) => println!("{}", serde_json::to_string_pretty(&record)?),
            Err(e) => eprintln!("Error reading referral {}: {}", referral_id, e),
        },
        Some(Commands::Departments) => {
            for department in service.departments() {
                let status = if department.specialist_available {
                    "available"
                } else {
                    "unavailable"
                };
                println!("{}: {}", department.name, status);
            }
        }
        None => {
            println!("Use 'referrals --help' for commands");
        }
    }

    Ok(())
}
