mod cli;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use optibots_client::domain::NewTender;
use optibots_client::session::CliNavigator;
use optibots_client::{render, AdminClient, App, ApplicantClient, AuthController, Settings};

use cli::{AdminCommands, ApplicantCommands, Cli, Commands};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("optibots error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = Settings::from_env()?;
    optibots_client::logging::init_logging(&settings.env);

    let app = App::with_file_store(settings, Arc::new(CliNavigator::new()))?;
    let auth = AuthController::new(app.http.clone());

    // The page-load auto-check: with a stored token, resolve the current
    // user up front so role redirects behave like the browser client did.
    // Auth commands manage the session themselves.
    if !matches!(&cli.command, Commands::Signup { .. } | Commands::Login { .. }) {
        auth.bootstrap().await?;
    }

    match cli.command {
        Commands::Signup {
            email,
            password,
            confirm,
            role,
        } => {
            auth.signup(&email, &password, &confirm, role).await?;
            println!("Account created, please login");
        }
        Commands::Login { email, password } => {
            let user = auth.login(&email, &password).await?;
            println!("Logged in as {} ({})", user.email, user.role);
        }
        Commands::Logout => {
            auth.logout()?;
            println!("Logged out");
        }
        Commands::Whoami => {
            let user = auth.current_user().await?;
            println!("{} ({})", user.email, user.role);
        }
        Commands::Download { file, output } => {
            let bytes = app.http.get_bytes(&format!("/download/{file}")).await?;
            let path = output.unwrap_or_else(|| file.clone().into());
            tokio::fs::write(&path, bytes).await?;
            println!("Saved {}", path.display());
        }
        Commands::Admin { command } => run_admin(&app, command).await?,
        Commands::Applicant { command } => run_applicant(&app, command).await?,
    }

    Ok(())
}

async fn run_admin(app: &App, command: AdminCommands) -> Result<()> {
    let admin = AdminClient::new(app.http.clone());

    match command {
        AdminCommands::Tenders => {
            println!("{}", render::tenders(&admin.list_tenders().await?));
        }
        AdminCommands::Applications { limit } => {
            let apps = admin.recent_applications(limit).await?;
            println!("{}", render::recent_applications(&apps));
        }
        AdminCommands::Create {
            title,
            description,
            file,
        } => {
            let created = admin
                .create_tender(NewTender {
                    title,
                    description,
                    file,
                })
                .await?;
            println!("Tender published (ID {})", created.id);
        }
        AdminCommands::Application { id } => {
            println!("{}", render::application(&admin.application(id).await?));
        }
        AdminCommands::Offer { id, message } => {
            let response = admin.send_offer(id, &message).await?;
            println!(
                "Offer sent (application {} now {})",
                response.application_id, response.status
            );
        }
        AdminCommands::Summary { tender_id } => {
            // The backend consults an LLM; this can take a while.
            println!("Running AI evaluation...");
            let outcome = admin.run_summary(tender_id).await?;
            println!("{}", render::summary(&outcome));
        }
        AdminCommands::Accepted => {
            println!("{}", render::accepted_offers(&admin.accepted_offers().await?));
        }
    }

    Ok(())
}

async fn run_applicant(app: &App, command: ApplicantCommands) -> Result<()> {
    let applicant = ApplicantClient::new(app.http.clone());

    match command {
        ApplicantCommands::Tenders => {
            println!("{}", render::public_tenders(&applicant.list_tenders().await?));
        }
        ApplicantCommands::Apply { tender_id, text } => {
            let submitted = applicant.submit_application(tender_id, &text).await?;
            println!("Application submitted (ID {})", submitted.application_id);
        }
        ApplicantCommands::Notifications => {
            println!("{}", render::notifications(&applicant.notifications().await?));
        }
        ApplicantCommands::Respond {
            application_id,
            decision,
        } => {
            let (response, remaining) = applicant.respond_offer(application_id, decision).await?;
            println!(
                "Offer {} (application {} now {})",
                decision, response.application_id, response.status
            );
            println!("{}", render::notifications(&remaining));
        }
        ApplicantCommands::Accepted => {
            println!("{}", render::accepted_offers(&applicant.accepted().await?));
        }
    }

    Ok(())
}
