use clap::Parser;
use folio::adapters::github::http_client;
use folio::utils::{logger, validation::Validate};
use folio::{ContactClient, ContactMessage, ContactOutcome, SiteConfig};

#[derive(Parser)]
#[command(name = "folio-contact")]
#[command(about = "Submit the portfolio contact form, falling back to a mailto link")]
struct Args {
    /// Path to a site TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    message: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let site = match &args.config {
        Some(path) => SiteConfig::from_file(path)?,
        None => SiteConfig::builtin(),
    };
    if let Err(e) = site.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let client = ContactClient::new(
        http_client()?,
        &site.contact.endpoint,
        &site.contact.recipient,
    );
    let message = ContactMessage {
        name: args.name,
        email: args.email,
        message: args.message,
    };

    match client.submit(&message).await {
        ContactOutcome::Sent => {
            println!("Thank you! Your message has been sent.");
        }
        ContactOutcome::Fallback { mailto, reason } => {
            eprintln!("⚠️ Could not send through the form ({})", reason);
            eprintln!("📧 Open this link in your mail client instead:");
            println!("{}", mailto);
        }
    }

    Ok(())
}
