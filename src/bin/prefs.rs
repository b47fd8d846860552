use clap::{Parser, Subcommand};
use folio::utils::logger;
use folio::{PreferenceStore, SiteConfig};

#[derive(Parser)]
#[command(name = "folio-prefs")]
#[command(about = "Read or change the saved theme and accent color")]
struct Args {
    /// Path to a site TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Override [preferences].path
    #[arg(long)]
    path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the saved preferences
    Show,
    /// Switch between light and dark theme
    ToggleTheme,
    /// Save an accent color such as #ff6600
    SetAccent { color: String },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_cli_logger(false);

    let site = match &args.config {
        Some(path) => SiteConfig::from_file(path)?,
        None => SiteConfig::builtin(),
    };
    let path = args.path.unwrap_or(site.preferences.path);
    let store = PreferenceStore::new(path);

    let result = match args.command {
        Command::Show => store.load().map(|prefs| {
            println!("theme: {}", prefs.theme);
            println!(
                "accent: {}",
                prefs.accent_color.as_deref().unwrap_or("(default)")
            );
        }),
        Command::ToggleTheme => store
            .toggle_theme()
            .map(|theme| println!("theme: {}", theme)),
        Command::SetAccent { color } => store
            .set_accent(&color)
            .map(|()| println!("accent: {}", color)),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    Ok(())
}
