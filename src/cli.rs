use clap::{Parser, Subcommand};
use log::info;
use musicbingo::clients::MusicBingoClient;
use musicbingo::config::WEBSITE;
use musicbingo::locale::Localizer;
use musicbingo::Result;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "musicbingo")]
#[command(version, about = "Fetch MusicBingo cards and site data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a playlist
    Playlist { id: String },
    /// Fetch the albums of an artist
    Artist { id: String },
    /// Fetch an album
    Album { id: String },
    /// Fetch a track
    Track { id: String },
    /// Print the site metadata
    Site,
    /// Print the localized message for a key
    Translate {
        key: String,
        /// Locale to use, e.g. "nl". Defaults to the system locale
        #[arg(long)]
        locale: Option<String>,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Playlist { id } => print_json(&client()?.get_playlist(id).await?)?,
        Commands::Artist { id } => print_json(&client()?.get_artist(id).await?)?,
        Commands::Album { id } => print_json(&client()?.get_album(id).await?)?,
        Commands::Track { id } => print_json(&client()?.get_track(id).await?)?,
        Commands::Site => print_json(&WEBSITE)?,
        Commands::Translate { key, locale } => {
            let mut localizer = Localizer::new();
            localizer.setup_locale()?;
            if locale.is_some() {
                localizer.set_locale(locale.as_deref());
            }
            println!("{}", localizer.translate(key));
        }
    }
    Ok(())
}

fn client() -> Result<MusicBingoClient> {
    let client = MusicBingoClient::try_default()?;
    info!("Using backend {}", client.base_url());
    Ok(client)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
