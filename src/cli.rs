use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{info, warn};
use musical_timeline::catalog::Catalog;
use musical_timeline::composer::remote::RemoteComposer;
use musical_timeline::config::ConfigBuilder;
use musical_timeline::errors::{Error, Result};
use musical_timeline::view::App;
use musical_timeline::view::panel::DetailPanel;
use musical_timeline::view::timeline::{self, render_badge};

#[derive(Parser)]
#[command(name = "musical-timeline")]
#[command(version, about = "Browse musical decades and generate songs", long_about = None)]
struct Cli {
    /// Decade data file to use instead of the built-in one
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Print genre badges without colours
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the timeline
    Timeline {},
    /// Show one decade in detail
    Show {
        id: String,
        /// Start the player of this hit (0-based)
        #[arg(long)]
        play: Option<usize>,
    },
    /// Write a song for a decade
    Compose {
        id: String,
        #[arg(long)]
        genre: String,
        #[arg(long)]
        keyword: String,
        /// Base URL of an http_api server; generates locally when absent
        #[arg(long)]
        remote: Option<String>,
    },
    /// Generate music through an http_api server and save the audio
    Music {
        #[arg(long)]
        prompt: String,
        #[arg(long, default_value_t = 30)]
        duration: u32,
        #[arg(long)]
        remote: String,
        #[arg(long)]
        out: PathBuf,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = ConfigBuilder::from_env().build()?;
    let data = cli.data.or(config.data_path);
    let catalog = Catalog::load(data.as_deref()).await?;
    let ansi = !cli.no_color;

    match cli.command {
        Commands::Timeline {} => print!("{}", timeline::render(&catalog, ansi)),
        Commands::Show { id, play } => show(&catalog, &id, play, ansi)?,
        Commands::Compose {
            id,
            genre,
            keyword,
            remote,
        } => compose(&catalog, &id, genre, keyword, remote.as_deref()).await?,
        Commands::Music {
            prompt,
            duration,
            remote,
            out,
        } => {
            let audio = RemoteComposer::new(remote)
                .generate_music(&prompt, duration)
                .await?;
            tokio::fs::write(&out, &audio).await?;
            info!("Wrote {} bytes of audio to {out:?}", audio.len());
        }
    }
    Ok(())
}

fn open_panel<'a, 'c>(app: &'a mut App<'c>, id: &str) -> Result<&'a mut DetailPanel<'c>> {
    app.select_id(id)
        .ok_or_else(|| Error::UnknownDecade(id.to_string()))
}

fn show(catalog: &Catalog, id: &str, play: Option<usize>, ansi: bool) -> Result<()> {
    let mut app = App::new(catalog);
    let panel = open_panel(&mut app, id)?;
    let player = match play {
        Some(index) => {
            if index >= panel.decade().all_hits.len() {
                return Err(Error::UnknownHit {
                    decade: id.to_string(),
                    index,
                });
            }
            let url = panel.toggle_hit(index);
            if url.is_none() {
                warn!("Hit #{index} has no playable video");
            }
            url
        }
        None => None,
    };

    let decade = panel.decade();
    println!("{} {}  ({})", decade.icon, decade.name, decade.years);
    println!("{}\n", decade.historical_note);
    let badges: Vec<_> = decade.genres.iter().map(|g| render_badge(g, ansi)).collect();
    println!("סגנונות מוזיקליים: {}\n", badges.join(" "));
    println!("להיטים עיקריים:");
    for (i, row) in panel.hit_rows().iter().enumerate() {
        let label = if row.video_id.is_some() { row.label() } else { "" };
        println!("  {i}. ♪ {} - {}  {label}", row.hit.title, row.hit.artist);
    }
    if let Some(url) = player {
        println!("\n{url}");
    }
    Ok(())
}

async fn compose(
    catalog: &Catalog,
    id: &str,
    genre: String,
    keyword: String,
    remote: Option<&str>,
) -> Result<()> {
    let mut app = App::new(catalog);
    let panel = open_panel(&mut app, id)?;
    if !panel.decade().genres.contains(&genre) {
        warn!("{genre} is not one of the genres of {}", panel.decade().name);
    }
    panel.start_composing();
    panel.select_genre(genre);
    panel.set_keyword(keyword);

    let song = match remote {
        Some(url) => {
            let (genre, keyword) = panel
                .composition_input()
                .map_err(|e| Error::InvalidInput(e.to_string()))?;
            let song = RemoteComposer::new(url)
                .generate_song(genre, keyword, panel.decade())
                .await?;
            panel
                .show_result(song)
                .map_err(|e| Error::InvalidInput(e.to_string()))?
        }
        None => panel
            .generate()
            .map_err(|e| Error::InvalidInput(e.to_string()))?,
    };

    println!("{}", song.copy_text());
    Ok(())
}
