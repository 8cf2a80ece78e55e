use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use soundscout::tmdb::adapter;
use soundscout::view::{
    to_error_notice_vm, to_movie_card_vm, to_music_card_vm, MovieCardVm, MusicCardVm,
    UNKNOWN_ARTIST,
};
use soundscout::{
    AppError, Config, DeezerClient, MovieExplorer, MovieQuery, SoundtrackResolver, TmdbClient,
};

#[derive(Parser)]
#[command(name = "soundscout")]
#[command(about = "Find a movie and discover its soundtrack")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    keys: ApiKeys,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ApiKeys {
    /// TMDB API key (or set TMDB_API_KEY env var)
    #[arg(long, env = "TMDB_API_KEY", global = true, hide_env_values = true)]
    tmdb_api_key: Option<String>,

    /// RapidAPI key for the Deezer gateway (or set RAPIDAPI_KEY env var)
    #[arg(long, env = "RAPIDAPI_KEY", global = true, hide_env_values = true)]
    rapidapi_key: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List popular movies
    Popular {
        /// Result page (starts at 1)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// Search movies by title
    Search {
        query: String,

        /// Result page (starts at 1)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// Show details for one movie
    Details {
        /// TMDB movie id
        movie_id: u64,

        /// Also dump the provider's raw soundtrack record
        #[arg(long)]
        soundtrack: bool,
    },

    /// Search soundtrack tracks for a movie title
    Soundtrack { title: String },

    /// Search artists on Deezer
    Artist { query: String },

    /// Search albums on Deezer
    Album { query: String },

    /// Show one Deezer track
    Track {
        /// Deezer track id
        track_id: u64,
    },

    /// Search a movie and show the soundtrack of the best hit
    Explore {
        query: String,

        /// Result page (starts at 1)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// Show setup guide
    Setup,
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    match cli.command {
        Commands::Setup => show_setup_guide(),
        command => run(command, &load_config(&cli.keys)?).await?,
    }

    Ok(())
}

async fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Popular { page } => popular(config, page).await,
        Commands::Search { query, page } => search(config, &query, page).await,
        Commands::Details {
            movie_id,
            soundtrack,
        } => details(config, movie_id, soundtrack).await,
        Commands::Soundtrack { title } => soundtrack(config, &title).await,
        Commands::Artist { query } => artists(config, &query).await,
        Commands::Album { query } => albums(config, &query).await,
        Commands::Track { track_id } => track(config, track_id).await,
        Commands::Explore { query, page } => explore(config, &query, page).await,
        Commands::Setup => {
            show_setup_guide();
            Ok(())
        }
    }
}

fn load_config(keys: &ApiKeys) -> Result<Config> {
    let mut config = Config::from_env().context("Failed to load configuration")?;

    if let Some(key) = &keys.tmdb_api_key {
        config.tmdb_api_key = key.clone();
    }
    if let Some(key) = &keys.rapidapi_key {
        config.rapidapi_key = key.clone();
    }

    let missing = config.get_missing_config();
    if !missing.is_empty() {
        println!("{}", "Missing configuration:".yellow());
        for item in &missing {
            println!("   - {}", item);
        }
        println!(
            "{}",
            "Requests to the affected provider will be rejected. Run `soundscout setup` for help."
                .yellow()
        );
    }

    Ok(config)
}

async fn with_spinner<T, F>(message: &str, task: F) -> Result<T>
where
    F: Future<Output = T>,
{
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    let output = task.await;

    pb.finish_and_clear();
    Ok(output)
}

/// Prints the error card for a failed movie request and exits.
fn fail_movie_request(err: AppError) -> ! {
    let message = match err.status() {
        Some(401) | Some(403) => "The movie provider rejected the API key".to_string(),
        _ => err.to_string(),
    };
    let notice = to_error_notice_vm(None, Some(&message), true);

    println!("{}", notice.title.red().bold());
    println!("   {}", notice.message);
    if notice.show_retry {
        println!("{}", "Please try again.".yellow());
    }
    std::process::exit(1);
}

async fn popular(config: &Config, page: u32) -> Result<()> {
    println!("{}", "Popular Movies".cyan().bold());
    println!("{}", "=".repeat(50));

    let client = TmdbClient::new(config);

    let movies = match with_spinner("Fetching popular movies...", client.get_popular_movies(page))
        .await?
    {
        Ok(movies) => movies,
        Err(e) => fail_movie_request(e),
    };

    let cards: Vec<MovieCardVm> = adapter::movies_from_page(movies)
        .iter()
        .map(to_movie_card_vm)
        .collect();
    print_movie_list(&cards);
    Ok(())
}

async fn search(config: &Config, query: &str, page: u32) -> Result<()> {
    let query = MovieQuery::new(query, page)?;

    println!("{}", format!("Movies matching \"{}\"", query.query).cyan().bold());
    println!("{}", "=".repeat(50));

    let client = TmdbClient::new(config);

    let request = client.search_movies(&query.query, query.page);
    let movies = match with_spinner("Searching movies...", request).await? {
        Ok(movies) => movies,
        Err(e) => fail_movie_request(e),
    };

    let total = movies.total_results;
    let cards: Vec<MovieCardVm> = adapter::movies_from_page(movies)
        .iter()
        .map(to_movie_card_vm)
        .collect();
    print_movie_list(&cards);
    println!("\n{}", format!("Page {} - {} results in total", query.page, total).cyan());

    Ok(())
}

async fn details(config: &Config, movie_id: u64, with_soundtrack: bool) -> Result<()> {
    let client = TmdbClient::new(config);

    let request = client.get_movie_details(movie_id);
    let details = match with_spinner("Fetching movie details...", request).await? {
        Ok(details) => details,
        Err(e) => fail_movie_request(e),
    };

    let tagline = details.tagline.clone().unwrap_or_default();
    let runtime = details.runtime;
    let genres: Vec<String> = details.genres.iter().map(|g| g.name.clone()).collect();
    let card = to_movie_card_vm(&adapter::summary_from_details(details));

    print_movie_card(&card);
    if !tagline.is_empty() {
        println!("   {}", tagline.italic());
    }
    if let Some(minutes) = runtime {
        println!("   Runtime: {}h {:02}m", minutes / 60, minutes % 60);
    }
    if !genres.is_empty() {
        println!("   Genres: {}", genres.join(", "));
    }

    if with_soundtrack {
        match client.get_movie_soundtrack(movie_id).await {
            Ok(raw) => println!("\n{}", serde_json::to_string_pretty(&raw)?),
            Err(e) => println!("\n{} {}", "Soundtrack record unavailable:".yellow(), e),
        }
    }

    Ok(())
}

async fn artists(config: &Config, query: &str) -> Result<()> {
    let client = DeezerClient::new(config);

    let artists = with_spinner("Searching artists...", client.search_artist(query))
        .await?
        .context("Artist search failed")?;

    if artists.data.is_empty() {
        println!("{}", "No artists found".yellow());
        return Ok(());
    }

    for (i, artist) in artists.data.iter().enumerate() {
        println!(
            "{:2}. {} ({} albums, {} fans)",
            i + 1,
            artist.name.green(),
            artist.nb_album,
            artist.nb_fan
        );
        println!("     {}", artist.link);
    }

    Ok(())
}

async fn albums(config: &Config, query: &str) -> Result<()> {
    let client = DeezerClient::new(config);

    let albums = with_spinner("Searching albums...", client.search_album(query))
        .await?
        .context("Album search failed")?;

    if albums.data.is_empty() {
        println!("{}", "No albums found".yellow());
        return Ok(());
    }

    for (i, album) in albums.data.iter().enumerate() {
        let artist = album
            .artist
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .unwrap_or(UNKNOWN_ARTIST);
        println!(
            "{:2}. {} - {} ({} tracks)",
            i + 1,
            album.title.green(),
            artist,
            album.nb_tracks
        );
        println!("     {}", album.link);
    }

    Ok(())
}

async fn track(config: &Config, track_id: u64) -> Result<()> {
    let client = DeezerClient::new(config);

    let track = with_spinner("Fetching track...", client.get_track_details(track_id))
        .await?
        .context("Track lookup failed")?;

    print_track_list(&[to_music_card_vm(&track)]);
    Ok(())
}

async fn soundtrack(config: &Config, title: &str) -> Result<()> {
    println!("{}", format!("Soundtrack for \"{}\"", title).cyan().bold());
    println!("{}", "=".repeat(50));

    let resolver = SoundtrackResolver::new(DeezerClient::new(config));

    match with_spinner("Searching soundtrack...", resolver.resolve_soundtrack(title)).await? {
        Some(tracks) => {
            let cards: Vec<MusicCardVm> = tracks.iter().map(to_music_card_vm).collect();
            print_track_list(&cards);
        }
        None => println!("{}", "No soundtrack found".yellow()),
    }

    Ok(())
}

async fn explore(config: &Config, query: &str, page: u32) -> Result<()> {
    let query = MovieQuery::new(query, page)?;

    println!("{}", "Movie Soundtrack Explorer".cyan().bold());
    println!("{}", "=".repeat(50));

    let explorer = MovieExplorer::new(TmdbClient::new(config), DeezerClient::new(config));

    let exploration = match with_spinner("Exploring...", explorer.explore(&query)).await? {
        Ok(exploration) => exploration,
        Err(e) => fail_movie_request(e),
    };

    let Some(featured) = &exploration.featured else {
        println!("{}", "No movies found".yellow());
        return Ok(());
    };

    print_movie_card(featured);

    println!("\n{}", "Soundtrack".cyan().bold());
    match &exploration.soundtrack {
        Some(tracks) => print_track_list(tracks),
        None => println!("{}", "No soundtrack found".yellow()),
    }

    if exploration.movies.len() > 1 {
        println!("\n{}", "Other matches".cyan());
        for movie in exploration.movies.iter().skip(1) {
            println!("   - {} ({})", movie.title, movie.year_text);
        }
    }

    Ok(())
}

fn print_movie_card(movie: &MovieCardVm) {
    println!(
        "{} ({})  {} {}",
        movie.title.green().bold(),
        movie.year_text,
        "★".yellow(),
        movie.rating_text
    );
    println!("   Poster: {}", movie.poster_url);
    if !movie.overview.is_empty() {
        println!("   {}", movie.overview);
    }
}

fn print_movie_list(movies: &[MovieCardVm]) {
    if movies.is_empty() {
        println!("{}", "No movies found".yellow());
        return;
    }

    for (i, movie) in movies.iter().enumerate() {
        println!(
            "{:2}. {} ({}) {} {}",
            i + 1,
            movie.title.green(),
            movie.year_text,
            "★".yellow(),
            movie.rating_text
        );
    }

    println!("\n{}", format!("Total: {} movies", movies.len()).cyan());
}

fn print_track_list(tracks: &[MusicCardVm]) {
    if tracks.is_empty() {
        println!("{}", "No soundtrack found".yellow());
        return;
    }

    for (i, track) in tracks.iter().enumerate() {
        println!(
            "{:2}. {} - {} [{}]",
            i + 1,
            track.title.green(),
            track.artist_name,
            track.duration_text
        );
        println!(
            "     {} | rank {} | {}",
            track.album_title.cyan(),
            track.rank,
            track.link
        );
        if !track.preview_url.is_empty() {
            println!("     Preview: {}", track.preview_url);
        }
    }
}

fn show_setup_guide() {
    println!("{}", "Soundscout Setup Guide".cyan().bold());
    println!("{}", "=".repeat(50));

    println!("\n{}", "1. TMDB API Setup".yellow());
    println!("   - Go to https://www.themoviedb.org/settings/api");
    println!("   - Request an API key (v3 auth)");

    println!("\n{}", "2. RapidAPI Setup".yellow());
    println!("   - Go to https://rapidapi.com/deezerdevs/api/deezer-1");
    println!("   - Subscribe and copy your X-RapidAPI-Key");

    println!("\n{}", "3. Configuration".yellow());
    println!("   - Create a .env file with:");
    println!("     TMDB_API_KEY=your_tmdb_api_key");
    println!("     RAPIDAPI_KEY=your_rapidapi_key");

    println!("\n{}", "4. Usage".yellow());
    println!("   - soundscout popular                  (popular movies)");
    println!("   - soundscout search \"The Matrix\"      (search movies)");
    println!("   - soundscout soundtrack \"The Matrix\"  (soundtrack tracks)");
    println!("   - soundscout explore \"The Matrix\"     (movie + soundtrack)");
    println!("   - soundscout artist \"Don Davis\"       (artist search)");

    println!("\n{}", "Ready to explore!".green());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_api_keys_accepted_after_subcommand() {
        let cli = Cli::try_parse_from([
            "soundscout",
            "search",
            "Matrix",
            "--tmdb-api-key",
            "tmdb-key",
            "--rapidapi-key",
            "rapid-key",
        ])
        .unwrap();

        assert_eq!(cli.keys.tmdb_api_key.as_deref(), Some("tmdb-key"));
        assert_eq!(cli.keys.rapidapi_key.as_deref(), Some("rapid-key"));
        assert!(matches!(cli.command, Commands::Search { page: 1, .. }));
    }

    #[test]
    fn test_page_zero_rejected() {
        assert!(Cli::try_parse_from(["soundscout", "popular", "--page", "0"]).is_err());
    }
}
