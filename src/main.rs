//! Studyspot CLI
//!
//! Usage:
//!   studyspot --text "fast wifi, quiet"            # Classify review text
//!   studyspot --input nearby.json --lat 40.7 --lng -74.0   # Cards from a saved search
//!   studyspot --search --lat 40.7 --lng -74.0      # Live search (needs API key)
//!   studyspot --search --swipe                     # Swipe through cards, save with r
//!   studyspot --saved                              # List saved cafes
//!   studyspot --serve                              # Places proxy server

use anyhow::{bail, Context, Result};
use chrono::{Datelike, Local, Utc};
use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use studyspot::core::{
    cache_location, cached_location, classify, derive_badge, run_server, CafeAdapter, FileStore,
    NearbyRequest, PlacesClient, ProxyConfig, SaveOutcome, SavedCafes, SearchDefaults, Swipe,
    SwipeDeck, SwipeOutcome,
};
use studyspot::types::{CafeRecord, Coordinates, NearbySearchResponse, StudyAssessment};
use studyspot::{VERSION, DEFAULT_MAX_RESULTS, DEFAULT_RADIUS_METERS, PLACES_BASE_URL};

#[derive(Parser, Debug)]
#[command(
    name = "studyspot",
    version = VERSION,
    about = "Find nearby cafes and see which ones are good for studying",
    long_about = "Studyspot finds nearby cafes through the Google Places API and scores\n\
                  each one for study-friendliness from its reviews (WiFi, laptops,\n\
                  outlets, seating, quiet).\n\n\
                  Badges:\n  \
                  GREAT        - WiFi plus at least one other feature\n  \
                  GOOD         - WiFi alone, or two or more other features\n  \
                  INCONCLUSIVE - one or no feature mentioned"
)]
struct Args {
    /// Review text to classify (repeat for several reviews)
    #[arg(short, long)]
    text: Vec<String>,

    /// Nearby-search response JSON to turn into cards
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Search nearby cafes live through the Places API
    #[arg(long)]
    search: bool,

    /// Swipe through the cards: r = save, l = skip, q = quit
    #[arg(long)]
    swipe: bool,

    /// Resolve card photos through the photo endpoint
    #[arg(long)]
    photos: bool,

    /// List saved cafes
    #[arg(long)]
    saved: bool,

    /// Remove a saved cafe by id
    #[arg(long, value_name = "ID")]
    remove: Option<String>,

    /// Run as HTTP proxy server
    #[arg(short, long)]
    serve: bool,

    /// Your latitude
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Your longitude
    #[arg(long, allow_negative_numbers = true)]
    lng: Option<f64>,

    /// Places API key
    #[arg(long, env = "GOOGLE_PLACES_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Server host
    #[arg(long, default_value = "127.0.0.1")]
    addr: String,

    /// Server port
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Search radius in meters
    #[arg(long, default_value_t = DEFAULT_RADIUS_METERS)]
    radius: f64,

    /// Maximum number of results
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    max_results: u32,

    /// Keep museums, galleries and tourist attractions in results
    #[arg(long)]
    no_exclude: bool,

    /// Places API root
    #[arg(long, default_value = PLACES_BASE_URL)]
    places_base_url: String,

    /// Directory for saved cafes and the location cache
    #[arg(long, default_value = "./studyspot_data")]
    store_dir: PathBuf,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

impl Args {
    fn proxy_config(&self) -> ProxyConfig {
        ProxyConfig::new(self.api_key.clone())
            .with_base_url(self.places_base_url.clone())
            .with_search(SearchDefaults {
                radius_meters: self.radius,
                max_results: self.max_results,
                exclude_non_cafes: !self.no_exclude,
                ..SearchDefaults::default()
            })
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(args).await {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    if args.serve {
        run_serve(&args).await
    } else if let Some(id) = &args.remove {
        run_remove(&args, id)
    } else if args.saved {
        run_saved(&args)
    } else if !args.text.is_empty() {
        run_text(&args)
    } else if args.input.is_some() || args.search {
        run_cards(&args).await
    } else {
        bail!("nothing to do: pass --text, --input, --search, --saved or --serve (see --help)")
    }
}

/// Classify review text given on the command line
fn run_text(args: &Args) -> Result<()> {
    let assessment = classify(&args.text);
    let badge = derive_badge(&assessment);

    if args.json {
        #[derive(serde::Serialize)]
        struct TextOutput<'a> {
            assessment: &'a StudyAssessment,
            badge: &'a studyspot::types::StudyBadge,
        }
        println!("{}", serde_json::to_string_pretty(&TextOutput { assessment: &assessment, badge: &badge })?);
    } else {
        println!("score={} | badge={} | reason={}", assessment.score(), badge.level, badge.message);
        println!("features: {}", badge.detected);
    }
    Ok(())
}

/// Build cards from a file or a live search, then print or swipe them
async fn run_cards(args: &Args) -> Result<()> {
    let mut store = FileStore::new(&args.store_dir);
    let user = resolve_location(args, &mut store)?;
    let config = args.proxy_config();

    let response: NearbySearchResponse = match &args.input {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("{} is not a nearby-search response", path.display()))?
        }
        None => {
            let Some(coords) = user else {
                bail!("--search needs --lat/--lng (or a location cached in the last 10 minutes)");
            };
            if config.api_key.is_none() {
                bail!("--search needs GOOGLE_PLACES_API_KEY or --api-key");
            }
            let client = PlacesClient::new(config.clone());
            client
                .nearby_places(&NearbyRequest::at(coords.lat, coords.lng))
                .await
                .context("Nearby search failed")?
        }
    };

    if response.places.is_empty() {
        println!("No cafes found nearby.");
        return Ok(());
    }

    let mut cards = CafeAdapter::new().adapt_all(&response.places, user, Local::now().weekday());

    if args.photos {
        let client = PlacesClient::new(config);
        for card in cards.iter_mut() {
            if let Some(name) = card.photo_name.clone() {
                if let Some(uri) = client.photo_uri(&name).await {
                    card.photo = uri;
                }
            }
        }
    }

    if args.swipe {
        run_swipe(args, SwipeDeck::new(cards), store)
    } else {
        print_cards(&cards, args)
    }
}

/// Coordinates from flags (cached for next time) or from a fresh cache entry
fn resolve_location(args: &Args, store: &mut FileStore) -> Result<Option<Coordinates>> {
    let now_ms = Utc::now().timestamp_millis();
    match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => {
            let coords = Coordinates::new(lat, lng);
            if let Err(e) = cache_location(store, coords, now_ms) {
                log::warn!("Could not cache location: {}", e);
            }
            Ok(Some(coords))
        }
        (None, None) => {
            let cached = cached_location(store, now_ms)?;
            if cached.is_some() {
                log::info!("Using cached location (last 10 min)");
            }
            Ok(cached)
        }
        _ => bail!("--lat and --lng must be given together"),
    }
}

/// Interactive swipe loop over an explicit deck
fn run_swipe(args: &Args, mut deck: SwipeDeck, store: FileStore) -> Result<()> {
    let mut saved = SavedCafes::new(store);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("☕ Swipe left to skip, swipe right to save 💖  (l / r / q)");
    println!();

    while let Some(card) = deck.current() {
        let badge = derive_badge(&card.assessment());
        println!("{}", render(card, &badge, args));
        print!("[{}/{}] > ", deck.position() + 1, deck.len());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            break;
        }
        let Some(direction) = Swipe::parse(line) else {
            println!("{}", "Use r to save, l to skip, q to quit".yellow());
            continue;
        };

        if let SwipeOutcome::Save(cafe) = deck.swipe(direction) {
            match saved.save(&cafe)? {
                SaveOutcome::Saved => println!("{}", format!("{} saved!", cafe.name).green()),
                SaveOutcome::AlreadySaved => println!("{} is already saved.", cafe.name),
            }
        }
        println!();
    }

    println!("Done. {} card(s) left unswiped.", deck.remaining());
    Ok(())
}

/// List saved cafes
fn run_saved(args: &Args) -> Result<()> {
    let saved = SavedCafes::new(FileStore::new(&args.store_dir));
    let cafes = saved.list()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&cafes)?);
        return Ok(());
    }
    if cafes.is_empty() {
        println!("No saved cafes yet 😢");
        return Ok(());
    }

    println!("💾 Saved cafes");
    println!();
    for cafe in &cafes {
        let badge = derive_badge(&cafe.assessment());
        println!("{}", render(cafe, &badge, args));
        println!("   id: {}", cafe.id);
        println!();
    }
    Ok(())
}

fn run_remove(args: &Args, id: &str) -> Result<()> {
    let mut saved = SavedCafes::new(FileStore::new(&args.store_dir));
    if saved.remove(id)? {
        println!("Removed {}", id);
    } else {
        println!("No saved cafe with id {}", id);
    }
    Ok(())
}

fn print_cards(cards: &[CafeRecord], args: &Args) -> Result<()> {
    if args.json {
        let views: Vec<_> = cards
            .iter()
            .map(|cafe| studyspot::types::CafeView {
                cafe: cafe.clone(),
                badge: derive_badge(&cafe.assessment()),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    for card in cards {
        let badge = derive_badge(&card.assessment());
        println!("{}", render(card, &badge, args));
        println!();
    }
    Ok(())
}

fn render(card: &CafeRecord, badge: &studyspot::types::StudyBadge, args: &Args) -> String {
    if args.no_color {
        card.to_parseable_string(badge)
    } else {
        card.to_terminal_string(badge)
    }
}

/// Run HTTP proxy server
async fn run_serve(args: &Args) -> Result<()> {
    let config = args.proxy_config();
    if config.api_key.is_none() {
        bail!("Missing GOOGLE_PLACES_API_KEY (set it in the environment or pass --api-key)");
    }

    log::info!("Studyspot proxy v{}", VERSION);
    let addr = format!("{}:{}", args.addr, args.port);
    run_server(&addr, config)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
