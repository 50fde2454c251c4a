use anyhow::{Context, Result};
use board::ShowtimeBoard;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::ShowtimeTable;
use pipeline::{FilmListing, FilterOptions, SortMode, summary_label};
use std::path::PathBuf;
use std::time::Instant;

/// Showtimes - browse movie showtimes by theater and date
#[derive(Parser)]
#[command(name = "showtimes")]
#[command(about = "Filter, group and sort movie showtimes from CSV listings", long_about = None)]
struct Cli {
    /// Showtime CSV file(s); repeat to merge several feeds
    #[arg(short, long = "csv", default_value = "showtimes_history.csv")]
    csv: Vec<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List films with their showtimes
    List {
        /// Only count showtimes at this theater (repeatable)
        #[arg(long = "theater")]
        theaters: Vec<String>,

        /// Only count showtimes on this date, as written in the data (repeatable)
        #[arg(long = "date")]
        dates: Vec<String>,

        /// Sort mode: showtimes-desc, showtimes-asc, runtime-desc, runtime-asc
        #[arg(long, default_value = "showtimes-desc")]
        sort: SortMode,

        /// Print dates, theaters and times under each film
        #[arg(long)]
        expand: bool,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the selectable theaters and upcoming dates
    Options {
        /// Treat this day (YYYY-MM-DD) as today
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Show the available sort modes
    Sorts,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    if let Commands::Sorts = cli.command {
        print_sort_modes();
        return Ok(());
    }

    let start = Instant::now();
    let table = ShowtimeTable::load_from_files(&cli.csv).with_context(|| {
        let files: Vec<String> = cli.csv.iter().map(|p| p.display().to_string()).collect();
        format!("Failed to load showtimes from {}", files.join(", "))
    })?;
    tracing::info!("Loaded showtime table in {:?}", start.elapsed());

    match cli.command {
        Commands::List {
            theaters,
            dates,
            sort,
            expand,
            json,
        } => handle_list(&table, theaters, dates, sort, expand, json)?,
        Commands::Options { today } => handle_options(&table, today),
        Commands::Sorts => unreachable!("handled before loading"),
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(
    table: &ShowtimeTable,
    theaters: Vec<String>,
    dates: Vec<String>,
    sort: SortMode,
    expand: bool,
    json: bool,
) -> Result<()> {
    let mut board = ShowtimeBoard::new(table.records());
    warn_unknown(&theaters, &board.options().theaters, "theater");
    board.set_selected_theaters(theaters);
    board.set_selected_dates(dates);
    board.set_sort_mode(sort);

    let listing = board.listing();
    if json {
        println!("{}", serde_json::to_string_pretty(&*listing)?);
        return Ok(());
    }

    println!(
        "{} | {} | {}",
        summary_label("Theater", board.selected_theaters().len()).bold(),
        summary_label("Date", board.selected_dates().len()).bold(),
        sort.label().bold()
    );

    if listing.is_empty() {
        println!("No movies found for selected filters.");
        return Ok(());
    }

    for (rank, film) in listing.iter().enumerate() {
        print_film(rank + 1, film, expand);
    }

    let summary = board.summary();
    println!(
        "\n{} films, {} of {} showtimes visible",
        summary.films, summary.visible_showtimes, summary.showtimes
    );
    Ok(())
}

/// Handle the 'options' command
fn handle_options(table: &ShowtimeTable, today: Option<NaiveDate>) {
    let today = today.unwrap_or_else(data_loader::today);
    let options = FilterOptions::build(table.records(), today);

    println!("{}", "Theaters:".bold().blue());
    for theater in &options.theaters {
        println!("  {} {}", "•".green(), theater);
    }

    println!("{}", "Dates:".bold().blue());
    if options.dates.is_empty() {
        println!("  (no upcoming dates)");
    }
    for date in &options.dates {
        println!("  {} {}", "•".green(), date);
    }
}

fn print_sort_modes() {
    println!("{}", "Sort modes:".bold().blue());
    for mode in SortMode::ALL {
        let marker = if mode == SortMode::default() { " (default)" } else { "" };
        println!("  {:<16} {}{}", mode.as_str().green(), mode.label(), marker);
    }
}

/// Helper function to format and print one film
fn print_film(rank: usize, film: &FilmListing, expand: bool) {
    let runtime = film
        .runtime
        .as_deref()
        .map(|r| format!("{} min", r))
        .unwrap_or_else(|| "runtime unknown".to_string());

    println!(
        "{}. {} ({}) - {} showtimes",
        rank.to_string().green(),
        film.film.bold(),
        runtime,
        film.visible_count
    );

    if !expand {
        return;
    }
    if film.visible_dates.is_empty() {
        println!("   {}", "No showtimes for selected dates.".dimmed());
    }
    for date in &film.visible_dates {
        println!("   {}", date.date.cyan());
        for theater in &date.theaters {
            println!("      {}: {}", theater.theater, theater.times.join("  "));
        }
    }
}

/// Selecting a theater nobody lists is legal but usually a typo.
fn warn_unknown(selected: &[String], known: &[String], what: &str) {
    for value in selected {
        if !known.contains(value) {
            tracing::warn!("No showtimes at {} '{}'", what, value);
        }
    }
}
