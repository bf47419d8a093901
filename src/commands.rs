use crate::assets::{LogoResolver, MatchTier};
use crate::cli::{Args, View};
use crate::config::Config;
use crate::config::user_prompts::prompt_for_api_domain;
use crate::data_fetcher::{PlayerClient, PlayerFilter, PlayerStore};
use crate::error::AppError;
use crate::table::{TableQuery, TableRow, view};
use std::fmt::Display;
use std::io::{Write, stdout};
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.page_size == Some(0) {
        return Err(AppError::config_error("Page size must be at least 1"));
    }
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use both --set-log-file and --clear-log-file",
        ));
    }
    Ok(())
}

/// Handles the --version command.
pub fn handle_version_command() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
///
/// A bare `--config` prompts for the domain.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    update_config_file(&Config::get_config_path(), args).await
}

/// Applies the configuration flags to the file at `path`.
///
/// A file that exists but does not parse is an error and is left untouched.
async fn update_config_file(path: &str, args: &Args) -> Result<(), AppError> {
    let mut config = if Path::new(path).exists() {
        Config::load_from_path(path).await?
    } else {
        Config::default()
    };

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = if new_domain.trim().is_empty() {
            prompt_for_api_domain().await?
        } else {
            new_domain.trim().to_string()
        };
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save_to_path(path).await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Handles the --logo command.
///
/// Tries the input as a display name first, then as a raw slug.
pub fn handle_logo_command(name: &str) {
    let resolver = LogoResolver::default();
    let mut resolution = resolver.resolve(name);
    if resolution.tier == MatchTier::Fallback {
        resolution = resolver.resolve_slug(name);
    }
    println!(
        "{}\t{}\t{}",
        resolution.uri,
        resolution.tier,
        resolution.matched_key.unwrap_or("-")
    );
}

/// Maps the server filter flags onto a single backend filter.
///
/// The backend honors one filter per request; school with position is the
/// only combination it accepts.
pub fn build_filter(args: &Args) -> PlayerFilter {
    let present = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    match (
        present(&args.school),
        present(&args.name),
        present(&args.position),
        present(&args.conference),
    ) {
        (Some(school), _, Some(position), _) => PlayerFilter::SchoolAndPosition { school, position },
        (Some(school), _, _, _) => PlayerFilter::School(school),
        (None, Some(name), _, _) => PlayerFilter::Name(name),
        (None, None, Some(position), _) => PlayerFilter::Position(position),
        (None, None, None, Some(conference)) => PlayerFilter::Conference(conference),
        (None, None, None, None) => PlayerFilter::All,
    }
}

/// Builds the table query for row type `R` from the table flags.
///
/// Each `--sort` acts like a header click. `--desc` flips whatever the
/// clicks produced, or sorts by the first column descending when there
/// were none.
pub fn build_query<R>(args: &Args, page_size: usize) -> Result<TableQuery<R::Field>, AppError>
where
    R: TableRow,
    R::Field: FromStr<Err = AppError>,
{
    let mut query = TableQuery::default()
        .with_search(args.search.clone().unwrap_or_default())
        .with_page(args.page)
        .with_page_size(args.page_size.unwrap_or(page_size));

    for field in &args.sort {
        query.select_sort(field.parse()?);
    }

    if args.desc {
        match query.sort.as_mut() {
            Some(state) => state.direction = state.direction.flipped(),
            None => {
                if let Some(&first) = R::columns().first() {
                    query.select_sort(first);
                    query.select_sort(first);
                }
            }
        }
    }

    Ok(query)
}

/// Writes one page of `rows` as tab-separated text with a header line and
/// a page footer.
pub fn render_table<R, W>(out: &mut W, rows: &[R], query: &TableQuery<R::Field>) -> Result<(), AppError>
where
    R: TableRow,
    W: Write,
{
    let columns = R::columns();
    let result = view(rows, query);

    writeln!(out, "{}", join_tab(columns.iter()))?;
    for row in &result.rows {
        let cells: Vec<String> = columns.iter().map(|&field| row.display(field)).collect();
        writeln!(out, "{}", join_tab(cells.iter()))?;
    }

    if result.total_matches == 0 {
        writeln!(out, "No results")?;
    }
    writeln!(
        out,
        "page {}/{} ({} matches)",
        result.page,
        result.total_pages.max(1),
        result.total_matches
    )?;

    Ok(())
}

fn join_tab<T: Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join("\t")
}

/// Writes the selected page of `rows` followed by the fetch time
fn write_view<R, W>(
    out: &mut W,
    args: &Args,
    rows: &[R],
    page_size: usize,
    fetched: &str,
) -> Result<(), AppError>
where
    R: TableRow,
    R::Field: FromStr<Err = AppError>,
    W: Write,
{
    let query = build_query::<R>(args, page_size)?;
    render_table(out, rows, &query)?;
    writeln!(out, "fetched {fetched}")?;
    Ok(())
}

/// Fetches players once and prints the selected view.
///
/// On a failed fetch a retry hint is printed when the failure is transient,
/// and the error is returned.
pub async fn handle_view_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let client = PlayerClient::new(config)?;
    let store = PlayerStore::new();
    let filter = build_filter(args);

    info!("Fetching players with filter {:?}", filter);
    let dataset = match store.refresh_with(|| client.fetch_players(&filter)).await {
        Ok(dataset) => dataset,
        Err(e) => {
            warn!("Fetch failed: {}", e);
            if store.state().await.can_retry() {
                eprintln!("The stats API may be temporarily unavailable. Try again shortly.");
            }
            return Err(e);
        }
    };

    let page_size = config.page_size;
    let fetched = dataset.fetched_label();
    let mut out = stdout().lock();
    match args.view {
        View::Players => write_view(&mut out, args, dataset.players(), page_size, &fetched)?,
        View::Schools => write_view(
            &mut out,
            args,
            &dataset.aggregates().schools,
            page_size,
            &fetched,
        )?,
        View::Conferences => write_view(
            &mut out,
            args,
            &dataset.aggregates().conferences,
            page_size,
            &fetched,
        )?,
        View::Positions => write_view(
            &mut out,
            args,
            &dataset.aggregates().positions,
            page_size,
            &fetched,
        )?,
    }
    out.flush()?;
    Ok(())
}
