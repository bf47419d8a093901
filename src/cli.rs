use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, ValueEnum};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Which collection a table view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum View {
    #[default]
    Players,
    Schools,
    Conferences,
    Positions,
}

/// Returns true when the invocation only touches configuration
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// College basketball stats browser
///
/// Fetches per-player season statistics from the stats API and prints them,
/// or the school, conference and position summaries derived from them, as
/// tab-separated rows.
///
/// Sorting behaves like clicking column headers: `--sort pts` sorts by points
/// ascending, `--sort pts --sort pts` descending.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Collection to show
    #[arg(long, short = 'v', value_enum, default_value_t = View::Players, help_heading = "Table")]
    pub view: View,

    /// Case-insensitive text filter over the view's text columns
    #[arg(long, short = 's', help_heading = "Table")]
    pub search: Option<String>,

    /// Sort column. Repeat to toggle direction or switch columns.
    #[arg(long = "sort", value_name = "FIELD", help_heading = "Table")]
    pub sort: Vec<String>,

    /// Flip the final sort direction
    #[arg(long, help_heading = "Table")]
    pub desc: bool,

    /// 1-based page to show. Pages past the end show the last page.
    #[arg(long, short = 'p', default_value_t = 1, help_heading = "Table")]
    pub page: usize,

    /// Rows per page (defaults to the configured page size)
    #[arg(long = "page-size", help_heading = "Table")]
    pub page_size: Option<usize>,

    /// Resolve the logo for a school display name or slug and exit
    #[arg(long, value_name = "NAME", help_heading = "Assets")]
    pub logo: Option<String>,

    /// Only fetch players from this school slug
    #[arg(long, help_heading = "Server Filters")]
    pub school: Option<String>,

    /// Only fetch players whose name contains this text
    #[arg(long, help_heading = "Server Filters")]
    pub name: Option<String>,

    /// Only fetch players whose position contains this text
    #[arg(long, help_heading = "Server Filters")]
    pub position: Option<String>,

    /// Only fetch players whose conference contains this text
    #[arg(long, help_heading = "Server Filters")]
    pub conference: Option<String>,

    /// Update API domain in config. Will prompt for new domain if not provided.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_DOMAIN",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub new_api_domain: Option<String>,

    /// Update log file path in config
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Also write logs to stdout, at debug level
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Custom log file path for this run
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
