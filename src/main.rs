// src/main.rs
use cbb_insight::cli::{Args, is_config_operation};
use cbb_insight::commands::{
    handle_config_update_command, handle_list_config_command, handle_logo_command,
    handle_version_command, handle_view_command, validate_args,
};
use cbb_insight::config::Config;
use cbb_insight::error::AppError;
use cbb_insight::logging::setup_logging;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    validate_args(&args)?;

    // Handle version flag first
    if args.version {
        handle_version_command();
        return Ok(());
    }

    // The guard must outlive every log call
    let (log_file_path, _guard) = setup_logging(&args).await?;
    info!("Logging to {}", log_file_path);

    if is_config_operation(&args) {
        if args.list_config {
            return handle_list_config_command().await;
        }
        return handle_config_update_command(&args).await;
    }

    if let Some(name) = &args.logo {
        handle_logo_command(name);
        return Ok(());
    }

    let config = Config::load().await?;
    handle_view_command(&args, &config).await
}
