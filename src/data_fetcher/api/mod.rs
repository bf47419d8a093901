mod core;
mod fetch_utils;
pub mod http_client;
pub mod urls;

pub use core::PlayerClient;
pub use http_client::create_http_client_with_timeout;
pub use urls::{PlayerFilter, build_players_url};
