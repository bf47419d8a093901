//! URL building for the player endpoint

use crate::constants::PLAYER_API_PATH;
use crate::error::AppError;
use reqwest::Url;

/// Server-side filter for the player listing.
///
/// The backend applies at most one filter, with `school` + `position`
/// being the only combination it understands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlayerFilter {
    #[default]
    All,
    /// Exact school slug
    School(String),
    /// Case-insensitive name fragment
    Name(String),
    /// Case-insensitive position fragment
    Position(String),
    /// Case-insensitive conference fragment
    Conference(String),
    /// Exact school slug and exact position code
    SchoolAndPosition { school: String, position: String },
}

impl PlayerFilter {
    fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        match self {
            PlayerFilter::All => Vec::new(),
            PlayerFilter::School(school) => vec![("school", school.as_str())],
            PlayerFilter::Name(name) => vec![("name", name.as_str())],
            PlayerFilter::Position(position) => vec![("position", position.as_str())],
            PlayerFilter::Conference(conference) => vec![("conference", conference.as_str())],
            PlayerFilter::SchoolAndPosition { school, position } => {
                vec![("school", school.as_str()), ("position", position.as_str())]
            }
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, PlayerFilter::All)
    }
}

/// Builds the player listing URL for `filter`.
///
/// Query values are percent-encoded.
///
/// # Example
/// ```
/// use cbb_insight::data_fetcher::api::{PlayerFilter, build_players_url};
///
/// let url = build_players_url("http://localhost:8080", &PlayerFilter::All).unwrap();
/// assert_eq!(url, "http://localhost:8080/api/v1/player");
///
/// let filter = PlayerFilter::Conference("Big Ten".to_string());
/// let url = build_players_url("http://localhost:8080/", &filter).unwrap();
/// assert_eq!(url, "http://localhost:8080/api/v1/player?conference=Big+Ten");
/// ```
pub fn build_players_url(api_domain: &str, filter: &PlayerFilter) -> Result<String, AppError> {
    let base = format!("{}{}", api_domain.trim_end_matches('/'), PLAYER_API_PATH);
    let mut url = Url::parse(&base)
        .map_err(|e| AppError::config_error(format!("Invalid API domain '{api_domain}': {e}")))?;

    let pairs = filter.query_pairs();
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_school_and_position() {
        let filter = PlayerFilter::SchoolAndPosition {
            school: "texas-am".to_string(),
            position: "G".to_string(),
        };
        let url = build_players_url("https://stats.example.com", &filter).unwrap();
        assert_eq!(
            url,
            "https://stats.example.com/api/v1/player?school=texas-am&position=G"
        );
    }

    #[test]
    fn test_values_are_encoded() {
        let filter = PlayerFilter::Name("O'Neal & co".to_string());
        let url = build_players_url("http://localhost:8080", &filter).unwrap();
        assert_eq!(url, "http://localhost:8080/api/v1/player?name=O%27Neal+%26+co");
    }

    #[test]
    fn test_invalid_domain() {
        let result = build_players_url("not a url", &PlayerFilter::All);
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
