//! Conference abbreviations.

/// Known conferences keyed by lower-cased name.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("atlantic coast", "ACC"),
    ("big ten", "Big Ten"),
    ("big 12", "Big 12"),
    ("southeastern", "SEC"),
    ("pac-12", "PAC-12"),
    ("big east", "Big East"),
    ("american athletic", "AAC"),
    ("atlantic 10", "A-10"),
    ("conference usa", "CUSA"),
    ("mountain west", "MW"),
    ("west coast", "WCC"),
    ("missouri valley", "MVC"),
    ("colonial athletic", "CAA"),
    ("horizon", "HL"),
    ("metro atlantic athletic", "MAAC"),
    ("mid-american", "MAC"),
    ("ohio valley", "OVC"),
    ("southern", "SoCon"),
    ("southland", "Southland"),
    ("sun belt", "SBC"),
    ("western athletic", "WAC"),
    ("america east", "AEC"),
    ("atlantic sun", "A-SUN"),
    ("big sky", "Big Sky"),
    ("big south", "Big South"),
    ("big west", "Big West"),
    ("northeast", "NEC"),
    ("patriot league", "Patriot"),
    ("summit league", "Summit"),
    ("southwest athletic", "SWAC"),
    ("mid-eastern athletic", "MEAC"),
    ("ivy league", "Ivy"),
    ("independent", "IND"),
];

/// Returns the short form of a conference name.
///
/// Lookup is case-insensitive on the trimmed name. Unknown names fall back
/// to their first three characters upper-cased.
///
/// # Examples
/// ```
/// use cbb_insight::data_fetcher::names::conference_abbreviation;
///
/// assert_eq!(conference_abbreviation("Atlantic Coast"), "ACC");
/// assert_eq!(conference_abbreviation("  southeastern "), "SEC");
/// assert_eq!(conference_abbreviation("Great West"), "GRE");
/// ```
pub fn conference_abbreviation(name: &str) -> String {
    let trimmed = name.trim();
    let lower = trimmed.to_lowercase();

    ABBREVIATIONS
        .iter()
        .find(|(known, _)| *known == lower)
        .map(|(_, abbreviation)| (*abbreviation).to_string())
        .unwrap_or_else(|| trimmed.chars().take(3).collect::<String>().to_uppercase())
}
