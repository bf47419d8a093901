use crate::constants::assets::SPORTS_REFERENCE_SCHOOLS_URL;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Canonical school names and their Sports-Reference slugs, in lookup order.
const SPORTS_REFERENCE_SCHOOLS: &[(&str, &str)] = &[
    // Major programs
    ("Duke", "duke"),
    ("North Carolina", "north-carolina"),
    ("Kentucky", "kentucky"),
    ("Kansas", "kansas"),
    ("UCLA", "ucla"),
    ("Arizona", "arizona"),
    ("Michigan", "michigan"),
    ("Ohio State", "ohio-state"),
    ("Florida", "florida"),
    ("Texas", "texas"),
    ("Virginia", "virginia"),
    ("Villanova", "villanova"),
    ("Syracuse", "syracuse"),
    ("Connecticut", "connecticut"),
    ("Georgetown", "georgetown"),
    ("Marquette", "marquette"),
    ("Providence", "providence"),
    ("Seton Hall", "seton-hall"),
    ("St Johns", "st-johns-ny"),
    ("Xavier", "xavier"),
    ("Creighton", "creighton"),
    ("Butler", "butler"),
    ("DePaul", "depaul"),
    // ACC
    ("Florida State", "florida-state"),
    ("Georgia Tech", "georgia-tech"),
    ("Virginia Tech", "virginia-tech"),
    ("NC State", "north-carolina-state"),
    ("Wake Forest", "wake-forest"),
    ("Boston College", "boston-college"),
    ("Clemson", "clemson"),
    ("Pittsburgh", "pittsburgh"),
    ("Louisville", "louisville"),
    ("Notre Dame", "notre-dame"),
    ("Miami", "miami-fl"),
    // SEC
    ("Alabama", "alabama"),
    ("Auburn", "auburn"),
    ("Arkansas", "arkansas"),
    ("Georgia", "georgia"),
    ("LSU", "louisiana-state"),
    ("Mississippi", "mississippi"),
    ("Mississippi State", "mississippi-state"),
    ("Missouri", "missouri"),
    ("South Carolina", "south-carolina"),
    ("Tennessee", "tennessee"),
    ("Texas A&M", "texas-am"),
    ("Vanderbilt", "vanderbilt"),
    // Big Ten
    ("Illinois", "illinois"),
    ("Indiana", "indiana"),
    ("Iowa", "iowa"),
    ("Maryland", "maryland"),
    ("Michigan State", "michigan-state"),
    ("Minnesota", "minnesota"),
    ("Nebraska", "nebraska"),
    ("Northwestern", "northwestern"),
    ("Penn State", "penn-state"),
    ("Purdue", "purdue"),
    ("Rutgers", "rutgers"),
    ("Wisconsin", "wisconsin"),
    // Big 12
    ("Baylor", "baylor"),
    ("Iowa State", "iowa-state"),
    ("Kansas State", "kansas-state"),
    ("Oklahoma", "oklahoma"),
    ("Oklahoma State", "oklahoma-state"),
    ("TCU", "texas-christian"),
    ("Texas Tech", "texas-tech"),
    ("West Virginia", "west-virginia"),
    // Pac-12
    ("Arizona State", "arizona-state"),
    ("California", "california"),
    ("Colorado", "colorado"),
    ("Oregon", "oregon"),
    ("Oregon State", "oregon-state"),
    ("Stanford", "stanford"),
    ("USC", "southern-california"),
    ("Utah", "utah"),
    ("Washington", "washington"),
    ("Washington State", "washington-state"),
    // Others
    ("Gonzaga", "gonzaga"),
    ("Memphis", "memphis"),
    ("Cincinnati", "cincinnati"),
    ("Houston", "houston"),
    ("SMU", "southern-methodist"),
    ("Temple", "temple"),
    ("Tulane", "tulane"),
    ("Wichita State", "wichita-state"),
    ("VCU", "virginia-commonwealth"),
    ("Dayton", "dayton"),
    ("Saint Louis", "saint-louis"),
    ("Richmond", "richmond"),
    ("George Washington", "george-washington"),
    ("George Mason", "george-mason"),
];

static SPORTS_REFERENCE_INDEX: LazyLock<AssetIndex> = LazyLock::new(|| {
    SPORTS_REFERENCE_SCHOOLS
        .iter()
        .map(|(name, slug)| (name.to_string(), build_logo_url(SPORTS_REFERENCE_SCHOOLS_URL, slug)))
        .collect()
});

/// Builds the Sports-Reference logo URL for a school slug.
///
/// # Example
/// ```
/// use cbb_insight::assets::build_logo_url;
///
/// assert_eq!(
///     build_logo_url("https://www.sports-reference.com/cbb/schools", "duke"),
///     "https://www.sports-reference.com/cbb/schools/duke/logos/logo.png"
/// );
/// ```
pub fn build_logo_url(base_url: &str, slug: &str) -> String {
    format!("{}/{slug}/logos/logo.png", base_url.trim_end_matches('/'))
}

/// Canonical names mapped to asset URIs, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetIndex {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl AssetIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in Sports-Reference logo table, shared for the process lifetime
    pub fn sports_reference() -> &'static AssetIndex {
        &SPORTS_REFERENCE_INDEX
    }

    /// Adds an entry. Re-inserting a name replaces its URI in place.
    pub fn insert(&mut self, name: impl Into<String>, uri: impl Into<String>) {
        let name = name.into();
        let uri = uri.into();
        match self.positions.get(&name) {
            Some(&position) => self.entries[position].1 = uri,
            None => {
                self.positions.insert(name.clone(), self.entries.len());
                self.entries.push((name, uri));
            }
        }
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, name: &str) -> Option<&str> {
        self.positions
            .get(name)
            .map(|&position| self.entries[position].1.as_str())
    }

    /// Exact lookup returning the stored key alongside the URI
    pub fn get_key_value(&self, name: &str) -> Option<(&str, &str)> {
        self.positions.get(name).map(|&position| {
            let (key, uri) = &self.entries[position];
            (key.as_str(), uri.as_str())
        })
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, uri)| (name.as_str(), uri.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, U: Into<String>> FromIterator<(N, U)> for AssetIndex {
    fn from_iter<T: IntoIterator<Item = (N, U)>>(iter: T) -> Self {
        let mut index = AssetIndex::new();
        for (name, uri) in iter {
            index.insert(name, uri);
        }
        index
    }
}
