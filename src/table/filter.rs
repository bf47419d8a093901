use super::TableRow;

/// Case-insensitive substring match of `query` against any search field.
///
/// A blank query matches every row.
pub fn matches_query<R: TableRow>(row: &R, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    row.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
