//! Filtering, sorting and pagination over any row collection.
//!
//! The engine knows nothing about players or schools. A row type exposes its
//! searchable text and a typed cell per field through [`TableRow`]; the
//! engine then applies filter, sort and paginate, always in that order.

pub mod filter;
pub mod pagination;
pub mod rows;
pub mod sorting;

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::data_fetcher::models::Stat;
use std::fmt;

pub use filter::matches_query;
pub use pagination::{Page, paginate};
pub use rows::{ConferenceField, PlayerField, PositionField, SchoolField};
pub use sorting::{SortDirection, SortState, compare_cells, sort_rows};

/// A single cell, typed so the comparator can dispatch on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Text(Option<&'a str>),
    Number(Stat),
}

impl fmt::Display for CellValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(Some(text)) => write!(f, "{text}"),
            CellValue::Text(None) => write!(f, "-"),
            CellValue::Number(stat) => write!(f, "{stat}"),
        }
    }
}

/// A row the table engine can filter, sort and page.
pub trait TableRow {
    type Field: Copy + PartialEq + fmt::Debug + fmt::Display;

    /// Columns shown for this row type, in display order
    fn columns() -> Vec<Self::Field>;

    /// Text the search query is matched against
    fn search_fields(&self) -> Vec<&str>;

    fn cell(&self, field: Self::Field) -> CellValue<'_>;

    /// Text printed for a cell
    fn display(&self, field: Self::Field) -> String {
        self.cell(field).to_string()
    }
}

/// Everything a caller controls about one table view.
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery<F> {
    pub search: String,
    /// `None` keeps the collection's own order
    pub sort: Option<SortState<F>>,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
}

impl<F> Default for TableQuery<F> {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl<F: Copy + PartialEq> TableQuery<F> {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Behaves like a click on a column header.
    ///
    /// The active field flips direction; any other field becomes active in
    /// ascending order.
    pub fn select_sort(&mut self, field: F) {
        match self.sort.as_mut() {
            Some(state) => state.select(field),
            None => self.sort = Some(SortState::new(field)),
        }
    }
}

/// One window of a filtered and sorted collection.
#[derive(Debug)]
pub struct TableView<'a, R> {
    pub rows: Vec<&'a R>,
    /// Rows matching the query, before pagination
    pub total_matches: usize,
    /// 1-based page actually shown after clamping
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Filters, sorts and paginates `rows` according to `query`.
pub fn view<'a, R: TableRow>(rows: &'a [R], query: &TableQuery<R::Field>) -> TableView<'a, R> {
    let mut matching: Vec<&'a R> = rows
        .iter()
        .filter(|row| matches_query(*row, &query.search))
        .collect();

    if let Some(sort) = &query.sort {
        sort_rows(&mut matching, sort);
    }

    let total_matches = matching.len();
    let page = paginate(total_matches, query.page, query.page_size);
    let window = matching
        .into_iter()
        .skip(page.start)
        .take(page.end - page.start)
        .collect();

    TableView {
        rows: window,
        total_matches,
        page: page.index,
        page_size: page.page_size,
        total_pages: page.total_pages,
    }
}
