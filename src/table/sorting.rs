use super::{CellValue, TableRow};
use crate::data_fetcher::names::locale_cmp;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The one active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Copy + PartialEq> SortState<F> {
    pub fn new(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }

    /// Flips direction when `field` is already active, otherwise switches
    /// to `field` ascending.
    pub fn select(&mut self, field: F) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            *self = Self::new(field);
        }
    }
}

/// Compares two cells by their runtime type.
///
/// Missing text sorts as the empty string and missing numbers as zero.
/// Cells of different types compare equal.
pub fn compare_cells(a: &CellValue<'_>, b: &CellValue<'_>) -> Ordering {
    match (a, b) {
        (CellValue::Text(x), CellValue::Text(y)) => {
            locale_cmp(x.unwrap_or_default(), y.unwrap_or_default())
        }
        (CellValue::Number(x), CellValue::Number(y)) => x.or_zero().total_cmp(&y.or_zero()),
        _ => Ordering::Equal,
    }
}

/// Stable sort of `rows` by the active column.
pub fn sort_rows<R: TableRow>(rows: &mut [&R], sort: &SortState<R::Field>) {
    rows.sort_by(|a, b| {
        let ordering = compare_cells(&a.cell(sort.field), &b.cell(sort.field));
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{PlayerRecord, Stat, StatField};
    use crate::table::PlayerField;
    use crate::testing_utils::PlayerRecordBuilder;

    fn names<'a>(rows: &[&'a PlayerRecord]) -> Vec<&'a str> {
        rows.iter().filter_map(|r| r.name()).collect()
    }

    #[test]
    fn test_absent_numbers_sort_as_zero() {
        let a = PlayerRecordBuilder::new().name("a").points(5.0).build();
        let b = PlayerRecordBuilder::new().name("b").build();
        let c = PlayerRecordBuilder::new().name("c").points(-1.0).build();
        let mut rows = vec![&a, &b, &c];

        sort_rows(&mut rows, &SortState::new(PlayerField::Stat(StatField::Points)));
        assert_eq!(names(&rows), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_text_uses_locale_order() {
        let a = PlayerRecordBuilder::new().name("zed").build();
        let b = PlayerRecordBuilder::new().name("Ábel").build();
        let c = PlayerRecordBuilder::new().name("Bob").build();
        let mut rows = vec![&a, &b, &c];

        sort_rows(&mut rows, &SortState::new(PlayerField::Name));
        assert_eq!(names(&rows), vec!["Ábel", "Bob", "zed"]);
    }

    #[test]
    fn test_descending_keeps_ties_in_input_order() {
        let a = PlayerRecordBuilder::new().name("a").points(10.0).build();
        let b = PlayerRecordBuilder::new().name("b").points(20.0).build();
        let c = PlayerRecordBuilder::new().name("c").points(10.0).build();
        let mut rows = vec![&a, &b, &c];

        sort_rows(&mut rows, &SortState::descending(PlayerField::Stat(StatField::Points)));
        assert_eq!(names(&rows), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_mixed_cells_compare_equal() {
        let text = CellValue::Text(Some("x"));
        let number = CellValue::Number(Stat::Present(1.0));
        assert_eq!(compare_cells(&text, &number), Ordering::Equal);
    }

    #[test]
    fn test_missing_text_sorts_first() {
        assert_eq!(
            compare_cells(&CellValue::Text(None), &CellValue::Text(Some("a"))),
            Ordering::Less
        );
    }
}
