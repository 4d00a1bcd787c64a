//! Row index for addressing rows in a sectioned list.
//!
//! A host view asks its data provider for rows by `RowIndex`. Lists bound
//! through [`ListBinding`](super::ListBinding) only ever have section 0, but
//! hosts speak in sections, so the address carries one.

use std::fmt;

/// Represents a row position within a data provider.
///
/// Indices are plain values and should be used immediately. After the
/// bound collection is replaced, previously obtained indices may no longer
/// point at the same item, or at any item at all.
///
/// # Example
///
/// ```
/// use lattice_rows::model::RowIndex;
///
/// let index = RowIndex::new(0, 2);
/// assert_eq!(index.section(), 0);
/// assert_eq!(index.row(), 2);
/// assert_eq!(RowIndex::from((0, 2)), index);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct RowIndex {
    section: usize,
    row: usize,
}

impl RowIndex {
    /// Creates an index for `row` within `section`.
    #[inline]
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }

    /// Creates an index for `row` in the first section.
    #[inline]
    pub const fn row_in_first_section(row: usize) -> Self {
        Self::new(0, row)
    }

    /// Returns the section.
    #[inline]
    pub const fn section(&self) -> usize {
        self.section
    }

    /// Returns the row within the section.
    #[inline]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns the index of another row in the same section.
    #[inline]
    pub const fn sibling(&self, row: usize) -> Self {
        Self::new(self.section, row)
    }
}

impl From<(usize, usize)> for RowIndex {
    fn from((section, row): (usize, usize)) -> Self {
        Self::new(section, row)
    }
}

impl fmt::Display for RowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_index_accessors() {
        let index = RowIndex::new(1, 4);
        assert_eq!(index.section(), 1);
        assert_eq!(index.row(), 4);
        assert_eq!(index.to_string(), "[1, 4]");
    }

    #[test]
    fn test_sibling_keeps_section() {
        let index = RowIndex::new(0, 3);
        let sibling = index.sibling(7);
        assert_eq!(sibling, RowIndex::new(0, 7));
    }

    #[test]
    fn test_ordering_is_section_major() {
        assert!(RowIndex::new(0, 9) < RowIndex::new(1, 0));
        assert!(RowIndex::row_in_first_section(2) < RowIndex::row_in_first_section(3));
    }
}
