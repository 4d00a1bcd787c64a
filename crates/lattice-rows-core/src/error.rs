//! Error types for Lattice Rows.

/// A specialized Result type for binding operations.
pub type BindingResult<T> = std::result::Result<T, BindingError>;

/// Broad classification of a [`BindingError`].
///
/// Both kinds are programmer errors. They are reported to the caller
/// immediately and never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The binding was used before it was fully configured.
    Configuration,
    /// A section or row index fell outside the bound collection.
    Index,
}

/// Errors returned when a host view queries a list binding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    /// A row was requested before a row factory was installed.
    #[error("Row factory has not been set. Call set_row_factory() before requesting rows")]
    RowFactoryUnset,

    /// A row was requested but no live host view is bound.
    #[error("Host view is not bound or has already been dropped")]
    HostViewUnset,

    /// The requested section does not exist.
    #[error("Section {section} is out of range (section count is {sections})")]
    SectionOutOfRange { section: usize, sections: usize },

    /// The requested row does not exist.
    #[error("Row {row} is out of range (row count is {rows})")]
    RowOutOfRange { row: usize, rows: usize },
}

impl BindingError {
    /// Create a section range error.
    pub fn section_out_of_range(section: usize, sections: usize) -> Self {
        Self::SectionOutOfRange { section, sections }
    }

    /// Create a row range error.
    pub fn row_out_of_range(row: usize, rows: usize) -> Self {
        Self::RowOutOfRange { row, rows }
    }

    /// Returns the broad kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RowFactoryUnset | Self::HostViewUnset => ErrorKind::Configuration,
            Self::SectionOutOfRange { .. } | Self::RowOutOfRange { .. } => ErrorKind::Index,
        }
    }

    /// Returns `true` for configuration errors.
    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    /// Returns `true` for index errors.
    pub fn is_index(&self) -> bool {
        self.kind() == ErrorKind::Index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(BindingError::RowFactoryUnset.kind(), ErrorKind::Configuration);
        assert_eq!(BindingError::HostViewUnset.kind(), ErrorKind::Configuration);
        assert!(BindingError::section_out_of_range(1, 1).is_index());
        assert!(BindingError::row_out_of_range(10, 10).is_index());
        assert!(!BindingError::RowFactoryUnset.is_index());
    }

    #[test]
    fn test_error_display() {
        let err = BindingError::row_out_of_range(12, 10);
        assert_eq!(err.to_string(), "Row 12 is out of range (row count is 10)");

        let err = BindingError::section_out_of_range(2, 1);
        assert_eq!(err.to_string(), "Section 2 is out of range (section count is 1)");
    }
}
