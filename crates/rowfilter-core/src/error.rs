use thiserror::Error;

pub type Result<T> = std::result::Result<T, FilterError>;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("search input not found: #{id}")]
    MissingInput { id: String },

    #[error("table not found: #{id}")]
    MissingTable { id: String },

    #[error("host error: {message}")]
    Host { message: String },

    #[error("invalid filter config: {0}")]
    Config(#[from] serde_json::Error),
}

impl FilterError {
    #[must_use]
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host {
            message: message.into(),
        }
    }

    /// Whether the page simply does not carry the expected elements.
    #[must_use]
    pub fn is_missing_element(&self) -> bool {
        matches!(self, Self::MissingInput { .. } | Self::MissingTable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_elements_are_classified() {
        assert!(
            FilterError::MissingInput {
                id: "search".into()
            }
            .is_missing_element()
        );
        assert!(
            FilterError::MissingTable {
                id: "bookTable".into()
            }
            .is_missing_element()
        );
        assert!(!FilterError::host("detached node").is_missing_element());
    }

    #[test]
    fn display_names_the_element_id() {
        let err = FilterError::MissingTable {
            id: "bookTable".into(),
        };
        assert_eq!(err.to_string(), "table not found: #bookTable");
    }
}
