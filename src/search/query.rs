use crate::error::{AppError, Result};
use crate::models::Location;

pub(crate) const SEARCH_TERM_REQUIRED: &str = "Search term is required";

/// A validated search form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub term: String,
    pub location: Location,
    pub spreadsheet_id: Option<String>,
}

impl SearchQuery {
    pub fn new(term: &str, location: Location, spreadsheet_id: Option<String>) -> Result<Self> {
        validate_term(term)?;

        Ok(Self {
            term: term.trim().to_string(),
            location,
            spreadsheet_id: spreadsheet_id.filter(|id| !id.trim().is_empty()),
        })
    }
}

pub(crate) fn validate_term(term: &str) -> Result<()> {
    if term.trim().is_empty() {
        return Err(AppError::Validation(SEARCH_TERM_REQUIRED.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_rejected() {
        for term in ["", "   ", "\n"] {
            let err = SearchQuery::new(term, Location::Australia, None).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "got {:?}", err);
            assert_eq!(err.to_string(), SEARCH_TERM_REQUIRED);
        }
    }

    #[test]
    fn test_term_trimmed() {
        let query = SearchQuery::new("  hose ", Location::NewZealand, None).unwrap();
        assert_eq!(query.term, "hose");
        assert_eq!(query.location, Location::NewZealand);
    }

    #[test]
    fn test_blank_spreadsheet_id_means_none() {
        let query = SearchQuery::new("hose", Location::Australia, Some("".into())).unwrap();
        assert_eq!(query.spreadsheet_id, None);

        let query = SearchQuery::new("hose", Location::Australia, Some("abc".into())).unwrap();
        assert_eq!(query.spreadsheet_id.as_deref(), Some("abc"));
    }
}
