//! Tests for quote domain models and pagination normalisation.

#[cfg(test)]
mod tests {
    use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
    use crate::quotes::{NewQuote, Pagination, Quote};

    // ==================== Pagination Tests ====================

    #[test]
    fn test_pagination_keeps_valid_values() {
        let pagination = Pagination::new(3, 20);
        assert_eq!(pagination.page(), 3);
        assert_eq!(pagination.size(), 20);
        assert_eq!(pagination.offset(), 40);
    }

    #[test]
    fn test_pagination_caps_size() {
        assert_eq!(Pagination::new(1, 101).size(), MAX_PAGE_SIZE);
        assert_eq!(Pagination::new(1, i64::MAX).size(), MAX_PAGE_SIZE);
        assert_eq!(Pagination::new(1, 100).size(), 100);
    }

    #[test]
    fn test_pagination_replaces_non_positive_values() {
        let pagination = Pagination::new(0, -5);
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.size(), DEFAULT_PAGE_SIZE);
        assert_eq!(pagination.offset(), 0);

        assert_eq!(Pagination::new(-2, 10).page(), 1);
    }

    #[test]
    fn test_pagination_default() {
        let pagination = Pagination::default();
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.size(), 50);
    }

    #[test]
    fn test_pagination_offset_does_not_overflow() {
        let pagination = Pagination::new(u32::MAX as i64, 100);
        assert_eq!(pagination.offset(), (u32::MAX as u64 - 1) * 100);
    }

    // ==================== NewQuote Tests ====================

    #[test]
    fn test_new_quote_missing_fields_default_to_empty() {
        let quote: NewQuote = serde_json::from_str(r#"{"text":"a"}"#).unwrap();
        assert_eq!(quote.text, "a");
        assert_eq!(quote.source, "");

        let empty: NewQuote = serde_json::from_str("{}").unwrap();
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_new_quote_ignores_client_id() {
        let quote: NewQuote =
            serde_json::from_str(r#"{"id":"abc","text":"a","source":"b"}"#).unwrap();
        assert_eq!(quote, NewQuote::new("a", "b"));
    }

    #[test]
    fn test_new_quote_validate() {
        assert!(NewQuote::new("text", "").validate().is_ok());
        assert!(NewQuote::new("", "source").validate().is_err());
        assert!(NewQuote::new(" \t", "source").validate().is_ok());
    }

    #[test]
    fn test_quote_serialization_shape() {
        let quote = Quote {
            id: "1".to_string(),
            text: "t".to_string(),
            source: "s".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&quote).unwrap(),
            serde_json::json!({"id": "1", "text": "t", "source": "s"})
        );
    }
}
