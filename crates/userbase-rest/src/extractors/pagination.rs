//! Pagination extractor.

use serde::Deserialize;
use userbase_core::PageRequest;
use utoipa::IntoParams;

/// Query parameters for pagination.
///
/// Values are kept as raw strings so that a non-integer `page` or `per_page`
/// falls back to its default instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// 1-based page number, default 1.
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
    /// Items per page, default 10.
    #[param(value_type = Option<i64>)]
    pub per_page: Option<String>,
}

fn parse_or(raw: Option<&str>, default: u32) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or_else(|| i64::from(default))
}

impl From<PaginationQuery> for PageRequest {
    fn from(query: PaginationQuery) -> Self {
        PageRequest::new(
            parse_or(query.page.as_deref(), PageRequest::DEFAULT_PAGE),
            parse_or(query.per_page.as_deref(), PageRequest::DEFAULT_PER_PAGE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, per_page: Option<&str>) -> PageRequest {
        PaginationQuery {
            page: page.map(str::to_string),
            per_page: per_page.map(str::to_string),
        }
        .into()
    }

    #[test]
    fn test_defaults_when_absent() {
        assert_eq!(query(None, None), PageRequest::new(1, 10));
    }

    #[test]
    fn test_parses_integers() {
        let req = query(Some("2"), Some("2"));
        assert_eq!(req.page, 2);
        assert_eq!(req.per_page, 2);
    }

    #[test]
    fn test_non_integer_falls_back() {
        assert_eq!(query(Some("abc"), Some("1.5")), PageRequest::new(1, 10));
        assert_eq!(query(Some(""), Some("5")), PageRequest::new(1, 5));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let req = query(Some("-3"), Some("0"));
        assert_eq!(req.page, 1);
        assert_eq!(req.per_page, PageRequest::DEFAULT_PER_PAGE);
    }
}
