use chrono::{Local, NaiveDate};

/// Picks the month a dashboard should display.
///
/// Policy, in order: a well-formed requested month wins as-is; otherwise the
/// current calendar month if it has a tracking row; otherwise the most
/// recent known month (the `YYYY-MM` format sorts correctly as a string);
/// otherwise the current month even though nothing is tracked for it.
/// A malformed request is swallowed, never an error.
pub fn resolve_month(requested: Option<&str>, available: &[String]) -> String {
    if let Some(token) = requested {
        if is_month_token(token) {
            return token.to_string();
        }
    }

    let current = current_month();
    if available.iter().any(|month| *month == current) {
        return current;
    }

    available
        .iter()
        .max()
        .cloned()
        .unwrap_or(current)
}

/// The server's current calendar month as `YYYY-MM`, in local time.
pub fn current_month() -> String {
    Local::now().format("%Y-%m").to_string()
}

fn is_month_token(token: &str) -> bool {
    NaiveDate::parse_from_str(&format!("{}-01", token), "%Y-%m-%d")
        .map(|date| date.format("%Y-%m").to_string() == token)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn valid_requested_month_wins_even_when_unknown() {
        let available = months(&["2024-01", "2024-02"]);
        assert_eq!(resolve_month(Some("2023-11"), &available), "2023-11");
    }

    #[test]
    fn invalid_month_number_falls_back() {
        let available = months(&["2024-01"]);
        assert_eq!(resolve_month(Some("2024-13"), &available), "2024-01");
    }

    #[test]
    fn garbage_request_falls_back_without_error() {
        let available = months(&["2024-03", "2024-05", "2024-04"]);
        assert_eq!(resolve_month(Some("not-a-month"), &available), "2024-05");
    }

    #[test]
    fn current_month_preferred_when_available() {
        let available = months(&["1999-01", &current_month()]);
        assert_eq!(resolve_month(None, &available), current_month());
    }

    #[test]
    fn empty_history_defaults_to_current_month() {
        assert_eq!(resolve_month(None, &[]), current_month());
        assert_eq!(resolve_month(Some("2024-13"), &[]), current_month());
    }

    #[test]
    fn month_token_shape_is_strict() {
        assert!(is_month_token("2024-07"));
        assert!(!is_month_token("2024-7"));
        assert!(!is_month_token("2024-00"));
        assert!(!is_month_token("202407"));
    }
}
