/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the console

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2026-03-15" or "2026-03-15T14:02:26Z" -> "15/03/2026"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Format a UTC timestamp for table cells.
pub fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%d/%m/%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-03-15"), "15/03/2026");
        assert_eq!(format_date("2026-03-15T14:02:26.123Z"), "15/03/2026");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalide"), "invalide");
    }
}
