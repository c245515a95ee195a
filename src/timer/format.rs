//! Counter text formatting

/// Format a number of seconds as `H:MM:SS`, eliding leading units that are zero.
///
/// Hours are shown only when non-zero, minutes only when hours are shown or
/// minutes are non-zero. Every unit after the first shown one is padded to
/// two digits.
pub fn format_time(seconds: u64) -> String {
    let hh = seconds / 3600;
    let mm = (seconds % 3600) / 60;
    let ss = seconds % 60;

    if hh > 0 {
        format!("{}:{:02}:{:02}", hh, mm, ss)
    } else if mm > 0 {
        format!("{}:{:02}", mm, ss)
    } else {
        ss.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_only() {
        assert_eq!(format_time(0), "0");
        assert_eq!(format_time(7), "7");
        assert_eq!(format_time(59), "59");
    }

    #[test]
    fn minutes_pad_seconds() {
        assert_eq!(format_time(60), "1:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(3599), "59:59");
    }

    #[test]
    fn hours_pad_minutes_and_seconds() {
        assert_eq!(format_time(3600), "1:00:00");
        assert_eq!(format_time(3661), "1:01:01");
        assert_eq!(format_time(86399), "23:59:59");
        assert_eq!(format_time(360_000), "100:00:00");
    }
}
