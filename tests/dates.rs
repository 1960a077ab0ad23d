#[cfg(test)]
mod tests {
    use agenda::libs::dates::{format_human_date, from_canonical, parse_human_date, to_canonical, Timestamp};
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_parse_human_date() {
        let ts = parse_human_date("29/08/2025 09:30").unwrap();
        let expected = NaiveDate::from_ymd_opt(2025, 8, 29).unwrap().and_hms_opt(9, 30, 0).unwrap();
        assert_eq!(ts.naive(), expected);
    }

    #[test]
    fn test_canonical_round_trip() {
        let samples = [
            "29/08/2025 09:30",
            "01/01/2025 00:00",
            "31/12/1999 23:59",
            "29/02/2024 12:00",
            "15/06/2030 07:05",
        ];

        for sample in samples {
            let parsed = parse_human_date(sample).unwrap();
            assert_eq!(from_canonical(&to_canonical(parsed)).unwrap(), parsed, "{}", sample);
            assert_eq!(format_human_date(parsed), sample);
        }
    }

    #[test]
    fn test_canonical_form() {
        let ts = parse_human_date("05/03/2025 08:07").unwrap();
        assert_eq!(to_canonical(ts), "2025-03-05 08:07");
    }

    #[test]
    fn test_format_pads_unpadded_input() {
        let ts = parse_human_date("1/2/2025 9:05").unwrap();
        assert_eq!(format_human_date(ts), "01/02/2025 09:05");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let ts = parse_human_date("  29/08/2025 09:30 ").unwrap();
        assert_eq!(to_canonical(ts), "2025-08-29 09:30");
    }

    #[test]
    fn test_malformed_dates_are_rejected() {
        let malformed = [
            "31/13/2025 10:00",
            "2025-08-29 10:00",
            "29/08/2025",
            "30/02/2025 10:00",
            "29/02/2025 10:00",
            "29/08/2025 24:00",
            "29/08/2025 10:60",
            "29-08-2025 10:00",
            "29/08/2025 10:00 tomorrow",
            "29/08/2025 10:00:00",
            "",
            "today",
            "29/08/25 10:00",
            "29/08/5 10:00",
            "29/08/202510:00",
            "29/08/+12025 10:00",
            "29/08/2025   10:00",
            "29/08/-2025 10:00",
            "+1/08/2025 10:00",
            "029/08/2025 10:00",
            "29/08/2025 10:000",
        ];

        for text in malformed {
            let err = parse_human_date(text).unwrap_err();
            assert_eq!(err.input, text);
        }
    }

    #[test]
    fn test_from_canonical_rejects_human_form() {
        assert!(from_canonical("29/08/2025 10:00").is_err());
        assert!(from_canonical("2025-08-29").is_err());
    }

    #[test]
    fn test_from_canonical_requires_fixed_width() {
        let malformed = [
            "25-08-29 10:00",
            "+12025-08-29 10:00",
            "2025-8-29 10:00",
            "2025-08-29 9:05",
            "2025-08-2910:00",
            "2025-08-29  10:00",
        ];

        for text in malformed {
            assert!(from_canonical(text).is_err(), "{}", text);
        }
        assert!(from_canonical("2025-08-29 09:05").is_ok());
    }

    #[test]
    fn test_canonical_text_sorts_chronologically() {
        let earlier = parse_human_date("31/12/2024 23:59").unwrap();
        let later = parse_human_date("01/01/2025 00:00").unwrap();

        assert!(earlier < later);
        assert!(to_canonical(earlier) < to_canonical(later));
    }

    #[test]
    fn test_timestamp_truncates_to_minutes() {
        let naive = NaiveDate::from_ymd_opt(2025, 8, 29).unwrap().and_hms_milli_opt(9, 30, 45, 500).unwrap();
        let ts = Timestamp::from_naive(naive);

        assert_eq!(ts.naive().second(), 0);
        assert_eq!(ts.naive().nanosecond(), 0);
        assert_eq!(from_canonical(&to_canonical(ts)).unwrap(), ts);
    }

    #[test]
    fn test_display_uses_human_form() {
        let ts = from_canonical("2025-08-29 09:30").unwrap();
        assert_eq!(ts.to_string(), "29/08/2025 09:30");
    }
}
