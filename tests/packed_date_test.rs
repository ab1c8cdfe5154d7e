use hifitime::Epoch;
use mpcorb::{decode_packed_character, decode_packed_date, PackedDate, PackedDateError};

fn seconds_from_utc_midnight(packed: &str, year: i32, month: u8, day: u8) -> f64 {
    let decoded = decode_packed_date(packed).unwrap();
    (Epoch::from_gregorian_utc_at_midnight(year, month, day) - decoded).to_seconds()
}

#[test]
fn test_reference_dates() {
    for (packed, (y, m, d)) in [
        ("J9611", (1996, 1, 1)),
        ("K01AM", (2001, 10, 22)),
        ("I976C", (1897, 6, 12)),
    ] {
        let delta = seconds_from_utc_midnight(packed, y, m, d);
        assert!((0.0..=120.0).contains(&delta), "{packed}: {delta}");
    }
}

#[test]
fn test_alphabet() {
    let alphabet = "0123456789ABCDEFGHIJKLMNOPQRSTUV";
    for (i, c) in alphabet.chars().enumerate() {
        assert_eq!(decode_packed_character(c), Ok(i as u8));
    }
    for c in ['W', 'Z', 'a', 'k', ' ', '-', 'é'] {
        assert_eq!(
            decode_packed_character(c),
            Err(PackedDateError::InvalidCharacter(c))
        );
    }
}

#[test]
fn test_wrong_length() {
    for packed in ["K01A", "K01AMX", ""] {
        assert!(matches!(
            decode_packed_date(packed),
            Err(PackedDateError::InvalidLength(_))
        ));
    }
}

#[test]
fn test_round_trip_over_two_centuries() {
    for year in (1850..2100).step_by(7) {
        for month in 1..=12u8 {
            for day in [1u8, 9, 10, 15, 28] {
                let date = PackedDate::new(year, month, day).unwrap();
                let packed = date.to_string();
                assert_eq!(packed.len(), 5);

                let decoded: PackedDate = packed.parse().unwrap();
                assert_eq!(decoded, date);

                let epoch = decode_packed_date(&packed).unwrap();
                assert_eq!(PackedDate::from_epoch(epoch).unwrap(), date, "{packed}");
            }
        }
    }
}
