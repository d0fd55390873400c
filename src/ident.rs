// 🔢 Identifier Synthesis - sequence numbers, UETRs, value dates
// Every fabricated identifier in the simulator is drawn here, from an
// injected random source so tests can seed it.

use chrono::{DateTime, Utc};
use rand::Rng;

const HEX: &[u8] = b"0123456789abcdef";
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Message sequence number: decimal, zero-padded to 6 digits
pub fn message_sequence(rng: &mut impl Rng) -> String {
    format!("{:06}", rng.gen_range(0..=999_999u32))
}

/// Fabricated UETR: 36 characters, hyphens after hex positions 8, 12, 16, 20.
///
/// Shaped like an RFC 4122 UUID but intentionally NOT one - plain random hex
/// with no version or variant bits. Real GPI UETRs are v4 UUIDs; this
/// simulator only needs something that looks the part on screen.
pub fn uetr(rng: &mut impl Rng) -> String {
    let mut token = String::with_capacity(36);
    for i in 0..32 {
        token.push(HEX[rng.gen_range(0..HEX.len())] as char);
        if i == 7 || i == 11 || i == 15 || i == 19 {
            token.push('-');
        }
    }
    token
}

/// Random base-36 suffix appended to a TRN by the mock validator
pub fn uetr_suffix(rng: &mut impl Rng) -> String {
    (0..9)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

/// Value date in SWIFT YYYYMMDD form (UTC)
pub fn value_date(now: DateTime<Utc>) -> String {
    now.format("%Y%m%d").to_string()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_message_sequence_is_six_digits() {
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..200 {
            let seq = message_sequence(&mut rng);
            assert_eq!(seq.len(), 6);
            assert!(seq.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_message_sequence_zero_pads() {
        // Scan seeds until a draw lands below 100000; it must keep 6 digits
        for seed in 0..5000u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let seq = message_sequence(&mut rng);
            if seq.starts_with('0') {
                assert_eq!(seq.len(), 6);
                return;
            }
        }
        panic!("no zero-padded sequence in 5000 seeds");
    }

    #[test]
    fn test_uetr_shape() {
        let mut rng = StdRng::seed_from_u64(2);
        let token = uetr(&mut rng);

        assert_eq!(token.len(), 36);

        // Hyphens exactly where an RFC 4122 textual UUID has them
        for (i, c) in token.chars().enumerate() {
            if i == 8 || i == 13 || i == 18 || i == 23 {
                assert_eq!(c, '-', "expected hyphen at {}", i);
            } else {
                assert!(c.is_ascii_hexdigit() && !c.is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn test_uetr_deterministic_under_seed() {
        let a = uetr(&mut StdRng::seed_from_u64(7));
        let b = uetr(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_uetr_suffix_is_nine_base36_chars() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..200 {
            let suffix = uetr_suffix(&mut rng);
            assert_eq!(suffix.len(), 9);
            assert!(suffix
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_value_date_format() {
        let now = Utc.with_ymd_and_hms(2023, 4, 15, 23, 59, 0).unwrap();
        assert_eq!(value_date(now), "20230415");

        let jan = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(value_date(jan), "20240102");
    }
}
