// ✅ Mock UETR Validator
// Shape check standing in for a SWIFT registry lookup. No network call is
// made; a real implementation would query the GPI Tracker API.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ident;

/// Outcome of a mock TRN validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationVerdict {
    pub is_valid: bool,

    /// TRN plus a random base-36 suffix; empty when invalid
    pub uetr: String,
}

/// Validate a Transaction Reference Number.
///
/// Valid iff the TRN is exactly 16 ASCII letters and digits. On success the
/// verdict carries a synthesized UETR beginning with the TRN itself.
pub fn validate(trn: &str, rng: &mut impl Rng) -> ValidationVerdict {
    let is_valid = trn.len() == 16 && trn.chars().all(|c| c.is_ascii_alphanumeric());

    let uetr = if is_valid {
        format!("{}-{}", trn, ident::uetr_suffix(rng))
    } else {
        String::new()
    };

    ValidationVerdict { is_valid, uetr }
}

// ============================================================================
// TESTS
// ============================================================================
