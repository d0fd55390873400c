// ✉️ Message Synthesizer - fabricated MT103 text
// Renders a PaymentInstruction into the fixed display template plus a
// CRLF-terminated raw variant. Cosmetic only: the block-format body is not
// validated against the real MT103 field grammar and is never transmitted.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ident;

/// Payment fields captured by the creation form
///
/// Ephemeral UI state. Every field is a free-text string; anything left
/// unset renders as an empty substring in the template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInstruction {
    #[serde(default)]
    pub sender_bank: String,

    #[serde(default, rename = "senderBIC")]
    pub sender_bic: String,

    #[serde(default)]
    pub sender_reference: String,

    /// Decimal string, never parsed
    #[serde(default)]
    pub amount: String,

    #[serde(default)]
    pub currency: String,

    #[serde(default, rename = "receiverBIC")]
    pub receiver_bic: String,

    #[serde(default)]
    pub beneficiary_name: String,

    #[serde(default)]
    pub beneficiary_account: String,

    #[serde(default)]
    pub remittance_info: String,

    /// Sender-assigned Transaction Reference Number
    #[serde(default)]
    pub trn: String,
}

impl PaymentInstruction {
    /// The documented sample instruction (demo mode, message view fallback)
    pub fn sample() -> Self {
        PaymentInstruction {
            sender_bank: "Deutsche Bank".to_string(),
            sender_bic: "DEUTDEFF".to_string(),
            sender_reference: "INVOICE123".to_string(),
            amount: "50000.00".to_string(),
            currency: "EUR".to_string(),
            receiver_bic: "BOFAUS3NXXX".to_string(),
            beneficiary_name: "John Doe".to_string(),
            beneficiary_account: "123456789".to_string(),
            remittance_info: "Payment for services rendered".to_string(),
            trn: "TRN123456789".to_string(),
        }
    }
}

/// Rendered message pair. Derived, never stored, regenerated on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesizedMessage {
    /// Display text, LF line terminators
    pub formatted: String,

    /// Same text with every line terminator replaced by CRLF
    pub raw: String,

    /// UETR interpolated into the template (shown separately in the UI)
    pub uetr: String,

    /// Message sequence number interpolated into the template
    pub sequence: String,
}

impl SynthesizedMessage {
    /// Synthesize from the ambient clock and thread RNG
    pub fn generate(instruction: &PaymentInstruction) -> Self {
        synthesize(instruction, &mut rand::thread_rng(), Utc::now())
    }
}

/// Render the full message template.
///
/// Pure except for the injected random source and clock: same seed and same
/// instant produce byte-identical output.
pub fn synthesize(
    instruction: &PaymentInstruction,
    rng: &mut impl Rng,
    now: DateTime<Utc>,
) -> SynthesizedMessage {
    let date = ident::value_date(now);
    let sequence = ident::message_sequence(rng);
    let uetr = ident::uetr(rng);

    let formatted = format!(
        "\
SWIFT Message Details:
----------------------
Message Type: MT 103 - Single Customer Credit Transfer
Sender: {sender_bank} ({sender_bic})
Receiver: {receiver_bic}
Message Sequence: {sequence}
UETR: {uetr}
Date: {date}

Transaction Information:
------------------------
Sender's Reference: {sender_reference}
Transaction Reference Number (TRN): {trn}
Amount: {currency} {amount}
Value Date: {date}
Process Type: Semi-Automated GPI
Funds Destination: Common Account

Ordering Customer:
------------------
{sender_bank}
{sender_bic}

Beneficiary Customer:
---------------------
Account: {beneficiary_account}
Name: {beneficiary_name}

Remittance Information:
-----------------------
{remittance_info}

Charges: SHA (Shared)

SWIFT Message Content:
----------------------
{{1:F01{sender_bic}AXXX0000000000}}
{{2:I103{receiver_bic}N}}
{{3:{{108:{sequence}}}
{{121:{uetr}}}}}
{{4:
:20:{sender_reference}
:23B:CRED
:32A:{date}{currency}{amount}
:50K:/{beneficiary_account}
{beneficiary_name}
:59:/{beneficiary_account}
{beneficiary_name}
:70:{remittance_info}
:71A:SHA
-}}
{{5:{{MAC:00000000}}{{CHK:000000000000}}}}

Additional Information:
-----------------------
This SWIFT message represents a semi-automated GPI (Global Payments Innovation) transaction.
Funds will be deposited into a common account for further processing.
The message is authenticated and encrypted for secure transmission.
Please ensure all details are correct before processing the payment.
For any queries, please contact the sending institution.

Disclaimer: This message is for demonstration purposes only.",
        sender_bank = instruction.sender_bank,
        sender_bic = instruction.sender_bic,
        receiver_bic = instruction.receiver_bic,
        sequence = sequence,
        uetr = uetr,
        date = date,
        sender_reference = instruction.sender_reference,
        trn = instruction.trn,
        currency = instruction.currency,
        amount = instruction.amount,
        beneficiary_account = instruction.beneficiary_account,
        beneficiary_name = instruction.beneficiary_name,
        remittance_info = instruction.remittance_info,
    );

    let raw = formatted.replace('\n', "\r\n");

    SynthesizedMessage {
        formatted,
        raw,
        uetr,
        sequence,
    }
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

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 4, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_template_interpolates_sample_fields() {
        let mut rng = StdRng::seed_from_u64(42);
        let msg = synthesize(&PaymentInstruction::sample(), &mut rng, fixed_now());

        assert!(msg.formatted.contains("Sender: Deutsche Bank (DEUTDEFF)"));
        assert!(msg.formatted.contains("Receiver: BOFAUS3NXXX"));
        assert!(msg.formatted.contains(":32A:20230415EUR50000.00"));
        assert!(msg.formatted.contains(":20:INVOICE123"));
        assert!(msg.formatted.contains(":71A:SHA"));
        assert!(msg
            .formatted
            .contains("Transaction Reference Number (TRN): TRN123456789"));
    }

    #[test]
    fn test_all_submitted_fields_appear_verbatim() {
        let instruction = PaymentInstruction {
            sender_bank: "Barclays".to_string(),
            sender_bic: "BARCGB22".to_string(),
            sender_reference: "REF-0042".to_string(),
            amount: "1234.56".to_string(),
            currency: "GBP".to_string(),
            receiver_bic: "CHASUS33".to_string(),
            beneficiary_name: "Jane Roe".to_string(),
            beneficiary_account: "GB29NWBK601613".to_string(),
            remittance_info: "Consulting Q2".to_string(),
            trn: "TRN0000000000042".to_string(),
        };

        let mut rng = StdRng::seed_from_u64(9);
        let msg = synthesize(&instruction, &mut rng, fixed_now());

        for field in [
            "Barclays",
            "BARCGB22",
            "REF-0042",
            "1234.56",
            "GBP",
            "CHASUS33",
            "Jane Roe",
            "GB29NWBK601613",
            "Consulting Q2",
            "TRN0000000000042",
        ] {
            assert!(msg.formatted.contains(field), "missing {}", field);
        }
    }

    #[test]
    fn test_raw_is_formatted_with_crlf() {
        let mut rng = StdRng::seed_from_u64(5);
        let msg = synthesize(&PaymentInstruction::sample(), &mut rng, fixed_now());

        assert_eq!(msg.raw.replace("\r\n", "\n"), msg.formatted);
        assert!(!msg.formatted.contains('\r'));
        assert_eq!(
            msg.raw.matches("\r\n").count(),
            msg.formatted.matches('\n').count()
        );
    }

    #[test]
    fn test_same_seed_and_clock_is_deterministic() {
        let sample = PaymentInstruction::sample();

        let a = synthesize(&sample, &mut StdRng::seed_from_u64(11), fixed_now());
        let b = synthesize(&sample, &mut StdRng::seed_from_u64(11), fixed_now());

        assert_eq!(a.formatted, b.formatted);
        assert_eq!(a.raw, b.raw);
        assert_eq!(a.uetr, b.uetr);
        assert_eq!(a.sequence, b.sequence);
    }

    #[test]
    fn test_header_carries_sequence_and_uetr() {
        let mut rng = StdRng::seed_from_u64(13);
        let msg = synthesize(&PaymentInstruction::sample(), &mut rng, fixed_now());

        assert!(msg
            .formatted
            .contains(&format!("Message Sequence: {}", msg.sequence)));
        assert!(msg.formatted.contains(&format!("UETR: {}", msg.uetr)));
        assert!(msg.formatted.contains(&format!("{{108:{}}}", msg.sequence)));
        assert!(msg.formatted.contains(&format!("{{121:{}}}", msg.uetr)));
    }

    #[test]
    fn test_empty_instruction_renders_blank_interpolations() {
        let mut rng = StdRng::seed_from_u64(17);
        let msg = synthesize(&PaymentInstruction::default(), &mut rng, fixed_now());

        // No failure path: absent fields degrade to empty substrings
        assert!(msg.formatted.contains("Sender:  ()"));
        assert!(msg.formatted.contains(":32A:20230415"));
        assert!(msg
            .formatted
            .contains("Disclaimer: This message is for demonstration purposes only."));
    }
}
