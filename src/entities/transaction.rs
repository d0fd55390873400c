// 📜 Mock GPI Transaction History
// Fixed five-row fixture shown in the tracker's "Recent Transactions" table.
// Read-only; nothing in the simulator appends to it.

use serde::{Deserialize, Serialize};

// ============================================================================
// TRANSACTION STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::InProgress => "In Progress",
            TransactionStatus::Failed => "Failed",
        }
    }
}

// ============================================================================
// GPI TRANSACTION
// ============================================================================

/// One row of the mock history table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpiTransaction {
    pub id: u32,
    pub trn: String,
    pub uetr: String,
    pub status: TransactionStatus,

    /// Display string, dollar-prefixed in the fixture
    pub amount: String,
    pub date: String,
}

/// The fixed "last 5 transactions processed" fixture
pub fn transaction_history() -> Vec<GpiTransaction> {
    let row = |id, trn: &str, uetr: &str, status, amount: &str, date: &str| GpiTransaction {
        id,
        trn: trn.to_string(),
        uetr: uetr.to_string(),
        status,
        amount: amount.to_string(),
        date: date.to_string(),
    };

    vec![
        row(
            1,
            "TRN123456789012",
            "TRN123456789012-ab3d5f",
            TransactionStatus::Completed,
            "$5000",
            "2023-04-15",
        ),
        row(
            2,
            "TRN987654321098",
            "TRN987654321098-xy7u2p",
            TransactionStatus::InProgress,
            "$3500",
            "2023-04-14",
        ),
        row(
            3,
            "TRN456789012345",
            "TRN456789012345-mn9q8r",
            TransactionStatus::Completed,
            "$7200",
            "2023-04-13",
        ),
        row(
            4,
            "TRN654321098765",
            "TRN654321098765-jk4l5m",
            TransactionStatus::Failed,
            "$2100",
            "2023-04-12",
        ),
        row(
            5,
            "TRN234567890123",
            "TRN234567890123-gh6i7j",
            TransactionStatus::Completed,
            "$9800",
            "2023-04-11",
        ),
    ]
}

// ============================================================================
// TESTS
// ============================================================================
