// 💾 Session Message Store
// Stand-in for the database the original "stored" messages in: an
// append-only, in-memory log of everything created this session. Callers
// print the confirmation line; nothing here survives process exit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::message::{PaymentInstruction, SynthesizedMessage};

/// A created message as retained for the rest of the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMessage {
    /// Stable identity for this store entry
    pub id: String,

    pub instruction: PaymentInstruction,
    pub message: SynthesizedMessage,
    pub stored_at: DateTime<Utc>,
}

/// Append-only in-memory store of created messages
pub struct MessageStore {
    messages: Vec<StoredMessage>,
}

impl MessageStore {
    pub fn new() -> Self {
        MessageStore {
            messages: Vec::new(),
        }
    }

    /// Record a created message and hand back the stored entry
    pub fn store(
        &mut self,
        instruction: PaymentInstruction,
        message: SynthesizedMessage,
    ) -> &StoredMessage {
        self.messages.push(StoredMessage {
            id: uuid::Uuid::new_v4().to_string(),
            instruction,
            message,
            stored_at: Utc::now(),
        });

        self.messages.last().expect("just pushed")
    }

    pub fn all(&self) -> &[StoredMessage] {
        &self.messages
    }

    pub fn count(&self) -> usize {
        self.messages.len()
    }

    /// Most recently stored message, if any
    pub fn latest(&self) -> Option<&StoredMessage> {
        self.messages.last()
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::synthesize;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_message() -> (PaymentInstruction, SynthesizedMessage) {
        let instruction = PaymentInstruction::sample();
        let mut rng = StdRng::seed_from_u64(1);
        let now = Utc.with_ymd_and_hms(2023, 4, 15, 12, 0, 0).unwrap();
        let message = synthesize(&instruction, &mut rng, now);
        (instruction, message)
    }

    #[test]
    fn test_store_appends_and_stamps_identity() {
        let mut store = MessageStore::new();
        assert_eq!(store.count(), 0);
        assert!(store.latest().is_none());

        let (instruction, message) = sample_message();
        let stored = store.store(instruction.clone(), message);

        assert!(!stored.id.is_empty());
        assert_eq!(stored.instruction, instruction);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_latest_tracks_insertion_order() {
        let mut store = MessageStore::new();

        let (first, message) = sample_message();
        store.store(first, message.clone());

        let mut second = PaymentInstruction::sample();
        second.sender_reference = "INVOICE456".to_string();
        store.store(second.clone(), message);

        assert_eq!(store.count(), 2);
        assert_eq!(store.latest().unwrap().instruction, second);
        assert_eq!(store.all().len(), 2);
    }

    #[test]
    fn test_entries_get_distinct_ids() {
        let mut store = MessageStore::new();

        let (instruction, message) = sample_message();
        let first_id = store.store(instruction.clone(), message.clone()).id.clone();
        let second_id = store.store(instruction, message).id.clone();

        assert_ne!(first_id, second_id);
    }
}
