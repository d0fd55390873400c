// SWIFT GPI Simulator - Core Library
// Exposes all modules for use in CLI, API server, and tests
//
// Everything here fabricates data locally. There is no SWIFT connectivity,
// no authentication, and no durable persistence - the simulator exists to
// demonstrate what GPI message creation and tracking look like.

pub mod ident;
pub mod message;
pub mod validator;
pub mod tracer;
pub mod store;
pub mod entities;

#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use message::{synthesize, PaymentInstruction, SynthesizedMessage};
pub use validator::{validate, ValidationVerdict};
pub use tracer::{TracerOutcome, TracerStatus, TracerValidation};
pub use store::{MessageStore, StoredMessage};
pub use entities::{
    transaction_history, BankDirectory, BankDirectoryEntry, GpiTransaction, TransactionStatus,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
