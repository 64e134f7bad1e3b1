//! Domain model types (pure).
//!
//! Records, the key vocabulary and the error taxonomy.

pub mod error;
pub mod key;
pub mod record;

// Re-export for convenience
pub use error::BrowserError;
pub use key::KeyToken;
pub use record::{Consumable, Personnel, Record, RecordId, Series, Status};
