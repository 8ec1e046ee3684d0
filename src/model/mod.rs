//! Pure data structures: products, the create payload, and the sync state machine.

pub mod product;
pub mod sync_state;

pub use product::*;
pub use sync_state::*;
