//! Domain layer: the immutable call link snapshot and its strong types (no I/O).

mod state;
mod value;

pub use state::CallLinkState;
pub use value::{CallLinkEpoch, CallLinkRestrictions, ExpirationTime};
