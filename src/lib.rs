//! Typed call link state as observed by a client of a native calling engine.
//!
//! The native engine reports call link state as loosely-typed wire values. This crate
//! normalizes them into an immutable [`CallLinkState`]: a domain layer of strong types,
//! and a boundary layer ([`native`]) for the wire shape and its quirks.
//!
//! ```rust
//! use call_link_state::{CallLinkRestrictions, CallLinkState};
//!
//! let state = CallLinkState::from_native("Family Call", 0, false, 1_700_000_000, None);
//! assert_eq!(state.restrictions(), CallLinkRestrictions::None);
//! assert_eq!(state.expiration().to_string(), "2023-11-14T22:13:20Z");
//!
//! // Codes the crate does not know yet degrade instead of failing.
//! let future = CallLinkState::from_native("", 7, false, 0, None);
//! assert_eq!(future.restrictions(), CallLinkRestrictions::Unknown);
//! ```
#![forbid(unsafe_code)]

pub mod domain;
pub mod native;

pub use domain::{CallLinkEpoch, CallLinkRestrictions, CallLinkState, ExpirationTime};
pub use native::{NativeCallLinkState, NativeError};
