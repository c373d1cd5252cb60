//! Boundary layer: the wire shape handed over by the native calling engine.

mod call_link_state;

pub use call_link_state::{
    NativeCallLinkState, NativeError, decode_call_link_state_json, encode_call_link_state_json,
};
