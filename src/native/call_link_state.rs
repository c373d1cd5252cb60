use serde::{Deserialize, Serialize};

use crate::domain::{CallLinkEpoch, CallLinkState};

/// Restriction code written for [`CallLinkRestrictions::Unknown`](crate::CallLinkRestrictions::Unknown), which has no code of its own.
const UNKNOWN_RESTRICTIONS_CODE: i32 = -1;

#[derive(Debug, thiserror::Error)]
pub enum NativeError {
    #[error("invalid call link state JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Call link state in the shape the native bridge hands it over.
///
/// Fields are loosely typed on purpose; convert into [`CallLinkState`] to get the
/// normalized view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeCallLinkState {
    pub name: String,
    pub raw_restrictions: i32,
    pub revoked: bool,
    pub expiration_epoch_second: i64,
    #[serde(default)]
    pub epoch: Option<u32>,
}

impl From<NativeCallLinkState> for CallLinkState {
    fn from(value: NativeCallLinkState) -> Self {
        CallLinkState::from_native(
            value.name,
            value.raw_restrictions,
            value.revoked,
            value.expiration_epoch_second,
            value.epoch.map(CallLinkEpoch::from_raw),
        )
    }
}

impl From<&CallLinkState> for NativeCallLinkState {
    fn from(value: &CallLinkState) -> Self {
        Self {
            name: value.name().to_owned(),
            raw_restrictions: value
                .restrictions()
                .as_raw()
                .unwrap_or(UNKNOWN_RESTRICTIONS_CODE),
            revoked: value.is_revoked(),
            expiration_epoch_second: value.expiration().epoch_seconds(),
            epoch: value.epoch().map(CallLinkEpoch::as_raw),
        }
    }
}

pub fn decode_call_link_state_json(json: &str) -> Result<CallLinkState, NativeError> {
    let parsed: NativeCallLinkState = serde_json::from_str(json)?;
    tracing::trace!(
        raw_restrictions = parsed.raw_restrictions,
        expiration_epoch_second = parsed.expiration_epoch_second,
        has_epoch = parsed.epoch.is_some(),
        "decoded native call link state"
    );

    let state = CallLinkState::from(parsed);
    if !state.restrictions().is_known() {
        tracing::debug!(
            "call link state carries an unrecognized restrictions code, treating as unknown"
        );
    }
    Ok(state)
}

pub fn encode_call_link_state_json(state: &CallLinkState) -> Result<String, NativeError> {
    Ok(serde_json::to_string(&NativeCallLinkState::from(state))?)
}
