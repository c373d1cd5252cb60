use crate::domain::value::{CallLinkEpoch, CallLinkRestrictions, ExpirationTime};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Snapshot of a call link's state as reported by the native calling engine.
///
/// Immutable: a changed link is represented by a new snapshot. No business rules are
/// checked, so an empty name or an expiration in the past are both legal.
pub struct CallLinkState {
    name: String,
    restrictions: CallLinkRestrictions,
    revoked: bool,
    expiration: ExpirationTime,
    epoch: Option<CallLinkEpoch>,
}

impl CallLinkState {
    /// Build a snapshot from already-typed values.
    ///
    /// Intended for tests; production snapshots come from [`CallLinkState::from_native`].
    pub fn new(
        name: impl Into<String>,
        restrictions: CallLinkRestrictions,
        revoked: bool,
        expiration: ExpirationTime,
        epoch: Option<CallLinkEpoch>,
    ) -> Self {
        Self::from_parts(name.into(), restrictions, revoked, expiration, epoch)
    }

    /// Build a snapshot from the values handed over by the native bridge.
    ///
    /// Never fails: unrecognized restriction codes become [`CallLinkRestrictions::Unknown`]
    /// and the expiration is taken verbatim as seconds since the Unix epoch.
    pub fn from_native(
        name: impl Into<String>,
        raw_restrictions: i32,
        revoked: bool,
        expiration_epoch_seconds: i64,
        epoch: Option<CallLinkEpoch>,
    ) -> Self {
        Self::from_parts(
            name.into(),
            CallLinkRestrictions::from_raw(raw_restrictions),
            revoked,
            ExpirationTime::from_epoch_seconds(expiration_epoch_seconds),
            epoch,
        )
    }

    fn from_parts(
        name: String,
        restrictions: CallLinkRestrictions,
        revoked: bool,
        expiration: ExpirationTime,
        epoch: Option<CallLinkEpoch>,
    ) -> Self {
        Self {
            name,
            restrictions,
            revoked,
            expiration,
            epoch,
        }
    }

    /// Display name of the link. Never absent, but may be empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn restrictions(&self) -> CallLinkRestrictions {
        self.restrictions
    }

    /// Whether the link has been permanently invalidated.
    pub fn is_revoked(&self) -> bool {
        self.revoked
    }

    pub fn expiration(&self) -> ExpirationTime {
        self.expiration
    }

    /// Epoch token, present only for links created under an epoch-aware scheme.
    pub fn epoch(&self) -> Option<CallLinkEpoch> {
        self.epoch
    }
}
