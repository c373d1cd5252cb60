use std::fmt;
use std::str::FromStr;
use std::time::{Duration, SystemTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Join policy attached to a call link.
///
/// The native engine may introduce new policies before this crate learns about them;
/// those arrive as [`CallLinkRestrictions::Unknown`] and should be treated conservatively.
pub enum CallLinkRestrictions {
    /// Anyone holding the link may join.
    None,
    /// Joining requires approval by a call admin.
    AdminApproval,
    /// The native side reported a policy this crate does not recognize.
    Unknown,
}

impl CallLinkRestrictions {
    /// Wire code for [`CallLinkRestrictions::None`].
    pub const NONE_CODE: i32 = 0;
    /// Wire code for [`CallLinkRestrictions::AdminApproval`].
    pub const ADMIN_APPROVAL_CODE: i32 = 1;

    /// Map a raw wire code to a restriction policy.
    ///
    /// Total: every code not known to this crate (negative ones included) maps to
    /// [`CallLinkRestrictions::Unknown`].
    pub fn from_raw(code: i32) -> Self {
        match code {
            Self::NONE_CODE => Self::None,
            Self::ADMIN_APPROVAL_CODE => Self::AdminApproval,
            _ => Self::Unknown,
        }
    }

    /// Wire code for this policy, or `None` for [`CallLinkRestrictions::Unknown`].
    pub fn as_raw(self) -> Option<i32> {
        match self {
            Self::None => Some(Self::NONE_CODE),
            Self::AdminApproval => Some(Self::ADMIN_APPROVAL_CODE),
            Self::Unknown => None,
        }
    }

    /// Returns `true` unless this is [`CallLinkRestrictions::Unknown`].
    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CallLinkRestrictions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::AdminApproval => "admin-approval",
            Self::Unknown => "unknown",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Opaque versioning token distinguishing generations of a call link.
///
/// Only links created under an epoch-aware scheme carry one; see
/// [`CallLinkState::epoch`](crate::CallLinkState::epoch).
pub struct CallLinkEpoch(u32);

impl CallLinkEpoch {
    /// Wrap the raw token as handed over by the native engine.
    pub fn from_raw(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw token.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Absolute UTC instant with whole-second resolution.
///
/// Stored as seconds since the Unix epoch, so every `i64` the native side can hand over
/// is representable. Range only matters when converting to [`SystemTime`], which is
/// checked (see [`ExpirationTime::to_system_time`]).
pub struct ExpirationTime(i64);

impl ExpirationTime {
    /// `1970-01-01T00:00:00Z`.
    pub const UNIX_EPOCH: Self = Self(0);

    /// Largest instant `humantime` can render as RFC 3339 (`9999-12-31T23:59:59Z`).
    const MAX_RFC3339_SECONDS: i64 = 253_402_300_799;

    /// Create an instant from seconds since the Unix epoch (no range validation is performed).
    pub fn from_epoch_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Seconds since the Unix epoch.
    pub fn epoch_seconds(self) -> i64 {
        self.0
    }

    /// Convert to the host clock type, or `None` if the host cannot represent this instant.
    pub fn to_system_time(self) -> Option<SystemTime> {
        let offset = Duration::from_secs(self.0.unsigned_abs());
        if self.0 >= 0 {
            SystemTime::UNIX_EPOCH.checked_add(offset)
        } else {
            SystemTime::UNIX_EPOCH.checked_sub(offset)
        }
    }
}

impl From<SystemTime> for ExpirationTime {
    /// Truncate to whole seconds (toward the past), saturating at the `i64` range.
    fn from(value: SystemTime) -> Self {
        let seconds = match value.duration_since(SystemTime::UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
            Err(before) => {
                let before = before.duration();
                let whole = before.as_secs() + u64::from(before.subsec_nanos() > 0);
                0_i64.checked_sub_unsigned(whole).unwrap_or(i64::MIN)
            }
        };
        Self(seconds)
    }
}

impl fmt::Display for ExpirationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..=Self::MAX_RFC3339_SECONDS).contains(&self.0) {
            if let Some(time) = self.to_system_time() {
                return write!(f, "{}", humantime::format_rfc3339_seconds(time));
            }
        }
        write!(f, "@{}", self.0)
    }
}

impl FromStr for ExpirationTime {
    type Err = humantime::TimestampError;

    /// Parse an RFC 3339 UTC timestamp; fractional seconds are dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        humantime::parse_rfc3339(s.trim()).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restrictions_known_codes() {
        assert_eq!(CallLinkRestrictions::from_raw(0), CallLinkRestrictions::None);
        assert_eq!(
            CallLinkRestrictions::from_raw(1),
            CallLinkRestrictions::AdminApproval
        );
    }

    #[test]
    fn restrictions_unknown_codes_degrade() {
        for code in [i32::MIN, -2, -1, 2, 3, 99, 1000, i32::MAX] {
            assert_eq!(
                CallLinkRestrictions::from_raw(code),
                CallLinkRestrictions::Unknown,
                "code {code}"
            );
        }
    }

    #[test]
    fn restrictions_raw_code_inverse() {
        for restrictions in [
            CallLinkRestrictions::None,
            CallLinkRestrictions::AdminApproval,
        ] {
            let code = restrictions.as_raw().unwrap();
            assert_eq!(CallLinkRestrictions::from_raw(code), restrictions);
            assert!(restrictions.is_known());
        }
        assert_eq!(CallLinkRestrictions::Unknown.as_raw(), None);
        assert!(!CallLinkRestrictions::Unknown.is_known());
    }

    #[test]
    fn restrictions_display() {
        assert_eq!(CallLinkRestrictions::None.to_string(), "none");
        assert_eq!(
            CallLinkRestrictions::AdminApproval.to_string(),
            "admin-approval"
        );
        assert_eq!(CallLinkRestrictions::Unknown.to_string(), "unknown");
    }

    #[test]
    fn epoch_keeps_raw_token() {
        let epoch = CallLinkEpoch::from_raw(0xdead_beef);
        assert_eq!(epoch.as_raw(), 0xdead_beef);
        assert_eq!(epoch, CallLinkEpoch::from_raw(0xdead_beef));
        assert_ne!(epoch, CallLinkEpoch::from_raw(0));
    }

    #[test]
    fn expiration_seconds_round_trip() {
        for seconds in [i64::MIN, -1, 0, 1, 1_700_000_000, i64::MAX] {
            assert_eq!(
                ExpirationTime::from_epoch_seconds(seconds).epoch_seconds(),
                seconds
            );
        }
    }

    #[test]
    fn expiration_to_system_time() {
        let time = ExpirationTime::from_epoch_seconds(1_700_000_000)
            .to_system_time()
            .unwrap();
        assert_eq!(
            time.duration_since(SystemTime::UNIX_EPOCH).unwrap(),
            Duration::from_secs(1_700_000_000)
        );

        let before = ExpirationTime::from_epoch_seconds(-60)
            .to_system_time()
            .unwrap();
        assert_eq!(
            SystemTime::UNIX_EPOCH.duration_since(before).unwrap(),
            Duration::from_secs(60)
        );

        assert_eq!(
            ExpirationTime::UNIX_EPOCH.to_system_time(),
            Some(SystemTime::UNIX_EPOCH)
        );
    }

    #[test]
    fn expiration_from_system_time_truncates() {
        let after = SystemTime::UNIX_EPOCH + Duration::from_millis(1_500);
        assert_eq!(ExpirationTime::from(after).epoch_seconds(), 1);

        let before = SystemTime::UNIX_EPOCH - Duration::from_millis(1_500);
        assert_eq!(ExpirationTime::from(before).epoch_seconds(), -2);

        let exact = SystemTime::UNIX_EPOCH - Duration::from_secs(3);
        assert_eq!(ExpirationTime::from(exact).epoch_seconds(), -3);
    }

    #[test]
    fn expiration_display() {
        assert_eq!(
            ExpirationTime::from_epoch_seconds(1_700_000_000).to_string(),
            "2023-11-14T22:13:20Z"
        );
        assert_eq!(
            ExpirationTime::UNIX_EPOCH.to_string(),
            "1970-01-01T00:00:00Z"
        );
        assert_eq!(ExpirationTime::from_epoch_seconds(-1).to_string(), "@-1");
        assert_eq!(
            ExpirationTime::from_epoch_seconds(i64::MAX).to_string(),
            format!("@{}", i64::MAX)
        );
    }

    #[test]
    fn expiration_parses_rfc3339() {
        let parsed: ExpirationTime = "2023-11-14T22:13:20Z".parse().unwrap();
        assert_eq!(parsed.epoch_seconds(), 1_700_000_000);

        let fractional: ExpirationTime = "2023-11-14T22:13:20.750Z".parse().unwrap();
        assert_eq!(fractional.epoch_seconds(), 1_700_000_000);

        assert!("not-a-time".parse::<ExpirationTime>().is_err());
    }
}
