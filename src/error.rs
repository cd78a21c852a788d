//! Result codes of the C ABI.
//!
//! The values are part of the wire contract and are consumed as plain `i32`
//! by FFI callers; they must never be renumbered.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Result code returned by every fallible adapter operation.
///
/// The taxonomy is intentionally coarse. `NotInitialised` and `InvalidIndex`
/// are caller misuse and safe to retry after fixing inputs. `NoDriver` means
/// the vendor runtime cannot produce a device iterator, typically because the
/// Desktop Video driver package is not installed. `ComFailed` is only produced
/// by `decklink_init`. Missing per-device attributes are never surfaced as an
/// error; they are absorbed into field defaults.
///
/// C equivalent: `DeckLinkError`
#[repr(i32)]
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum DeckLinkError {
    Ok = 0,
    NotInitialised = -1,
    ComFailed = -2,
    NoDriver = -3,
    InvalidIndex = -4,
    /// Reserved for forward compatibility; not currently returned.
    QueryFailed = -5,
}

impl DeckLinkError {
    pub fn to_ffi(self) -> i32 {
        self.into()
    }

    pub fn from_ffi(value: i32) -> Option<Self> {
        Self::try_from_primitive(value).ok()
    }

    pub fn is_ok(self) -> bool {
        self == DeckLinkError::Ok
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn wire_values_are_fixed() {
        assert_eq!(DeckLinkError::Ok.to_ffi(), 0);
        assert_eq!(DeckLinkError::NotInitialised.to_ffi(), -1);
        assert_eq!(DeckLinkError::ComFailed.to_ffi(), -2);
        assert_eq!(DeckLinkError::NoDriver.to_ffi(), -3);
        assert_eq!(DeckLinkError::InvalidIndex.to_ffi(), -4);
        // Reserved, never produced, but pinned so it cannot be repurposed.
        assert_eq!(DeckLinkError::QueryFailed.to_ffi(), -5);
    }

    #[test]
    fn round_trips_through_i32() {
        assert_eq!(DeckLinkError::from_ffi(-3), Some(DeckLinkError::NoDriver));
        assert_eq!(DeckLinkError::from_ffi(1), None);
    }
}
