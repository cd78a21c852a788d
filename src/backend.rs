//! Trait seam over the vendor object model.
//!
//! The enumeration driver and the attribute projector are written against
//! these traits rather than against COM directly, so the same algorithms run
//! on the real vendor iterator (Windows) and on a mock vendor in tests.
//! Implementations wrap reference-counted vendor handles; dropping a trait
//! object releases its handle, which is what guarantees release on every
//! exit path.

use crate::{
    attributes::{AttributeId, ConfigurationId},
    error::DeckLinkError,
};

/// UTF-16 code units as handed over by the vendor.
pub(crate) type WideString = Vec<u16>;

/// Factory for one enumeration pass.
///
/// Each call to an enumeration operation creates a fresh iterator and walks
/// it to completion; no iterator outlives the adapter call that created it.
///
/// C equivalent: `CoCreateInstance(CLSID_CDeckLinkIterator, ...)`
pub(crate) trait DeviceBackend {
    type Device: DeviceHandle;
    type Iter: Iterator<Item = Self::Device>;

    /// Errors with [DeckLinkError::NoDriver] when the vendor runtime cannot
    /// produce an iterator (driver not installed or not loaded).
    fn create_iterator(&self) -> Result<Self::Iter, DeckLinkError>;
}

/// One live device yielded by the iterator.
///
/// Every accessor is independently fallible; `None` means the device does not
/// report that item and the corresponding record field keeps its default.
///
/// C equivalent: `IDeckLink`
pub(crate) trait DeviceHandle {
    type Attributes: ProfileAttributes;
    type Config: DeviceConfiguration;

    fn display_name(&self) -> Option<WideString>;
    fn model_name(&self) -> Option<WideString>;

    /// C equivalent: `QueryInterface(IID_IDeckLinkProfileAttributes, ...)`
    fn profile_attributes(&self) -> Option<Self::Attributes>;

    /// C equivalent: `QueryInterface(IID_IDeckLinkConfiguration, ...)`
    fn configuration(&self) -> Option<Self::Config>;
}

/// The vendor's profile-attributes interface.
///
/// C equivalent: `IDeckLinkProfileAttributes`
pub(crate) trait ProfileAttributes {
    fn get_int(&self, id: AttributeId) -> Option<i64>;
    fn get_flag(&self, id: AttributeId) -> Option<bool>;
}

/// The vendor's configuration interface.
///
/// C equivalent: `IDeckLinkConfiguration`
pub(crate) trait DeviceConfiguration {
    fn get_string(&self, id: ConfigurationId) -> Option<WideString>;
}
