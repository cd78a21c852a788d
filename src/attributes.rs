//! Vendor attribute and configuration identifiers.
//!
//! The DeckLink SDK keys every attribute query on a four-character code
//! (FourCC), a 32-bit integer whose bytes spell an ASCII tag such as `peid`.
//! The codes below are the ones the adapter projects into the device record;
//! they are stable across vendor SDK releases.
//!
//! <https://en.wikipedia.org/wiki/FourCC>

use std::fmt::{Debug, Display};

use num_enum::{IntoPrimitive, TryFromPrimitive};

const fn tag(code: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*code)
}

/// Attribute identifiers understood by the vendor's profile-attributes
/// interface. Integer-valued and flag-valued ids share one namespace.
///
/// C equivalent: `BMDDeckLinkAttributeID`
#[repr(u32)]
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum AttributeId {
    // integer attributes
    PersistentId = tag(b"peid"),
    DeviceGroupId = tag(b"dgid"),
    SubDeviceIndex = tag(b"subi"),
    NumberOfSubDevices = tag(b"nsbd"),
    VideoInputConnections = tag(b"vicn"),
    VideoOutputConnections = tag(b"vocn"),
    AudioInputConnections = tag(b"aicn"),
    AudioOutputConnections = tag(b"aocn"),
    VideoIoSupport = tag(b"vios"),
    MaximumAudioChannels = tag(b"mach"),
    // flag attributes
    SupportsInternalKeying = tag(b"keyi"),
    SupportsExternalKeying = tag(b"keye"),
    SupportsDualLinkSdi = tag(b"sdls"),
    SupportsQuadLinkSdi = tag(b"sqls"),
    SupportsIdleOutput = tag(b"idou"),
}

impl AttributeId {
    pub fn to_ffi(self) -> u32 {
        self.into()
    }

    pub fn from_ffi(value: u32) -> Option<Self> {
        Self::try_from_primitive(value).ok()
    }
}

/// Configuration identifiers understood by the vendor's configuration
/// interface.
///
/// C equivalent: `BMDDeckLinkConfigurationID`
#[repr(u32)]
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum ConfigurationId {
    /// The user-assigned device label shown in the vendor's setup utility.
    DeviceInformationLabel = tag(b"dila"),
}

impl ConfigurationId {
    pub fn to_ffi(self) -> u32 {
        self.into()
    }
}

/// A raw four-character code.
#[repr(transparent)]
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
pub struct FourCC {
    code: u32,
}

impl FourCC {
    pub fn from_ffi(code: u32) -> Self {
        FourCC { code }
    }

    pub fn to_ffi(self) -> u32 {
        self.code
    }

    pub fn as_attribute(&self) -> Option<AttributeId> {
        AttributeId::from_ffi(self.code)
    }
}

impl Display for FourCC {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes: [u8; 4] = self.code.to_be_bytes();
        write!(f, "{}", String::from_utf8_lossy(&bytes))
    }
}

impl Debug for FourCC {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FourCC({})", self)
    }
}

impl From<AttributeId> for FourCC {
    fn from(value: AttributeId) -> Self {
        FourCC {
            code: value.to_ffi(),
        }
    }
}

impl From<ConfigurationId> for FourCC {
    fn from(value: ConfigurationId) -> Self {
        FourCC {
            code: value.to_ffi(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tags_spell_the_vendor_codes() {
        assert_eq!(FourCC::from(AttributeId::PersistentId).to_string(), "peid");
        assert_eq!(FourCC::from(AttributeId::VideoIoSupport).to_string(), "vios");
        assert_eq!(
            FourCC::from(ConfigurationId::DeviceInformationLabel).to_string(),
            "dila"
        );
    }

    #[test]
    fn test_fmt() {
        let fourcc = FourCC::from(AttributeId::MaximumAudioChannels);
        assert_eq!(format!("{:?}", fourcc), "FourCC(mach)");
    }

    #[test]
    fn codes_round_trip() {
        let raw = AttributeId::SupportsIdleOutput.to_ffi();
        assert_eq!(
            FourCC::from_ffi(raw).as_attribute(),
            Some(AttributeId::SupportsIdleOutput)
        );
        assert_eq!(FourCC::from_ffi(0).as_attribute(), None);
    }
}
