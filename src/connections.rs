//! Connection and capability bitmask vocabularies.
//!
//! The bit assignments match the vendor SDK's `BMDVideoConnection`,
//! `BMDAudioConnection` and `BMDVideoIOSupport` constants exactly, so
//! downstream code can cross-reference masks against vendor documentation.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Physical video connector types.
///
/// C equivalent: `DeckLinkVideoConnection` / `BMDVideoConnection`
#[repr(u32)]
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum VideoConnection {
    Sdi = 1 << 0,
    Hdmi = 1 << 1,
    OpticalSdi = 1 << 2,
    Component = 1 << 3,
    Composite = 1 << 4,
    SVideo = 1 << 5,
}

impl VideoConnection {
    pub const ALL: [VideoConnection; 6] = [
        VideoConnection::Sdi,
        VideoConnection::Hdmi,
        VideoConnection::OpticalSdi,
        VideoConnection::Component,
        VideoConnection::Composite,
        VideoConnection::SVideo,
    ];

    pub fn bit(self) -> u32 {
        self.into()
    }

    /// The connectors present in a mask, in bit order.
    pub fn decode(mask: u32) -> Vec<VideoConnection> {
        Self::ALL.into_iter().filter(|c| mask & c.bit() != 0).collect()
    }
}

/// Physical audio connector types.
///
/// C equivalent: `DeckLinkAudioConnection` / `BMDAudioConnection`
#[repr(u32)]
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum AudioConnection {
    Embedded = 1 << 0,
    AesEbu = 1 << 1,
    Analog = 1 << 2,
    AnalogXlr = 1 << 3,
    AnalogRca = 1 << 4,
    Microphone = 1 << 5,
    Headphones = 1 << 6,
}

impl AudioConnection {
    pub const ALL: [AudioConnection; 7] = [
        AudioConnection::Embedded,
        AudioConnection::AesEbu,
        AudioConnection::Analog,
        AudioConnection::AnalogXlr,
        AudioConnection::AnalogRca,
        AudioConnection::Microphone,
        AudioConnection::Headphones,
    ];

    pub fn bit(self) -> u32 {
        self.into()
    }

    pub fn decode(mask: u32) -> Vec<AudioConnection> {
        Self::ALL.into_iter().filter(|c| mask & c.bit() != 0).collect()
    }
}

/// Capture/playback capability flags.
///
/// C equivalent: `DeckLinkIOSupport` / `BMDVideoIOSupport`
#[repr(u32)]
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum IoSupport {
    Capture = 1 << 0,
    Playback = 1 << 1,
}

impl IoSupport {
    pub fn bit(self) -> u32 {
        self.into()
    }
}
