//! The flat device record produced by `decklink_get_device_info`.
//!
//! The layout is part of the C ABI: field order, the 256-byte inline string
//! slots and the `-1` identifier sentinels are all fixed. A successful info
//! call either fully populates a field or leaves its documented default;
//! nothing is ever left uninitialized.

use std::ffi::CStr;

use static_assertions::{assert_impl_all, const_assert_eq};

use crate::connections::IoSupport;

/// Capacity of each inline string slot, including the NUL terminator.
///
/// C equivalent: `DECKLINK_MAX_STRING_LENGTH`
pub const MAX_STRING_LENGTH: usize = 256;

/// Information about one DeckLink device, as yielded by a single enumeration
/// pass.
///
/// String fields are NUL-terminated UTF-8 with at most [MAX_STRING_LENGTH]` - 1`
/// payload bytes; empty when the vendor does not report them.
/// `persistent_id` and `device_group_id` are `-1` when unavailable (0 is a
/// valid identifier); every other numeric or boolean field defaults to
/// zero/false. The record owns no resources.
///
/// C equivalent: `DeckLinkDeviceInfo`
#[repr(C)]
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    /// Ordinal position in the enumeration pass that produced this record.
    ///
    /// Not stable across calls; hot-plug or driver restart may reorder
    /// devices. Use `persistent_id` for stable identity.
    pub index: i32,
    pub display_name: [u8; MAX_STRING_LENGTH],
    pub model_name: [u8; MAX_STRING_LENGTH],
    /// User-configured label, from the vendor configuration interface.
    pub device_label: [u8; MAX_STRING_LENGTH],
    /// Hardware-stable identifier, `-1` when unavailable.
    pub persistent_id: i64,
    /// Group identifier for multi-device cards, `-1` when unavailable.
    pub device_group_id: i64,
    pub sub_device_index: i32,
    pub num_sub_devices: i32,
    /// Bitmask over [crate::connections::VideoConnection].
    pub video_input_connections: u32,
    /// Bitmask over [crate::connections::VideoConnection].
    pub video_output_connections: u32,
    /// Bitmask over [crate::connections::AudioConnection].
    pub audio_input_connections: u32,
    /// Bitmask over [crate::connections::AudioConnection].
    pub audio_output_connections: u32,
    /// Bitmask over [crate::connections::IoSupport].
    pub io_support: u32,
    pub supports_internal_keying: bool,
    pub supports_external_keying: bool,
    pub supports_dual_link_sdi: bool,
    pub supports_quad_link_sdi: bool,
    pub supports_idle_output: bool,
    pub max_audio_channels: i32,
}

impl Default for DeviceInfo {
    fn default() -> Self {
        DeviceInfo {
            index: 0,
            display_name: [0; MAX_STRING_LENGTH],
            model_name: [0; MAX_STRING_LENGTH],
            device_label: [0; MAX_STRING_LENGTH],
            persistent_id: -1,
            device_group_id: -1,
            sub_device_index: 0,
            num_sub_devices: 0,
            video_input_connections: 0,
            video_output_connections: 0,
            audio_input_connections: 0,
            audio_output_connections: 0,
            io_support: 0,
            supports_internal_keying: false,
            supports_external_keying: false,
            supports_dual_link_sdi: false,
            supports_quad_link_sdi: false,
            supports_idle_output: false,
            max_audio_channels: 0,
        }
    }
}

impl DeviceInfo {
    /// A record with every field at its documented default and the given
    /// ordinal index.
    pub fn with_index(index: i32) -> Self {
        DeviceInfo {
            index,
            ..Default::default()
        }
    }

    /// The display name as an owned string, lossily decoded.
    pub fn display_name(&self) -> String {
        c_buf_to_string(&self.display_name)
    }

    /// The model name as an owned string, lossily decoded.
    pub fn model_name(&self) -> String {
        c_buf_to_string(&self.model_name)
    }

    /// The user-configured label, or `None` when the device has none.
    pub fn device_label(&self) -> Option<String> {
        let label = c_buf_to_string(&self.device_label);
        if label.is_empty() { None } else { Some(label) }
    }

    pub fn supports_capture(&self) -> bool {
        self.io_support & IoSupport::Capture.bit() != 0
    }

    pub fn supports_playback(&self) -> bool {
        self.io_support & IoSupport::Playback.bit() != 0
    }
}

/// Decode a NUL-terminated inline buffer, replacing invalid UTF-8.
///
/// A buffer without any NUL decodes in full; the marshaler never produces
/// one, but FFI callers filling the struct themselves might.
pub fn c_buf_to_string(buf: &[u8]) -> String {
    match CStr::from_bytes_until_nul(buf) {
        Ok(s) => s.to_string_lossy().into_owned(),
        Err(_) => String::from_utf8_lossy(buf).into_owned(),
    }
}

assert_impl_all!(DeviceInfo: Send, Sync);

// The C side sees: i32, three char[256], two i64 (aligned to 8), two i32,
// five u32, five bool, one i32, tail-padded to the 8-byte struct alignment.
const_assert_eq!(core::mem::align_of::<DeviceInfo>(), 8);
const_assert_eq!(core::mem::offset_of!(DeviceInfo, persistent_id), 776);
const_assert_eq!(core::mem::offset_of!(DeviceInfo, io_support), 816);
const_assert_eq!(core::mem::offset_of!(DeviceInfo, max_audio_channels), 828);
const_assert_eq!(core::mem::size_of::<DeviceInfo>(), 832);
