//! The exported C ABI.
//!
//! Five functions, stable symbol names, integer result codes. This is the
//! only module that handles raw pointers from callers; everything behind it
//! works on safe references. On Windows the bodies drive the COM backend;
//! everywhere else they compile to the stub that reports no driver without
//! touching any vendor symbol.
//!
//! Callers must ensure `decklink_init` happens-before any enumeration call
//! and that no call overlaps `decklink_cleanup`; the adapter does not
//! serialise them.

use std::os::raw::c_char;

use crate::{device_info::DeviceInfo, error::DeckLinkError, marshal};

#[cfg(windows)]
use crate::{adapter, com};

/// Version string reported by the non-Windows stub.
pub const STUB_API_VERSION: &str = "0.0.0 (stub)";

/// Initialise the adapter. Idempotent; the COM runtime is started at most
/// once per process.
///
/// C equivalent: `decklink_init`
#[unsafe(no_mangle)]
pub extern "C" fn decklink_init() -> DeckLinkError {
    #[cfg(windows)]
    {
        adapter::init(com::startup_runtime)
    }
    #[cfg(not(windows))]
    {
        DeckLinkError::Ok
    }
}

/// Undo `decklink_init`. Idempotent; a no-op while not initialised.
///
/// C equivalent: `decklink_cleanup`
#[unsafe(no_mangle)]
pub extern "C" fn decklink_cleanup() {
    #[cfg(windows)]
    {
        adapter::cleanup(com::shutdown_runtime);
    }
}

/// Count the devices currently enumerable, into `*count`.
///
/// # Safety
///
/// `count` must be null or valid for writing an `i32`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_get_device_count(count: *mut i32) -> DeckLinkError {
    #[cfg(windows)]
    {
        adapter::device_count(&com::ComBackend, unsafe { count.as_mut() })
    }
    #[cfg(not(windows))]
    {
        if let Some(count) = unsafe { count.as_mut() } {
            *count = 0;
        }
        DeckLinkError::NoDriver
    }
}

/// Fill `*info` with the record of the device at `index`.
///
/// # Safety
///
/// `info` must be null or valid for writing a [DeviceInfo].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_get_device_info(
    index: i32,
    info: *mut DeviceInfo,
) -> DeckLinkError {
    #[cfg(windows)]
    {
        adapter::device_info(&com::ComBackend, index, unsafe { info.as_mut() })
    }
    #[cfg(not(windows))]
    {
        let _ = (index, info);
        DeckLinkError::NoDriver
    }
}

/// Copy the vendor API version string into `version`, truncating to
/// `max_length - 1` bytes, always NUL-terminated.
///
/// # Safety
///
/// `version` must be null or valid for writing `max_length` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn decklink_get_api_version(
    version: *mut c_char,
    max_length: i32,
) -> DeckLinkError {
    if version.is_null() || max_length <= 0 {
        return DeckLinkError::InvalidIndex;
    }
    let buf = unsafe { std::slice::from_raw_parts_mut(version.cast::<u8>(), max_length as usize) };

    #[cfg(windows)]
    marshal::copy_str_to_c_buf(com::API_VERSION, buf);
    #[cfg(not(windows))]
    marshal::copy_str_to_c_buf(STUB_API_VERSION, buf);

    DeckLinkError::Ok
}

#[cfg(all(test, not(windows)))]
mod test {
    use super::*;
    use crate::device_info::c_buf_to_string;

    #[test]
    fn stub_init_and_cleanup_succeed() {
        assert_eq!(decklink_init(), DeckLinkError::Ok);
        decklink_cleanup();
    }

    #[test]
    fn stub_count_writes_zero_and_reports_no_driver() {
        let mut count = 123i32;
        let code = unsafe { decklink_get_device_count(&mut count) };
        assert_eq!(code, DeckLinkError::NoDriver);
        assert_eq!(count, 0);

        let code = unsafe { decklink_get_device_count(std::ptr::null_mut()) };
        assert_eq!(code, DeckLinkError::NoDriver);
    }

    #[test]
    fn stub_info_reports_no_driver() {
        let mut info = DeviceInfo::default();
        let code = unsafe { decklink_get_device_info(0, &mut info) };
        assert_eq!(code, DeckLinkError::NoDriver);
    }

    #[test]
    fn stub_version_is_written_and_terminated() {
        let mut buf = [0x55u8; 32];
        let code =
            unsafe { decklink_get_api_version(buf.as_mut_ptr().cast(), buf.len() as i32) };
        assert_eq!(code, DeckLinkError::Ok);
        assert_eq!(c_buf_to_string(&buf), STUB_API_VERSION);
    }

    #[test]
    fn stub_version_truncates_to_small_buffers() {
        let mut buf = [0x55u8; 8];
        let code = unsafe { decklink_get_api_version(buf.as_mut_ptr().cast(), 8) };
        assert_eq!(code, DeckLinkError::Ok);
        assert_eq!(buf[7], 0);
        assert!(!c_buf_to_string(&buf).is_empty());
    }

    #[test]
    fn version_rejects_null_and_non_positive_capacity() {
        let code = unsafe { decklink_get_api_version(std::ptr::null_mut(), 32) };
        assert_eq!(code, DeckLinkError::InvalidIndex);

        let mut buf = [0u8; 4];
        let code = unsafe { decklink_get_api_version(buf.as_mut_ptr().cast(), 0) };
        assert_eq!(code, DeckLinkError::InvalidIndex);
    }
}
