//! COM plumbing for the Windows path.
//!
//! The vendor publishes no Rust bindings, so the four interfaces the adapter
//! touches are declared by hand with the IIDs from the vendor's Windows IDL.
//! Declaring them here instead of generating from `DeckLinkAPI_h.h` is what
//! lets the crate build on machines without the SDK installed; the driver is
//! only needed at runtime, when `CoCreateInstance` resolves the iterator
//! CLSID against the registry.
//!
//! All handles are `windows` crate interface wrappers or `BSTR`s; both
//! release their underlying resource on drop, on every exit path.

#![allow(non_snake_case)]

use windows::Win32::{
    Foundation::{BOOL, RPC_E_CHANGED_MODE, S_OK},
    System::Com::{
        CLSCTX_ALL, COINIT_MULTITHREADED, CoCreateInstance, CoInitializeEx, CoUninitialize,
    },
};
use windows_core::{BSTR, GUID, HRESULT, IUnknown, IUnknown_Vtbl, Interface, interface};

use crate::{
    attributes::{AttributeId, ConfigurationId},
    backend::{DeviceBackend, DeviceConfiguration, DeviceHandle, ProfileAttributes, WideString},
    error::DeckLinkError,
};

/// Version of the vendor IDL these declarations were written against.
///
/// C equivalent: `BLACKMAGIC_DECKLINK_API_VERSION_STRING`
pub(crate) const API_VERSION: &str = "12.0";

/// C equivalent: `CLSID_CDeckLinkIterator`
const CLSID_C_DECKLINK_ITERATOR: GUID = GUID::from_u128(0xBA6C6F44_6DA5_4DCE_94AA_EE2D1372A676);

#[interface("50FB36CD-3063-4B73-BDBB-958087F2D8BA")]
unsafe trait IDeckLinkIterator: IUnknown {
    fn Next(&self, deck_link: *mut Option<IDeckLink>) -> HRESULT;
}

#[interface("C418FBDD-0587-48ED-8FE5-640F0A14AF91")]
unsafe trait IDeckLink: IUnknown {
    fn GetModelName(&self, model_name: *mut BSTR) -> HRESULT;
    fn GetDisplayName(&self, display_name: *mut BSTR) -> HRESULT;
}

#[interface("17D4BF8E-4911-473A-80A0-731CF6FF345B")]
unsafe trait IDeckLinkProfileAttributes: IUnknown {
    fn GetFlag(&self, cfg_id: u32, value: *mut BOOL) -> HRESULT;
    fn GetInt(&self, cfg_id: u32, value: *mut i64) -> HRESULT;
    fn GetFloat(&self, cfg_id: u32, value: *mut f64) -> HRESULT;
    fn GetString(&self, cfg_id: u32, value: *mut BSTR) -> HRESULT;
}

// The setters are never called, but the declarations must cover the full
// vtable so the getter slots land at the right offsets.
#[interface("EF90380B-4AE5-4346-9077-E288E149F129")]
unsafe trait IDeckLinkConfiguration: IUnknown {
    fn SetFlag(&self, cfg_id: u32, value: BOOL) -> HRESULT;
    fn GetFlag(&self, cfg_id: u32, value: *mut BOOL) -> HRESULT;
    fn SetInt(&self, cfg_id: u32, value: i64) -> HRESULT;
    fn GetInt(&self, cfg_id: u32, value: *mut i64) -> HRESULT;
    fn SetFloat(&self, cfg_id: u32, value: f64) -> HRESULT;
    fn GetFloat(&self, cfg_id: u32, value: *mut f64) -> HRESULT;
    fn SetString(&self, cfg_id: u32, value: BSTR) -> HRESULT;
    fn GetString(&self, cfg_id: u32, value: *mut BSTR) -> HRESULT;
    fn WriteConfigurationToPreferences(&self) -> HRESULT;
}

/// Initialise COM for this process in the multi-threaded apartment.
///
/// `RPC_E_CHANGED_MODE` means some other component already initialised COM
/// with a different apartment mode; the adapter accepts the existing runtime.
pub(crate) fn startup_runtime() -> Result<(), DeckLinkError> {
    let hr = unsafe { CoInitializeEx(None, COINIT_MULTITHREADED) };
    if hr.is_err() && hr != RPC_E_CHANGED_MODE {
        return Err(DeckLinkError::ComFailed);
    }
    Ok(())
}

pub(crate) fn shutdown_runtime() {
    unsafe { CoUninitialize() };
}

/// The real vendor backend: a fresh `IDeckLinkIterator` per enumeration pass.
pub(crate) struct ComBackend;

impl DeviceBackend for ComBackend {
    type Device = ComDevice;
    type Iter = ComDeviceIter;

    fn create_iterator(&self) -> Result<ComDeviceIter, DeckLinkError> {
        let iterator: IDeckLinkIterator =
            unsafe { CoCreateInstance(&CLSID_C_DECKLINK_ITERATOR, None, CLSCTX_ALL) }
                .map_err(|_| DeckLinkError::NoDriver)?;
        Ok(ComDeviceIter { iterator })
    }
}

pub(crate) struct ComDeviceIter {
    iterator: IDeckLinkIterator,
}

impl Iterator for ComDeviceIter {
    type Item = ComDevice;

    fn next(&mut self) -> Option<ComDevice> {
        let mut device: Option<IDeckLink> = None;
        // S_FALSE signals the end of the enumeration
        let hr = unsafe { self.iterator.Next(&mut device) };
        if hr != S_OK {
            return None;
        }
        device.map(|device| ComDevice { device })
    }
}

pub(crate) struct ComDevice {
    device: IDeckLink,
}

impl DeviceHandle for ComDevice {
    type Attributes = IDeckLinkProfileAttributes;
    type Config = IDeckLinkConfiguration;

    fn display_name(&self) -> Option<WideString> {
        let mut name = BSTR::default();
        let hr = unsafe { self.device.GetDisplayName(&mut name) };
        (hr == S_OK).then(|| name.as_wide().to_vec())
    }

    fn model_name(&self) -> Option<WideString> {
        let mut name = BSTR::default();
        let hr = unsafe { self.device.GetModelName(&mut name) };
        (hr == S_OK).then(|| name.as_wide().to_vec())
    }

    fn profile_attributes(&self) -> Option<IDeckLinkProfileAttributes> {
        self.device.cast().ok()
    }

    fn configuration(&self) -> Option<IDeckLinkConfiguration> {
        self.device.cast().ok()
    }
}

impl ProfileAttributes for IDeckLinkProfileAttributes {
    fn get_int(&self, id: AttributeId) -> Option<i64> {
        let mut value = 0i64;
        let hr = unsafe { self.GetInt(id.to_ffi(), &mut value) };
        (hr == S_OK).then_some(value)
    }

    fn get_flag(&self, id: AttributeId) -> Option<bool> {
        let mut value = BOOL(0);
        let hr = unsafe { self.GetFlag(id.to_ffi(), &mut value) };
        (hr == S_OK).then_some(value.as_bool())
    }
}

impl DeviceConfiguration for IDeckLinkConfiguration {
    fn get_string(&self, id: ConfigurationId) -> Option<WideString> {
        let mut value = BSTR::default();
        let hr = unsafe { self.GetString(id.to_ffi(), &mut value) };
        (hr == S_OK).then(|| value.as_wide().to_vec())
    }
}
