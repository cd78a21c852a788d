//! C-ABI adapter exposing [Blackmagic DeckLink](https://www.blackmagicdesign.com/products/decklink) device enumeration to FFI callers.
//!
//! The DeckLink Desktop Video SDK is a COM object model; most language runtimes
//! cannot consume it directly. This crate flattens it into five plain C functions
//! (`decklink_init`, `decklink_cleanup`, `decklink_get_device_count`,
//! `decklink_get_device_info`, `decklink_get_api_version`) and one fixed-layout
//! record per device. It only *reports* capabilities; it never opens streams.
//!
//! Every vendor handle obtained during a call is released before that call
//! returns. Vendor wide strings are marshaled into bounded, NUL-terminated UTF-8
//! buffers. Look out for `C equivalent: ...` notes if you already know the
//! vendor SDK.
//!
//! ## Building
//!
//! The vendor SDK is **not** required at build time: the four COM interfaces the
//! adapter touches are declared by hand with their published GUIDs. On Windows
//! the Desktop Video driver package must be installed at runtime for enumeration
//! to return anything other than `NoDriver`. On every other platform the crate
//! compiles a stub that reports no driver without touching any vendor symbol.
//!
//! ## Thread safety
//!
//! The adapter keeps one piece of process-wide state, the initialised flag, and
//! does not synchronise it against concurrent callers. Ensure `decklink_init`
//! happens-before any enumeration call, and that no enumeration overlaps
//! `decklink_cleanup`. The COM runtime itself (initialised multi-threaded) does
//! allow concurrent calls on its own interfaces.
//!
//! ## Cargo features
//!
//! ### `strict_assertions`
//!
//! Keeps the adapter's internal invariant assertions (NUL termination of
//! marshaled buffers, index fidelity of returned records) enabled in release
//! builds. Recommended during development and testing.

pub mod attributes;
pub mod capi;
pub mod connections;
pub mod device_info;
pub mod error;

pub(crate) mod adapter;
pub(crate) mod backend;
pub(crate) mod marshal;
pub(crate) mod projector;

#[cfg(windows)]
pub(crate) mod com;

pub use device_info::{DeviceInfo, MAX_STRING_LENGTH};
pub use error::DeckLinkError;
