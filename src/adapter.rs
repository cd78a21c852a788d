//! Runtime lifecycle and the enumeration driver.
//!
//! One piece of process-wide state lives here: the initialised flag. It is a
//! single atomic with a single-writer discipline expected at program
//! startup/shutdown; the adapter does not serialise concurrent callers.
//!
//! Both enumeration operations are self-contained: each creates a fresh
//! vendor iterator, walks it, and drops every handle before returning. The
//! iteration order is whatever the vendor yields; it is only stable within
//! one call.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::{
    backend::DeviceBackend, device_info::DeviceInfo, error::DeckLinkError, projector,
};

static INITIALISED: AtomicBool = AtomicBool::new(false);

pub(crate) fn is_initialised() -> bool {
    INITIALISED.load(Ordering::Acquire)
}

/// Arm the adapter, starting the host runtime at most once per process.
///
/// A second call while already initialised succeeds without invoking
/// `start_runtime` again. On a runtime failure the flag stays clear and the
/// runtime's error is returned.
///
/// C equivalent: `decklink_init`
pub(crate) fn init(start_runtime: impl FnOnce() -> Result<(), DeckLinkError>) -> DeckLinkError {
    if is_initialised() {
        return DeckLinkError::Ok;
    }
    match start_runtime() {
        Ok(()) => {
            INITIALISED.store(true, Ordering::Release);
            DeckLinkError::Ok
        }
        Err(err) => err,
    }
}

/// Undo [init] exactly once; a no-op while not initialised.
///
/// C equivalent: `decklink_cleanup`
pub(crate) fn cleanup(stop_runtime: impl FnOnce()) {
    if INITIALISED.swap(false, Ordering::AcqRel) {
        stop_runtime();
    }
}

/// Count devices by walking a fresh vendor iterator.
///
/// The not-initialised gate is checked before argument validation, matching
/// the ABI contract. `count` receives 0 before enumeration starts, so a
/// `NoDriver` return still leaves it well-defined.
pub(crate) fn device_count<B: DeviceBackend>(
    backend: &B,
    count: Option<&mut i32>,
) -> DeckLinkError {
    if !is_initialised() {
        return DeckLinkError::NotInitialised;
    }
    let Some(count) = count else {
        return DeckLinkError::InvalidIndex;
    };
    *count = 0;

    let iter = match backend.create_iterator() {
        Ok(iter) => iter,
        Err(err) => return err,
    };

    let mut found = 0i32;
    for device in iter {
        // release each handle as soon as it is counted
        drop(device);
        found += 1;
    }
    *count = found;

    DeckLinkError::Ok
}

/// Fetch the record for the device at `index` in a fresh enumeration pass.
///
/// On any outcome other than `NotInitialised` or a null record, the record is
/// rewritten with its documented defaults first, so error returns never leave
/// stale fields behind. Runs the attribute projector on the matching device.
pub(crate) fn device_info<B: DeviceBackend>(
    backend: &B,
    index: i32,
    info: Option<&mut DeviceInfo>,
) -> DeckLinkError {
    if !is_initialised() {
        return DeckLinkError::NotInitialised;
    }
    let Some(info) = info else {
        return DeckLinkError::InvalidIndex;
    };
    if index < 0 {
        return DeckLinkError::InvalidIndex;
    }
    *info = DeviceInfo::with_index(index);

    let iter = match backend.create_iterator() {
        Ok(iter) => iter,
        Err(err) => return err,
    };

    for (ordinal, device) in iter.enumerate() {
        if ordinal as i32 == index {
            *info = projector::project(&device, index);
            return DeckLinkError::Ok;
        }
        // not the target; the handle drops here
    }

    DeckLinkError::InvalidIndex
}
