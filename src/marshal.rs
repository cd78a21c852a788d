//! Bounded string marshaling.
//!
//! Vendor strings arrive as UTF-16 (`BSTR` on Windows) and leave the adapter
//! as NUL-terminated UTF-8 in fixed 256-byte slots. The destination is always
//! NUL-terminated, whatever the input.

/// Encode a wide string into a bounded UTF-8 buffer.
///
/// At most `dst.len() - 1` payload bytes are written, followed by a NUL. An
/// empty source yields `""`. Unpaired surrogates are replaced, matching a
/// lossy decode.
///
/// Truncation happens at the byte bound and may split a multi-byte UTF-8
/// sequence; device names empirically stay far below the limit, so this is
/// kept as the documented contract rather than backing up to a code-point
/// boundary.
///
/// The source buffer is not freed here; the caller owns it.
///
/// C equivalent: `bstr_to_cstr`
pub(crate) fn wide_to_c_buf(src: &[u16], dst: &mut [u8]) {
    debug_assert!(!dst.is_empty());
    if dst.is_empty() {
        return;
    }

    let encoded = String::from_utf16_lossy(src);
    copy_str_to_c_buf(&encoded, dst);
}

/// Copy a `&str` into a bounded buffer with guaranteed NUL termination,
/// truncating at `dst.len() - 1` bytes.
pub(crate) fn copy_str_to_c_buf(src: &str, dst: &mut [u8]) {
    if dst.is_empty() {
        return;
    }

    let bytes = src.as_bytes();
    let len = bytes.len().min(dst.len() - 1);
    dst[..len].copy_from_slice(&bytes[..len]);
    dst[len] = 0;
}
