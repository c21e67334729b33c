//! C ABI.
//!
//! ```c
//! unsigned char *oxiflate_compress(const unsigned char *src, unsigned int in_size, unsigned int *out_size);
//! unsigned char *oxiflate_decompress(const unsigned char *src, unsigned int in_size, unsigned int *out_size);
//! void oxiflate_free(void *data);
//! ```
//!
//! Every failure returns null and leaves `*out_size` at 0. Buffers returned
//! by the two operations must be released with [`oxiflate_free`] exactly
//! once; releasing null is a no-op.

use crate::compress::compress;
use crate::decompress::decompress;
use crate::sink::OutputBuffer;
use log::debug;
use oxiflate_core::error::Result;
use std::mem::size_of;
use std::ptr;
use std::slice;

/// Bytes in front of every handed-out buffer holding its length.
const HEADER_LEN: usize = size_of::<usize>();

/// Move `bytes` into a heap block prefixed by its length.
fn into_raw(bytes: &[u8]) -> *mut u8 {
    let mut block = Vec::with_capacity(HEADER_LEN + bytes.len());
    block.extend_from_slice(&bytes.len().to_ne_bytes());
    block.extend_from_slice(bytes);
    let base = Box::into_raw(block.into_boxed_slice()) as *mut u8;
    // SAFETY: the block is at least HEADER_LEN bytes long.
    unsafe { base.add(HEADER_LEN) }
}

/// Run `op` over a C buffer, following the null/zero-length rules.
///
/// # Safety
///
/// `src` must be valid for `in_size` reads (or null with `in_size == 0`)
/// and `out_size` must be null or valid for one `u32` write.
unsafe fn run(
    src: *const u8,
    in_size: u32,
    out_size: *mut u32,
    op: fn(&[u8]) -> Result<OutputBuffer>,
) -> *mut u8 {
    if out_size.is_null() {
        return ptr::null_mut();
    }
    // SAFETY: non-null and writable per the caller contract.
    unsafe { out_size.write(0) };

    let input: &[u8] = if in_size == 0 {
        &[]
    } else if src.is_null() {
        return ptr::null_mut();
    } else {
        // SAFETY: src is valid for in_size reads per the caller contract.
        unsafe { slice::from_raw_parts(src, in_size as usize) }
    };

    match op(input) {
        Ok(buffer) => {
            let data = into_raw(buffer.as_slice());
            // SAFETY: as above.
            unsafe { out_size.write(buffer.len_u32()) };
            data
        }
        Err(e) => {
            debug!("ffi: operation failed: {e}");
            ptr::null_mut()
        }
    }
}

/// Compress `in_size` bytes at `src` into a new raw DEFLATE buffer.
///
/// # Safety
///
/// `src` must be valid for `in_size` reads (it may be null when `in_size`
/// is 0) and `out_size` must be valid for one `u32` write.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn oxiflate_compress(
    src: *const u8,
    in_size: u32,
    out_size: *mut u32,
) -> *mut u8 {
    // SAFETY: forwarded caller contract.
    unsafe { run(src, in_size, out_size, compress) }
}

/// Decompress the raw DEFLATE stream of `in_size` bytes at `src`.
///
/// # Safety
///
/// Same as [`oxiflate_compress`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn oxiflate_decompress(
    src: *const u8,
    in_size: u32,
    out_size: *mut u32,
) -> *mut u8 {
    // SAFETY: forwarded caller contract.
    unsafe { run(src, in_size, out_size, decompress) }
}

/// Release a buffer returned by [`oxiflate_compress`] or
/// [`oxiflate_decompress`]. Null is ignored.
///
/// # Safety
///
/// `data` must be null or a pointer returned by this module that has not
/// been released yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn oxiflate_free(data: *mut u8) {
    if data.is_null() {
        return;
    }

    // SAFETY: data came from into_raw, so HEADER_LEN bytes in front of it
    // hold the payload length and the whole block is one boxed slice.
    unsafe {
        let base = data.sub(HEADER_LEN);
        let mut header = [0u8; HEADER_LEN];
        ptr::copy_nonoverlapping(base, header.as_mut_ptr(), HEADER_LEN);
        let len = usize::from_ne_bytes(header);
        drop(Box::from_raw(ptr::slice_from_raw_parts_mut(
            base,
            HEADER_LEN + len,
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_roundtrip() {
        let data = into_raw(b"payload");
        // SAFETY: data was just produced by into_raw.
        unsafe {
            assert_eq!(slice::from_raw_parts(data, 7), b"payload");
            oxiflate_free(data);
        }
    }

    #[test]
    fn test_empty_payload_block() {
        let data = into_raw(&[]);
        assert!(!data.is_null());
        // SAFETY: as above.
        unsafe { oxiflate_free(data) };
    }
}
