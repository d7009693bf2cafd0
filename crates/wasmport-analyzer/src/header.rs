//! Binary header inspection.
//!
//! A WebAssembly module starts with a fixed 8-byte header: the magic
//! `\0asm` followed by a 4-byte little-endian version field. The header
//! check is deliberately separate from full decoding so the plugin can
//! cheaply skip non-wasm inputs before involving the decoder.

/// The 4-byte magic prefix of every WebAssembly binary (`\0asm`).
pub const WASM_MAGIC: [u8; 4] = [0x00, 0x61, 0x73, 0x6d];

/// The only supported binary format version.
pub const SUPPORTED_VERSION: u32 = 1;

/// Outcome of inspecting a binary's 8-byte header.
///
/// # Examples
///
/// ```
/// use wasmport_analyzer::{check_header, HeaderCheck};
///
/// let wasm = [0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00];
/// assert_eq!(check_header(&wasm), HeaderCheck::Valid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheck {
    /// Magic and version are both as expected.
    Valid,
    /// The input does not begin with the WebAssembly magic number
    /// (or is shorter than a header). Non-fatal: the file is simply
    /// not a WebAssembly module.
    NotWasm,
    /// The magic matched but the version field is unsupported.
    /// Fatal for this file.
    UnsupportedVersion(u32),
}

/// Inspects the first 8 bytes of a binary.
///
/// Inputs shorter than a full header are reported as [`HeaderCheck::NotWasm`];
/// they cannot be a WebAssembly module of any version.
///
/// # Examples
///
/// ```
/// use wasmport_analyzer::{check_header, HeaderCheck};
///
/// assert_eq!(check_header(b"not wasm"), HeaderCheck::NotWasm);
/// assert_eq!(
///     check_header(&[0x00, 0x61, 0x73, 0x6d, 0x02, 0x00, 0x00, 0x00]),
///     HeaderCheck::UnsupportedVersion(2)
/// );
/// ```
#[must_use]
pub fn check_header(bytes: &[u8]) -> HeaderCheck {
    if bytes.len() < 8 || bytes[..4] != WASM_MAGIC {
        return HeaderCheck::NotWasm;
    }

    let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    if version == SUPPORTED_VERSION {
        HeaderCheck::Valid
    } else {
        HeaderCheck::UnsupportedVersion(version)
    }
}
