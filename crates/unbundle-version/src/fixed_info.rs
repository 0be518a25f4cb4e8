//! Locating the `VS_FIXEDFILEINFO` block inside a binary.
//!
//! The block is stored little-endian inside the `VS_VERSION_INFO` resource:
//!
//! ```text
//! dwSignature      0xFEEF04BD
//! dwStrucVersion   0x00010000
//! dwFileVersionMS  major << 16 | minor
//! dwFileVersionLS  build << 16 | revision
//! ...
//! ```

use crate::FileVersion;

pub const FIXED_FILE_INFO_SIGNATURE: u32 = 0xFEEF_04BD;

const STRUC_VERSION: u32 = 0x0001_0000;
const HEADER_LEN: usize = 16;

/// Scan `bytes` for the first valid `VS_FIXEDFILEINFO` block and return its
/// file version. Returns `None` when the binary carries no version resource.
pub fn read_fixed_file_version(bytes: &[u8]) -> Option<FileVersion> {
    let signature = FIXED_FILE_INFO_SIGNATURE.to_le_bytes();

    bytes
        .windows(HEADER_LEN)
        .filter(|window| window[..4] == signature)
        .find_map(|window| {
            let struc_version = le_u32(&window[4..8]);
            if struc_version != STRUC_VERSION {
                return None;
            }
            Some(FileVersion::from_ms_ls(
                le_u32(&window[8..12]),
                le_u32(&window[12..16]),
            ))
        })
}

fn le_u32(bytes: &[u8]) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(bytes);
    u32::from_le_bytes(buf)
}
