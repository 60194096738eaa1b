//! Content fingerprints using FxHash.
//!
//! Fast and deterministic, which is all cache busting needs.
//!
//! ```ignore
//! let fp = hash::fingerprint("some content"); // -> "a1b2c3d4"
//! let fp = hash::fingerprint_reader(File::open(path)?)?;
//! ```

use rustc_hash::FxHasher;
use std::hash::Hasher;
use std::io::{self, Read};

/// Compute 64-bit hash from byte data.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}

/// Compute hash from a reader (streaming, for large files).
pub fn compute_reader(mut reader: impl Read) -> io::Result<u64> {
    let mut hasher = FxHasher::default();
    let mut buffer = [0u8; 8192];
    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.write(&buffer[..n]);
    }
    Ok(hasher.finish())
}

/// 8-char hex fingerprint of `value`.
#[inline]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(value: &T) -> String {
    short_hex(compute(value))
}

/// 8-char hex fingerprint of everything `reader` yields.
pub fn fingerprint_reader(reader: impl Read) -> io::Result<String> {
    compute_reader(reader).map(short_hex)
}

fn short_hex(hash: u64) -> String {
    format!("{hash:016x}")[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_stable() {
        assert_eq!(fingerprint("body {}"), fingerprint("body {}"));
        assert_ne!(fingerprint("body {}"), fingerprint("body { }"));
        assert_eq!(fingerprint("x").len(), 8);
    }

    #[test]
    fn test_reader_matches_slice() {
        // FxHasher::write is fed in chunks by the reader; a single small
        // chunk must equal hashing the slice directly
        let data = b"color: orange;";
        assert_eq!(fingerprint_reader(&data[..]).unwrap(), fingerprint(data));
    }
}
