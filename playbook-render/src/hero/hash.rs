//! String hashing for hero illustration seeds.

/// Modulus of the hash (2^31 - 1).
pub const HASH_MODULUS: u64 = 2_147_483_647;

/// Hash a string over its UTF-16 code units.
///
/// `acc = (acc + code * 31) mod 2147483647`, starting from 0. The result
/// is stable across runs and platforms; palette choice and the layout seed
/// both depend on it, so changing it changes every generated illustration.
#[must_use]
pub fn hash_string(text: &str) -> u32 {
    let acc = text
        .encode_utf16()
        .fold(0u64, |acc, code| (acc + u64::from(code) * 31) % HASH_MODULUS);
    // acc < 2^31
    u32::try_from(acc).unwrap_or(u32::MAX)
}
