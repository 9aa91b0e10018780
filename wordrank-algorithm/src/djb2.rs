/// Hashes bytes with Dan Bernstein's djb2: `hash * 33 + byte`, seeded with
/// 5381, wrapping on 32 bits.
///
/// # Example
/// ```rust
/// use wordrank_algorithm::djb2::hash;
///
/// assert_eq!(hash(b"the"), 193506854);
/// ```
#[inline]
pub fn hash(bytes: &[u8]) -> u32 {
    bytes.iter().fold(5381u32, |hash, &byte| {
        (hash << 5).wrapping_add(hash).wrapping_add(u32::from(byte))
    })
}
