//! Tools for moving between integers, bytes, and wire bits.
//!
//! Bit vectors are least-significant bit first. Byte buffers are big-endian:
//! the last byte holds the least-significant bits, so bit `0` of a value is bit
//! `0` of its last byte.

/// Get the low `n` bits of `x`, least-significant first. Bits past the width
/// of a `u64` are `false`.
pub fn u64_to_bits(x: u64, n: usize) -> Vec<bool> {
    (0..n).map(|i| i < 64 && (x >> i) & 1 == 1).collect()
}

/// Concatenate the low `n` bits of each of `xs`.
pub fn u64s_to_bits(xs: &[u64], n: usize) -> Vec<bool> {
    xs.iter().flat_map(|&x| u64_to_bits(x, n)).collect()
}

/// Convert into a `u64` from least-significant-first bits. Bits past the
/// width of a `u64` are ignored.
pub fn u64_from_bits(bits: &[bool]) -> u64 {
    bits.iter()
        .take(64)
        .enumerate()
        .fold(0, |x, (i, &b)| x | (u64::from(b) << i))
}

/// Pack `bits` into the fewest big-endian bytes that hold them.
pub fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    let nbytes = bits.len().div_ceil(8);
    let mut bytes = vec![0u8; nbytes];
    for (i, &b) in bits.iter().enumerate() {
        if b {
            bytes[nbytes - 1 - i / 8] |= 1 << (i % 8);
        }
    }
    bytes
}

/// Unpack the low `nbits` bits of the big-endian `bytes`, padding with
/// `false` once the buffer runs out.
pub fn bytes_to_bits(bytes: &[u8], nbits: usize) -> Vec<bool> {
    (0..nbits)
        .map(|j| {
            let byte = j / 8;
            byte < bytes.len() && (bytes[bytes.len() - 1 - byte] >> (j % 8)) & 1 == 1
        })
        .collect()
}
