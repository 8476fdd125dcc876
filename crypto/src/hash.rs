//! SHA-512 hashing for commitments and combined seeds.

use fairroll_types::Sha512Hash;
use sha2::{Digest, Sha512};

/// Compute the SHA-512 digest of arbitrary data.
pub fn sha512(data: &[u8]) -> Sha512Hash {
    let mut output = [0u8; 64];
    output.copy_from_slice(&Sha512::digest(data));
    Sha512Hash::new(output)
}

/// Hash multiple byte slices in sequence.
///
/// Equal to `sha512` over the concatenation of `parts`, without allocating it.
pub fn sha512_multi(parts: &[&[u8]]) -> Sha512Hash {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    let mut output = [0u8; 64];
    output.copy_from_slice(&hasher.finalize());
    Sha512Hash::new(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha512_known_vector() {
        // FIPS 180-2 test vector for "abc".
        let h = sha512(b"abc");
        assert_eq!(
            h.to_hex(),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn sha512_empty() {
        let h = sha512(b"");
        assert!(h.to_hex().starts_with("cf83e1357eefb8bd"));
    }

    #[test]
    fn sha512_deterministic() {
        assert_eq!(sha512(b"roll"), sha512(b"roll"));
        assert_ne!(sha512(b"roll"), sha512(b"rolL"));
    }

    #[test]
    fn sha512_multi_equivalent() {
        let single = sha512(&[0x00, 0xff]);
        let multi = sha512_multi(&[&[0x00], &[0xff]]);
        assert_eq!(single, multi);
    }

    #[test]
    fn sha512_multi_order_matters() {
        let a = sha512_multi(&[b"server", b"client"]);
        let b = sha512_multi(&[b"client", b"server"]);
        assert_ne!(a, b);
    }
}
