// Key derivation for EdDSA over BabyJubJub.
//
// A 32-byte seed is expanded to 64 bytes with Blake2b-512. The upper half
// becomes the nonce-derivation seed; the lower half is clamped per RFC 8032
// and becomes the secret scalar sk. Public key: A = sk · G.

use num_bigint::BigUint;

use crate::curve::{BjjPoint, CurveParams};
use crate::hash::{hash512, SignatureHash};

/// An EdDSA private key: the nonce-derivation seed and the clamped secret
/// scalar. Immutable once derived.
#[derive(Clone, Debug)]
pub struct PrivateKey {
    /// Secret half of the expanded seed; hashed together with the message to
    /// derive the per-signature nonce.
    pub(crate) nonce_seed: [u8; 32],
    /// Clamped secret scalar. Kept as the full clamped integer (bit 254 set,
    /// bottom three bits clear); every use reduces mod n, so A = sk · G and
    /// S = nonce + c·sk stay consistent.
    pub(crate) scalar: BigUint,
}

/// An EdDSA public key: the point A = sk · G together with the hash used for
/// challenge computation.
///
/// The hasher is mutated in place by both signing and verification, which is
/// why those operations take the key by `&mut`.
#[derive(Clone, Debug)]
pub struct PublicKey<H> {
    pub a: BjjPoint,
    pub(crate) hasher: H,
}

impl<H: SignatureHash> PublicKey<H> {
    /// Build a public key from a raw curve point and a challenge hasher,
    /// e.g. for verifying signatures from a transmitted key. The point is
    /// validated on use, not here.
    pub fn new(a: BjjPoint, hasher: H) -> Self {
        PublicKey { a, hasher }
    }
}

/// RFC 8032 §5.1.5 pruning: fix the scalar's bit-length and clear the
/// cofactor bits.
fn clamp(bytes: &mut [u8; 32]) {
    bytes[0] &= 0xF8;
    bytes[31] &= 0x7F;
    bytes[31] |= 0x40;
}

/// Derive a keypair from a 32-byte seed. Deterministic; the same seed always
/// yields the same keys.
pub fn derive_keys<H: SignatureHash>(seed: [u8; 32], hasher: H) -> (PublicKey<H>, PrivateKey) {
    let params = CurveParams::bn254();

    let digest = hash512(&seed);

    let mut nonce_seed = [0u8; 32];
    nonce_seed.copy_from_slice(&digest[32..64]);

    let mut sk_bytes = [0u8; 32];
    sk_bytes.copy_from_slice(&digest[0..32]);
    clamp(&mut sk_bytes);

    // The clamped buffer holds the scalar in little-endian order.
    let scalar = BigUint::from_bytes_le(&sk_bytes);

    let a = params.base.scalar_mul(&scalar);

    (
        PublicKey { a, hasher },
        PrivateKey { nonce_seed, scalar },
    )
}
