// Byte-message reduction into the signature field.
//
// The signature core signs a single field element; mapping application data
// into that element is the caller's job. This is the reference mapping used
// by the witness tooling: SHA-256, then reduce mod p.

use ark_ff::PrimeField;
use eddsa_core::Fq;
use sha2::{Digest, Sha256};

/// Hash an arbitrary byte-string message to a BN254 field element.
///
/// Method: SHA-256(message) → interpret as little-endian integer → reduce
/// mod p. Deterministic and collision-resistant, suitable as the `M` input
/// of the verifier circuit.
pub fn message_to_field(message: &[u8]) -> Fq {
    let digest = Sha256::digest(message);
    Fq::from_le_bytes_mod_order(&digest)
}
