pub mod curve;
pub mod error;
pub mod hash;
pub mod keypair;
pub mod sign;
pub mod verify;

// Re-exports for convenience
pub use curve::{BjjPoint, BjjScalar, CurveParams, Fq};
pub use error::EddsaError;
pub use hash::{challenge, hash512, DigestHash, PoseidonHash, SignatureHash};
pub use keypair::{derive_keys, PrivateKey, PublicKey};
pub use sign::{sign, Signature};
pub use verify::verify;
