use serde_json::{json, Value};
use std::path::Path;

use eddsa_core::{BjjPoint, Fq, Signature};
use eddsa_core::curve::fq_to_dec_string;

/// Build the input JSON for circomlib's `EdDSAPoseidonVerifier` template:
/// the public key point A, the commitment point R8, the response scalar S,
/// and the field-element message M, all as decimal strings.
pub fn build_witness_input(sig: &Signature, a: &BjjPoint, message: &Fq) -> Value {
    json!({
        "Ax":  fq_to_dec_string(&a.x),
        "Ay":  fq_to_dec_string(&a.y),
        "R8x": fq_to_dec_string(&sig.r.x),
        "R8y": fq_to_dec_string(&sig.r.y),
        "S":   sig.s.to_dec_string(),
        "M":   fq_to_dec_string(message),
    })
}

/// Build witness JSON and write it to a file.
pub fn export_witness_json(
    sig: &Signature,
    a: &BjjPoint,
    message: &Fq,
    output_path: &Path,
) -> std::io::Result<()> {
    let witness = build_witness_input(sig, a, message);
    let json_str = serde_json::to_string_pretty(&witness).expect("JSON serialization failed");
    std::fs::write(output_path, json_str)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
