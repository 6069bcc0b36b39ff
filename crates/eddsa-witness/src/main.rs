use eddsa_witness::message::message_to_field;
use eddsa_witness::witness_builder;

use eddsa_core::curve::fq_to_dec_string;
use eddsa_core::{derive_keys, sign, verify, PoseidonHash};
use rand::RngCore;
use std::path::PathBuf;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut message = String::from("hello world");
    let mut output = PathBuf::from("build/input.json");

    // Simple argument parsing
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--message" | "-m" => {
                i += 1;
                if i < args.len() {
                    message = args[i].clone();
                }
            }
            "--output" | "-o" => {
                i += 1;
                if i < args.len() {
                    output = PathBuf::from(&args[i]);
                }
            }
            "--help" | "-h" => {
                eprintln!("Usage: eddsa-witness [OPTIONS]");
                eprintln!("  --message, -m  Message to sign (default: 'hello world')");
                eprintln!("  --output, -o   Output JSON path (default: build/input.json)");
                std::process::exit(0);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    eprintln!("[1/4] Deriving keys from a fresh seed...");
    let mut seed = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut seed);
    let (mut pub_key, priv_key) = derive_keys(seed, PoseidonHash::new());
    eprintln!("  A.x = {}", fq_to_dec_string(&pub_key.a.x));
    eprintln!("  A.y = {}", fq_to_dec_string(&pub_key.a.y));

    eprintln!("[2/4] Signing message: {:?}", &message);
    let m = message_to_field(message.as_bytes());
    let sig = sign(m, &mut pub_key, &priv_key).expect("signing failed");
    eprintln!("  R.x = {}", fq_to_dec_string(&sig.r.x));
    eprintln!("  S   = {}", sig.s.to_dec_string());

    eprintln!("[3/4] Verifying signature (Rust)...");
    let valid = verify(&sig, m, &mut pub_key).expect("verification errored");
    assert!(valid, "Rust verification failed!");
    eprintln!("  ✓ Signature valid");

    eprintln!("[4/4] Exporting witness JSON to {:?}...", &output);
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent).expect("failed to create output directory");
    }
    witness_builder::export_witness_json(&sig, &pub_key.a, &m, &output)
        .expect("failed to write witness JSON");

    // Also print the JSON to stdout for inspection
    let witness = witness_builder::build_witness_input(&sig, &pub_key.a, &m);
    println!("{}", serde_json::to_string_pretty(&witness).unwrap());
}
