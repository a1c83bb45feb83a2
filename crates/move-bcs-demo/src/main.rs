//! Encodes the reference LBR transfer script and decodes it back.
//!
//! Run with `RUST_LOG=move_bcs=trace` to see the decoder's log events.

use std::time::Instant;

use move_bcs::well_known::lbr_type_tag;
use move_bcs::{
    deserialize, serialize, DecodeError, Script, ScriptBuilder, TransactionArgument,
};
use tracing_subscriber::EnvFilter;

fn build_script() -> Script {
    ScriptBuilder::new()
        .code(Vec::new())
        .ty_arg(lbr_type_tag())
        .args([
            TransactionArgument::U8Vector(Vec::new()),
            TransactionArgument::U64(1234567),
            TransactionArgument::U8Vector(Vec::new()),
        ])
        .build()
        .expect("script has code")
}

fn format_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let script = build_script();

    println!("=== Script ===");
    for (i, ty) in script.ty_args.iter().enumerate() {
        println!("  ty_args[{}] = {}", i, ty);
    }
    for (i, arg) in script.args.iter().enumerate() {
        println!("  arg[{}] = {}", i, arg);
    }

    let start = Instant::now();
    let bytes = serialize(&script);
    let encode_time = start.elapsed();

    println!("\n=== Encoded ({} bytes in {:?}) ===", bytes.len(), encode_time);
    println!("[{}]", format_bytes(&bytes));

    let start = Instant::now();
    let decoded: Script = deserialize(&bytes).expect("Failed to decode");
    let decode_time = start.elapsed();

    println!("\n=== Decoded in {:?} ===", decode_time);
    println!("Round trip equal: {}", decoded == script);

    // The same bytes with one extra byte are no longer a valid encoding.
    let mut trailing = bytes.clone();
    trailing.push(0);
    match deserialize::<Script>(&trailing) {
        Err(err @ DecodeError::TrailingBytes { .. }) => println!("Trailing byte: {}", err),
        other => println!("Trailing byte: unexpected result {:?}", other),
    }
}
