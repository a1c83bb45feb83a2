//! Simple decoder to inspect encoded scripts.

use std::fs;

use move_bcs::{deserialize, Script, TransactionArgument};

fn format_arg(arg: &TransactionArgument) -> String {
    match arg {
        TransactionArgument::U8Vector(bytes) if bytes.len() > 32 => {
            format!("BYTES[{}]", bytes.len())
        }
        other => other.to_string(),
    }
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "script.bcs".to_string());

    println!("Reading: {}", path);

    let data = fs::read(&path).expect("Failed to read file");
    println!("File size: {} bytes", data.len());

    let script: Script = match deserialize(&data) {
        Ok(script) => script,
        Err(err) => {
            eprintln!("Rejected ({:?}): {}", err.kind(), err);
            std::process::exit(1);
        }
    };

    println!("\n=== Script ===");
    println!("Code: {} bytes", script.code.len());

    println!("\nType arguments ({}):", script.ty_args.len());
    for (i, ty) in script.ty_args.iter().enumerate() {
        println!("  [{}] {}", i, ty);
    }

    println!("\nArguments ({}):", script.args.len());
    for (i, arg) in script.args.iter().enumerate() {
        println!("  [{}] {}", i, format_arg(arg));
    }
}
