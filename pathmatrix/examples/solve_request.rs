//! Reads a JSON request from standard input and prints the response.
//!
//! ```text
//! echo '{"graph": {"A": {"B": 3}, "B": {}}, "start": "A", "end": "B"}' \
//!     | RUST_LOG=debug cargo run --example solve_request
//! ```

use std::io::{self, Read};

use pathmatrix::{core::Limits, wire};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    match wire::solve_json(&input, &Limits::default()) {
        Ok(response) => println!("{response}"),
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }

    Ok(())
}
