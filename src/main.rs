//! `oid`: command line OID encoder/decoder
//!
//! ```text
//! oid [-c|-C] [-r] [-o<outfile>] {-i<infile>|2.999.1}
//!     converts dotted form to ASCII HEX DER output
//! oid -x [-o<outfile>] {-i<infile>|hex-digits}
//!     decodes ASCII HEX DER and gives dotted form
//! ```

mod cli;

use clap::Parser;
use cli::{read_input, write_output, Failure, Parameters};
use oid_converter::print::HexDisplay;
use oid_converter::{decode_hex, encode_dotted};
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub fn main() {
    let params = match Parameters::try_parse() {
        Ok(params) => params,
        Err(e) => {
            let _ = e.print();
            // help and version requests are not errors
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };
    init_logging(params.verbose);

    if let Err(failure) = run(&params) {
        debug!(code = failure.exit_code(), "conversion failed");
        eprintln!("{}", failure);
        std::process::exit(failure.exit_code());
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(params: &Parameters) -> Result<(), Failure> {
    let input = read_input(params)?;
    let output = if params.decode {
        info!(input = %input.trim(), "decoding");
        decode_hex(&input)?.labelled()
    } else {
        info!(input = %input.trim(), kind = ?params.default_kind(), "encoding");
        let bytes = encode_dotted(&input, params.default_kind())?;
        HexDisplay::new(&bytes, params.style()).to_string()
    };
    write_output(params, &output)
}
