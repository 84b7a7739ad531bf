use env_logger::Builder;
use fixture_codec::constants::{DEFAULT_LOG_LEVEL, LOG_ENV};
use fixture_codec::{deserialize, join_array, read_line, serialize, CodecError};
use log::{error, info};
use std::io::{self, Write};
use std::process;

fn main() {
    let mut builder = Builder::new();
    builder
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .parse_filters(&std::env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()))
        .init();

    let descriptors: Vec<String> = std::env::args().skip(1).collect();
    if descriptors.is_empty() {
        eprintln!("usage: fixture-codec <descriptor>...");
        eprintln!("reads one line per descriptor from stdin and prints the canonical values");
        process::exit(2);
    }

    match run(&descriptors) {
        Ok(line) => println!("{}", line),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}

fn run(descriptors: &[String]) -> Result<String, CodecError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let start = std::time::Instant::now();

    let mut outputs = Vec::with_capacity(descriptors.len());
    for ty in descriptors {
        let line = read_line(&mut input)?.ok_or_else(|| {
            CodecError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no input line for {}", ty),
            ))
        })?;
        let value = deserialize(ty, &line)?;
        outputs.push(serialize(&value, Some(ty))?);
    }

    info!("decoded {} values in {:?}", outputs.len(), start.elapsed());
    Ok(join_array(&outputs))
}
