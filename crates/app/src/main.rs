//! hufftext: compress a text file with word-level Huffman coding.
//!
//! Pipeline: read (or generate) input, encode, write the code table and
//! the framed compressed bytes, then re-read the compressed file, decode
//! it through the code table, and verify the round trip.

mod config;
mod input_gen;

use config::Config;
use hufftext_core::codec::{self, CodecConfig};
use hufftext_core::framing;
use std::fs::{self, File};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    if let Err(error) = run(&config) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> hufftext_core::Result<()> {
    // Read or generate the message
    let message = match &config.input_file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            println!(
                "No input file; generating {} bytes of sample text (seed {})",
                config.sample_bytes, config.seed
            );
            input_gen::generate_sample_text(config.seed, config.sample_bytes)
        }
    };

    // Encode
    let codec_config = CodecConfig::new(config.table_capacity);
    let encoded = codec::encode(&message, &codec_config)?;

    // Persist the code table and the framed compressed bytes
    let codes_file = File::create(&config.codes_file)?;
    encoded.code_table.write_codes(codes_file)?;

    let frame = framing::serialize_frame(&encoded.stream);
    fs::write(&config.compressed_file, &frame)?;

    if config.print_stats {
        println!("{}", encoded.table_stats);
        println!();
    }

    println!("=== Compression ===");
    println!("Input:      {} bytes", message.len());
    println!("Compressed: {} bytes ({} bits of codes)", frame.len(), encoded.stream.bit_len());
    if !message.is_empty() {
        println!(
            "Ratio: {:.1}%",
            frame.len() as f64 * 100.0 / message.len() as f64
        );
    }
    println!("Distinct tokens: {}", encoded.code_table.len());
    println!();

    // Close the loop: decode from the persisted bytes, not memory
    let frame_bytes = fs::read(&config.compressed_file)?;
    let restored = codec::decode_frame(&frame_bytes, &encoded.code_table)?;
    fs::write(&config.output_file, &restored)?;

    if restored == message {
        println!(
            "✓ Round trip verified: {} bytes restored from {}",
            restored.len(),
            config.compressed_file.display()
        );
    } else {
        println!(
            "✗ Round trip FAILED: {} bytes in, {} bytes out",
            message.len(),
            restored.len()
        );
    }

    Ok(())
}
