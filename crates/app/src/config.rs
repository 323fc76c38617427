//! Configuration for the hufftext command-line tool.
//!
//! Handles parsing command-line arguments and generating sensible
//! defaults. The tool works with ZERO arguments: without an input file it
//! compresses generated sample text, and the seed is printed so the run
//! is reproducible.

use std::path::PathBuf;

/// Complete configuration for one compression run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Files ===
    /// Input file path (None = generate sample text)
    pub input_file: Option<PathBuf>,

    /// Where the `token=code` lines go
    pub codes_file: PathBuf,

    /// Where the framed compressed bytes go
    pub compressed_file: PathBuf,

    /// Where the decoded text goes
    pub output_file: PathBuf,

    // === Table ===
    /// Frequency-table capacity; must exceed the distinct-token count
    pub table_capacity: usize,

    // === Sample generation ===
    /// Seed for sample text (and anything else random)
    pub seed: u64,

    /// Approximate size of generated sample text
    pub sample_bytes: usize,

    // === Behavior ===
    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print hash table statistics
    pub print_stats: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If --seed is not given, a time-based seed is chosen (and printed
    /// via `print`, so runs can be reproduced).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input_file: Option<PathBuf> = None;
        let mut codes_file: Option<PathBuf> = None;
        let mut compressed_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut table_capacity: Option<usize> = None;
        let mut seed: Option<u64> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut print_config = false;
        let mut print_stats = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--codes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--codes requires a path".to_string());
                    }
                    codes_file = Some(PathBuf::from(&args[i]));
                }
                "--compressed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--compressed requires a path".to_string());
                    }
                    compressed_file = Some(PathBuf::from(&args[i]));
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output_file = Some(PathBuf::from(&args[i]));
                }
                "--capacity" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--capacity requires a number".to_string());
                    }
                    table_capacity = Some(args[i].parse().map_err(|_| "invalid capacity")?);
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-bytes requires a number".to_string());
                    }
                    sample_bytes = Some(args[i].parse().map_err(|_| "invalid sample-bytes")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-stats" => {
                    print_stats = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        Ok(Config {
            input_file,
            codes_file: codes_file.unwrap_or_else(|| PathBuf::from("codes.txt")),
            compressed_file: compressed_file.unwrap_or_else(|| PathBuf::from("compressed.bin")),
            output_file: output_file.unwrap_or_else(|| PathBuf::from("uncompressed.txt")),
            table_capacity: table_capacity.unwrap_or(32768),
            seed,
            sample_bytes: sample_bytes.unwrap_or(16384),
            print_config,
            print_stats,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!(
            "Input file:      {}",
            self.input_file
                .as_ref()
                .and_then(|p| p.to_str())
                .unwrap_or("(generate sample)")
        );
        println!("Codes file:      {}", self.codes_file.display());
        println!("Compressed file: {}", self.compressed_file.display());
        println!("Output file:     {}", self.output_file.display());
        println!();
        println!("Table capacity: {}", self.table_capacity);
        println!("Seed: {}", self.seed);
        if self.input_file.is_none() {
            println!("Sample size: {} bytes", self.sample_bytes);
        }
        println!();
    }
}

fn print_help() {
    println!("hufftext: word-level Huffman text compression");
    println!();
    println!("USAGE:");
    println!("    hufftext [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>           Input text file (default: generate sample)");
    println!("    --codes <PATH>        Code table output (default: codes.txt)");
    println!("    --compressed <PATH>   Compressed output (default: compressed.bin)");
    println!("    --out <PATH>          Decoded text output (default: uncompressed.txt)");
    println!();
    println!("    --capacity <N>        Hash table capacity (default: 32768)");
    println!("    --seed <N>            Random seed for sample generation");
    println!("    --sample-bytes <N>    Sample text size (default: 16384)");
    println!();
    println!("    --print-config        Print resolved configuration");
    println!("    --no-stats            Don't print hash table statistics");
    println!("    --help, -h            Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    hufftext                          # Compress generated sample text");
    println!("    hufftext --seed 42                # Deterministic sample run");
    println!("    hufftext --in book.txt            # Compress a specific file");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(&[]).unwrap();
        assert!(config.input_file.is_none());
        assert_eq!(config.codes_file, PathBuf::from("codes.txt"));
        assert_eq!(config.table_capacity, 32768);
        assert!(config.print_stats);
        assert!(!config.print_config);
    }

    #[test]
    fn test_explicit_values() {
        let config = Config::from_args(&args(&[
            "--in",
            "book.txt",
            "--capacity",
            "1024",
            "--seed",
            "7",
            "--no-stats",
        ]))
        .unwrap();

        assert_eq!(config.input_file, Some(PathBuf::from("book.txt")));
        assert_eq!(config.table_capacity, 1024);
        assert_eq!(config.seed, 7);
        assert!(!config.print_stats);
    }

    #[test]
    fn test_missing_value() {
        assert!(Config::from_args(&args(&["--in"])).is_err());
        assert!(Config::from_args(&args(&["--capacity"])).is_err());
    }

    #[test]
    fn test_unknown_argument() {
        assert!(Config::from_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_invalid_number() {
        assert!(Config::from_args(&args(&["--capacity", "lots"])).is_err());
    }
}
