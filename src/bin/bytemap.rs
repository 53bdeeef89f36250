//! bytemap command line tool
//!
//! Generates, caches and inspects the byte-substitution tables used by the
//! avalanche hash.

use anyhow::{Context, Result};
use bytemap::reporters::{ConsoleGenerationReporter, GenerationReporter, SilentGenerationReporter};
use bytemap::{ByteMap, MapSize, TableBuilder, TableConfig, TableOrigin, TableStore};
use std::path::Path;

/// Bytes per line in hex dumps
const DUMP_WIDTH: usize = 16;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = bytemap::parse_args();

    match matches.subcommand() {
        Some(("generate", sub_matches)) => handle_generate(sub_matches),
        Some(("load", sub_matches)) => handle_load(sub_matches),
        Some(("check", sub_matches)) => handle_check(sub_matches),
        Some(("dump", sub_matches)) => handle_dump(sub_matches),
        Some((cmd, _)) => {
            eprintln!("Unknown command: {}", cmd);
            std::process::exit(1);
        }
        None => {
            eprintln!("Error: No command specified");
            eprintln!("\nUse 'bytemap --help' for usage information");
            std::process::exit(1);
        }
    }
}

fn reporter(matches: &clap::ArgMatches) -> Box<dyn GenerationReporter> {
    if matches.get_flag("quiet") {
        Box::new(SilentGenerationReporter::new())
    } else {
        Box::new(ConsoleGenerationReporter::new())
    }
}

fn handle_generate(matches: &clap::ArgMatches) -> Result<()> {
    let output = matches
        .get_one::<String>("output")
        .expect("output is required");
    let config = TableConfig::from_args(matches)?;

    let table = config
        .builder()
        .generate_with_reporter(config.rounds.as_u32(), &*reporter(matches));
    bytemap::save(Path::new(output), &table)
        .with_context(|| format!("Failed to save table to {}", output))?;

    println!("{:08x}  {}", table.fingerprint(), output);
    Ok(())
}

fn handle_load(matches: &clap::ArgMatches) -> Result<()> {
    let config = TableConfig::from_args(matches)?;
    let cache = config.cache_path.clone().expect("cache is required");
    let quiet = matches.get_flag("quiet");

    let loaded = TableStore::from_config(&cache, &config).load();

    println!("{:08x}  {}", loaded.table.fingerprint(), cache.display());
    if !quiet {
        eprintln!("Table {}", loaded.origin);
    }

    match loaded.origin {
        TableOrigin::Unpersisted(_) => std::process::exit(1),
        _ => Ok(()),
    }
}

/// Read a table file without regenerating anything
fn read_table(path: &str, size: MapSize) -> Result<ByteMap> {
    if path == "default" {
        return Ok(bytemap::default_table());
    }
    TableStore::new(path)
        .builder(TableBuilder::new(size))
        .read()
        .map_err(anyhow::Error::from)
}

fn handle_check(matches: &clap::ArgMatches) -> Result<()> {
    let file = matches.get_one::<String>("file").expect("file is required");
    let config = TableConfig::from_args(matches)?;
    let quiet = matches.get_flag("quiet");

    let table = match read_table(file, config.map_size) {
        Ok(table) => table,
        Err(e) => {
            if !quiet {
                eprintln!("{}: invalid: {}", file, e);
            }
            std::process::exit(1);
        }
    };

    if table.is_permutation() {
        println!("{:08x}  {}: ok", table.fingerprint(), file);
        Ok(())
    } else {
        if !quiet {
            let expected = table.size().copies_per_value();
            let skewed = table
                .histogram()
                .iter()
                .filter(|&&count| count != expected)
                .count();
            eprintln!(
                "{}: invalid: {} byte values do not occur exactly {} times",
                file, skewed, expected
            );
        }
        std::process::exit(1);
    }
}

fn handle_dump(matches: &clap::ArgMatches) -> Result<()> {
    let file = matches.get_one::<String>("file").expect("file is required");
    let config = TableConfig::from_args(matches)?;

    let table =
        read_table(file, config.map_size).with_context(|| format!("Cannot dump {}", file))?;

    for (line, chunk) in table.as_bytes().chunks(DUMP_WIDTH).enumerate() {
        println!("{:06x}  {}", line * DUMP_WIDTH, hex::encode(chunk));
    }
    Ok(())
}
