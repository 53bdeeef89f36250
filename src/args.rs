use clap::{Arg, ArgAction, Command};

fn size_arg() -> Arg {
    Arg::new("size")
        .long("size")
        .help("Table size in bytes, a power of two of at least 256 (default: 4096)")
        .value_name("BYTES")
        .value_parser(clap::value_parser!(usize))
}

fn generation_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("rounds")
            .short('r')
            .long("rounds")
            .help("Number of shuffle passes (default: 200)")
            .value_name("COUNT")
            .value_parser(clap::value_parser!(i64))
            .allow_negative_numbers(true),
    )
    .arg(
        Arg::new("seed")
            .long("seed")
            .help("Mixer seed as hex (default: 0x13ef13156da2756b)")
            .value_name("HEX"),
    )
    .arg(size_arg())
}

pub fn build_command() -> Command {
    Command::new("bytemap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate, cache and inspect avalanche hash byte tables")
        .arg_required_else_help(true)
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress progress output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(generation_args(
            Command::new("generate")
                .visible_alias("g")
                .about("Generate a table and write it to a file")
                .arg(
                    Arg::new("output")
                        .help("Output file")
                        .required(true)
                        .index(1),
                ),
        ))
        .subcommand(generation_args(
            Command::new("load")
                .visible_alias("l")
                .about("Load a cached table, regenerating and caching it if needed")
                .arg(
                    Arg::new("cache")
                        .help("Cache file")
                        .required(true)
                        .index(1),
                ),
        ))
        .subcommand(
            Command::new("check")
                .visible_alias("c")
                .about("Check that a file holds a valid table")
                .arg(
                    Arg::new("file")
                        .help("Table file")
                        .required(true)
                        .index(1),
                )
                .arg(size_arg()),
        )
        .subcommand(
            Command::new("dump")
                .visible_alias("d")
                .about("Print a table as hex ('default' for the bundled table)")
                .arg(
                    Arg::new("file")
                        .help("Table file, or 'default'")
                        .required(true)
                        .index(1),
                )
                .arg(size_arg()),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    build_command().get_matches()
}
