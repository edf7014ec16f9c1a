use clap::{Arg, ArgAction, Command};

pub fn root_command() -> Command {
    Command::new("mkcache")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Refresh repository metadata caches")
        .long_about("mkcache decides which repositories' metadata is stale and refreshes it. Run it directly to refresh expired metadata now, or from a periodic timer with `mkcache makecache timer` to refresh opportunistically without hammering mirrors.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Config file applied on top of ~/.mkcache/config.toml")
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}
