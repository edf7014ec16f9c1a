use clap::{Arg, ArgAction, Command};

pub fn makecache_command() -> Command {
    Command::new("makecache")
        .about("Generate the metadata cache")
        .long_about("Refresh metadata for every enabled repository whose cache is missing or expired. With the `timer` argument the run is skipped on battery power, when timer refreshes are disabled, or when the last timer refresh is more recent than metadata_timer_sync; repositories that would expire before the next timer run are refreshed early.")
        .arg(
            Arg::new("mode")
                .help("Pass `timer` when invoked by the periodic timer")
                .index(1),
        )
}

pub fn next_run_command() -> Command {
    Command::new("next-run")
        .about("Show when the makecache timer fires next")
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output in JSON format")
                .action(ArgAction::SetTrue),
        )
}
