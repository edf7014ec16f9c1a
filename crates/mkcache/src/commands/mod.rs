use clap::ArgMatches;

use mkcache_core::events;

mod helpers;
mod makecache;
mod next_run;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("makecache", sub_matches)) => makecache::handle_makecache_command(matches, sub_matches),
        Some(("next-run", sub_matches)) => next_run::handle_next_run_command(sub_matches),
        _ => {
            tracing::error!(event = "cli.command.unknown");
            Err("Unknown command".into())
        }
    }
}
