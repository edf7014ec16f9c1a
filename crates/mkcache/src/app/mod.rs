mod global;
mod makecache;


use clap::Command;

pub fn build_cli() -> Command {
    global::root_command()
        .subcommand(makecache::makecache_command())
        .subcommand(makecache::next_run_command())
}
