use clap::{crate_version, Command};

fn command() -> Command {
    Command::new("uagen")
        .version(crate_version!())
        .about("Generates a shuffled list of HTTP User-Agent strings")
}

/// The binary takes no arguments; parsing only wires up --help and --version.
pub fn parse_command_line() {
    command().get_matches();
}
