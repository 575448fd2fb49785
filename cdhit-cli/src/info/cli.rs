use clap::{Arg, ArgAction, Command};

pub const INFO_CMD: &str = "info";

pub fn create_info_cli() -> Command {
    Command::new(INFO_CMD)
        .about("Show information about a CD-HIT cluster report (.clstr, optionally gzipped).")
        .arg(
            Arg::new("clstr")
                .required(true)
                .help("Path to the cluster report, or '-' for standard input"),
        )
        .arg(
            Arg::new("no-stats")
                .long("no-stats")
                .action(ArgAction::SetTrue)
                .help("Do not print cluster statistics"),
        )
        .arg(
            Arg::new("hist")
                .long("hist")
                .action(ArgAction::SetTrue)
                .help("Print a histogram of cluster sizes"),
        )
        .arg(
            Arg::new("all")
                .long("all")
                .action(ArgAction::SetTrue)
                .help("Print every cluster and its members"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the statistics (and clusters, with --all) as JSON"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Fail on clusters without exactly one representative"),
        )
}
