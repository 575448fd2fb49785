mod compare;
mod info;

use anyhow::Result;
use clap::{ArgMatches, Command};
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "cdhit";
    pub const DEFAULT_LOG_FILTER: &str = "info";
    pub const VERBOSE_LOG_FILTER: &str = "debug";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Inspect CD-HIT cluster reports and compare sequence datasets with CD-HIT.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(info::cli::create_info_cli())
        .subcommand(compare::cli::create_compare_cli())
}

fn log_filter(matches: &ArgMatches) -> &'static str {
    match matches.subcommand() {
        Some((compare::cli::COMPARE_CMD, matches)) if matches.get_flag("verbose") => {
            consts::VERBOSE_LOG_FILTER
        }
        _ => consts::DEFAULT_LOG_FILTER,
    }
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    env_logger::Builder::from_env(Env::default().default_filter_or(log_filter(&matches))).init();

    match matches.subcommand() {
        //
        // INFO
        //
        Some((info::cli::INFO_CMD, matches)) => {
            info::handlers::run_info(matches)?;
        }

        //
        // COMPARE
        //
        Some((compare::cli::COMPARE_CMD, matches)) => {
            compare::handlers::run_compare(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_parser_is_consistent() {
        build_parser().debug_assert();
    }

    #[rstest]
    #[case(&["cdhit", "compare", "a.faa", "b.faa", "--verbose"], "debug")]
    #[case(&["cdhit", "compare", "a.faa", "b.faa"], "info")]
    #[case(&["cdhit", "info", "report.clstr"], "info")]
    fn test_log_filter(#[case] args: &[&str], #[case] expected: &str) {
        let matches = build_parser().try_get_matches_from(args).unwrap();
        assert_eq!(log_filter(&matches), expected);
    }

    #[rstest]
    fn test_subcommand_is_required() {
        assert!(build_parser().try_get_matches_from(["cdhit"]).is_err());
    }
}
