use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const COMPARE_CMD: &str = "compare";
const DEFAULT_IDENTITY_ARG: &str = "0.95";

pub fn create_compare_cli() -> Command {
    Command::new(COMPARE_CMD)
        .about("Cluster two FASTA files together with CD-HIT and report shared and unique sequences.")
        .arg(Arg::new("fasta1").required(true).help("First FASTA file"))
        .arg(Arg::new("fasta2").required(true).help("Second FASTA file"))
        .arg(
            arg!(--tag1 <TAG>)
                .required(false)
                .help("Name prefix of the first dataset (default: file name up to the first '_' or '.')"),
        )
        .arg(
            arg!(--tag2 <TAG>)
                .required(false)
                .help("Name prefix of the second dataset (default: file name up to the first '_' or '.')"),
        )
        .arg(
            arg!(--id <IDENTITY>)
                .required(false)
                .value_parser(value_parser!(f64))
                .default_value(DEFAULT_IDENTITY_ARG)
                .help("Sequence identity threshold passed to CD-HIT"),
        )
        .arg(
            Arg::new("type")
                .long("type")
                .value_name("TYPE")
                .value_parser(["nucl", "prot"])
                .help("Sequence type (default: 'prot' if the first file name contains 'faa')"),
        )
        .arg(
            arg!(--tempdir <DIR>)
                .required(false)
                .help("Directory for temporary files (default: system temporary directory)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Log every step, including the CD-HIT command line"),
        )
}
