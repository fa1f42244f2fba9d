//! Argument definitions for `alignchart`

use align_model::AlignmentCategory;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

pub(crate) fn build_cli() -> Command {
    Command::new("alignchart")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Per-community alignment chart")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Store configuration file (TOML)"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding chart files; overrides the config file"),
        )
        .subcommand(
            with_invoker(Command::new("show").about("Show every member's alignment")).arg(
                Arg::new("json")
                    .long("json")
                    .action(ArgAction::SetTrue)
                    .help("Print the chart as JSON"),
            ),
        )
        .subcommand(with_invoker(
            Command::new("tally").about("Count members per alignment on the 3x3 grid"),
        ))
        .subcommand(
            with_invoker(Command::new("set").about("Set your own alignment")).arg(alignment_arg()),
        )
        .subcommand(with_invoker(
            Command::new("remove").about("Remove your own alignment"),
        ))
        .subcommand(
            with_invoker(
                Command::new("set-other").about("Set the alignment of another member"),
            )
            .arg(alignment_arg())
            .arg(
                Arg::new("target-user")
                    .long("target-user")
                    .requires("target-name")
                    .help("Member id to set; defaults to the invoker"),
            )
            .arg(
                Arg::new("target-name")
                    .long("target-name")
                    .requires("target-user")
                    .help("Display name of the target member"),
            )
            .arg(
                Arg::new("target-avatar")
                    .long("target-avatar")
                    .requires("target-user")
                    .help("Avatar URL of the target member"),
            ),
        )
}

fn with_invoker(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("community")
            .long("community")
            .help("Community id; omit to act outside any community"),
    )
    .arg(
        Arg::new("user")
            .long("user")
            .required(true)
            .help("Invoking member id"),
    )
    .arg(
        Arg::new("name")
            .long("name")
            .required(true)
            .help("Invoking member display name"),
    )
    .arg(
        Arg::new("avatar")
            .long("avatar")
            .help("Invoking member avatar URL"),
    )
}

fn alignment_arg() -> Arg {
    Arg::new("alignment")
        .long("alignment")
        .required(true)
        .value_parser(value_parser!(AlignmentCategory))
        .help("One of the nine alignments, e.g. \"Chaotic Good\" or chaotic-good")
}

/// Optional string argument, owned
pub(crate) fn opt_string(args: &ArgMatches, id: &str) -> Option<String> {
    args.get_one::<String>(id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn set_parses_alignment() {
        let matches = build_cli()
            .try_get_matches_from([
                "alignchart",
                "set",
                "--community",
                "1",
                "--user",
                "2",
                "--name",
                "Bob",
                "--alignment",
                "chaotic-good",
            ])
            .unwrap();
        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "set");
        assert_eq!(
            args.get_one::<AlignmentCategory>("alignment").copied(),
            Some(AlignmentCategory::ChaoticGood)
        );
    }

    #[test]
    fn unknown_alignment_is_rejected() {
        let result = build_cli().try_get_matches_from([
            "alignchart",
            "set",
            "--user",
            "2",
            "--name",
            "Bob",
            "--alignment",
            "sorta good",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_data_dir_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from([
                "alignchart",
                "show",
                "--user",
                "2",
                "--name",
                "Bob",
                "--data-dir",
                "/tmp/charts",
            ])
            .unwrap();
        assert_eq!(
            matches.get_one::<PathBuf>("data-dir"),
            Some(&PathBuf::from("/tmp/charts"))
        );
    }

    #[test]
    fn target_name_requires_target_user() {
        let result = build_cli().try_get_matches_from([
            "alignchart",
            "set-other",
            "--user",
            "2",
            "--name",
            "Bob",
            "--alignment",
            "lawful good",
            "--target-name",
            "Carol",
        ]);
        assert!(result.is_err());
    }
}
