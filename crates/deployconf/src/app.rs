use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("deployconf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and resolve launcher deployment settings")
        .long_about("deployconf knows every deployment setting the launcher recognizes, with its validator and built-in default. It prints the catalog or a commented deployment.properties template, checks single values, and resolves system and user configuration files into the effective settings.")
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only emit error-level log events")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("deployment-file")
                .long("deployment-file")
                .help("Use this file as the user deployment file instead of the default location")
                .global(true),
        )
        .arg(
            Arg::new("sandbox-root")
                .long("sandbox-root")
                .help("Only allow reads below this directory (repeatable)")
                .action(ArgAction::Append)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("defaults")
                .about("List every setting with its accepted values and default")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("template")
                .about("Print a commented deployment.properties template")
        )
        .subcommand(
            Command::new("validate")
                .about("Check a value against a setting's validator and print its canonical form")
                .arg(
                    Arg::new("key")
                        .help("Setting name, e.g. deployment.cache.max.size")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("value")
                        .help("Candidate value")
                        .required(true)
                        .allow_hyphen_values(true) // Negative integers such as -1
                        .index(2)
                )
        )
        .subcommand(
            Command::new("resolve")
                .about("Resolve system and user configuration into effective settings")
                .long_about(
                    "Layers the user deployment file over the system configuration over the built-in defaults.\n\n\
                    Without --system, the system configuration named by the user file's\n\
                    deployment.system.config key is loaded when it is a file: URL."
                )
                .arg(
                    Arg::new("system")
                        .long("system")
                        .help("System configuration file (.properties or .toml)")
                )
                .arg(
                    Arg::new("user")
                        .long("user")
                        .help("User configuration file (defaults to the deployment file)")
                )
                .arg(
                    Arg::new("enforce")
                        .long("enforce")
                        .help("Treat every value in the system configuration as non-overridable")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "deployconf");
    }

    #[test]
    fn test_cli_validate_requires_key_and_value() {
        let app = build_cli();
        let result = app.try_get_matches_from(vec!["deployconf", "validate", "deployment.log"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_validate_accepts_negative_value() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["deployconf", "validate", "deployment.cache.max.size", "-1"])
            .unwrap();
        let sub = matches.subcommand_matches("validate").unwrap();
        assert_eq!(sub.get_one::<String>("value").unwrap(), "-1");
    }

    #[test]
    fn test_cli_sandbox_root_is_repeatable() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec![
                "deployconf",
                "--sandbox-root",
                "/a",
                "--sandbox-root",
                "/b",
                "defaults",
            ])
            .unwrap();
        let roots: Vec<&String> = matches.get_many::<String>("sandbox-root").unwrap().collect();
        assert_eq!(roots, vec!["/a", "/b"]);
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["deployconf", "resolve", "--json", "-q"])
            .unwrap();
        assert!(matches.get_flag("quiet"));
        let sub = matches.subcommand_matches("resolve").unwrap();
        assert!(sub.get_flag("json"));
        assert!(!sub.get_flag("enforce"));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        let app = build_cli();
        assert!(app.try_get_matches_from(vec!["deployconf"]).is_err());
    }
}
