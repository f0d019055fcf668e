use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{DemoArgs, IssueCommands, PrCommands, ProfileCommands, RepoCommands};

/// AgentFlow: watch issues turn into pull requests
///
/// Plays the scripted issue-to-pull-request walkthrough in the terminal and
/// manages the local dashboard: connected repositories, the issues picked up
/// from them and the pull requests produced for those issues. Running `af`
/// without a command prints the dashboard overview.
#[derive(Parser)]
#[command(version, about, name = "af")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/agentflow/agentflow.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// User whose dashboard rows are read and written
    #[arg(long, global = true, default_value = "local")]
    pub user: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the AgentFlow CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Play the interactive pipeline demo
    #[command(alias = "d")]
    Demo(DemoArgs),
    /// Manage connected repositories
    #[command(alias = "r")]
    Repo {
        #[command(subcommand)]
        command: RepoCommands,
    },
    /// Inspect and record issues
    #[command(alias = "i")]
    Issue {
        #[command(subcommand)]
        command: IssueCommands,
    },
    /// Inspect and record pull requests
    #[command(alias = "p")]
    Pr {
        #[command(subcommand)]
        command: PrCommands,
    },
    /// Show issues and pull requests per day over the last week
    #[command(alias = "a")]
    Activity,
    /// Show or update profile settings
    #[command(alias = "u")]
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["af", "repo", "list", "--user", "alice", "--no-color"])
            .expect("Failed to parse args");
        assert_eq!(args.user, "alice");
        assert!(args.no_color);
        assert!(matches!(args.command, Some(Commands::Repo { .. })));
    }

    #[test]
    fn test_profile_set_parses_fields() {
        let args = Args::try_parse_from(["af", "profile", "set", "--company", "Acme"])
            .expect("Failed to parse args");
        match args.command {
            Some(Commands::Profile {
                command: ProfileCommands::Set(set),
            }) => {
                assert_eq!(set.company.as_deref(), Some("Acme"));
                assert!(set.full_name.is_none());
            }
            _ => panic!("Expected profile set command"),
        }
    }

    #[test]
    fn test_bare_invocation_has_no_command() {
        let args = Args::try_parse_from(["af"]).expect("Failed to parse args");
        assert!(args.command.is_none());
        assert_eq!(args.user, "local");
    }
}
