use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mood")]
#[command(about = "A tiny mood board", version, disable_version_flag = true)]
pub(crate) struct Cli {
    /// Mood to add; opens the board when omitted
    pub(crate) text: Option<String>,

    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub(crate) version: Option<bool>,

    /// Mood service address (falls back to MOOD_API_URL)
    #[arg(long, global = true)]
    pub(crate) api_url: Option<String>,

    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Run the mood service
    Serve {
        /// Listen port (falls back to PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    Add {
        text: String,
    },
    Version,
    #[command(alias = "ls")]
    List,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_text_is_a_quick_add() {
        let cli = Cli::try_parse_from(["mood", "sleepy"]).unwrap();
        assert_eq!(cli.text.as_deref(), Some("sleepy"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn serve_takes_port() {
        let cli = Cli::try_parse_from(["mood", "serve", "--port", "5000"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Serve { port: Some(5000) })));
    }

    #[test]
    fn list_alias_and_global_api_url() {
        let cli = Cli::try_parse_from(["mood", "ls", "--api-url", "http://example:1"]).unwrap();
        assert!(matches!(cli.command, Some(Command::List)));
        assert_eq!(cli.api_url.as_deref(), Some("http://example:1"));
    }
}
