// src/cli.rs
use clap::{Parser, Subcommand};
use directory::Category;

#[derive(Parser, Debug)]
#[command(
    name = "helpline",
    version,
    about = "Searchable directory of emergency and help-line numbers"
)]
pub struct Cli {
    /// Tick rate, i.e. number of ticks per second
    #[arg(short, long, value_name = "FLOAT", global = true)]
    pub tick_rate: Option<f64>,

    /// Frame rate, i.e. number of frames per second
    #[arg(short, long, value_name = "FLOAT", global = true)]
    pub frame_rate: Option<f64>,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Run interactive TUI (default)
    Run,
    /// Print the directory, optionally filtered
    List {
        /// Case-insensitive search over names and numbers
        #[arg(short, long, default_value = "")]
        query: String,
        /// Only show one category (emergency, toll-free, custom)
        #[arg(short, long)]
        category: Option<Category>,
    },
    /// Call the first contact matching the query
    Call { query: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["helpline"]).expect("parse");
        assert!(cli.cmd.is_none());
        assert!(cli.tick_rate.is_none());
    }

    #[test]
    fn list_accepts_query_and_category() {
        let cli = Cli::try_parse_from(["helpline", "list", "-q", "help", "--category", "toll-free"])
            .expect("parse");
        assert_eq!(
            cli.cmd,
            Some(Cmd::List {
                query: "help".into(),
                category: Some(Category::TollFree),
            })
        );
    }

    #[test]
    fn rates_are_global() {
        let cli = Cli::try_parse_from(["helpline", "run", "--tick-rate", "8"]).expect("parse");
        assert_eq!(cli.tick_rate, Some(8.0));
        assert_eq!(cli.cmd, Some(Cmd::Run));
    }

    #[test]
    fn call_requires_query() {
        assert!(Cli::try_parse_from(["helpline", "call"]).is_err());
        let cli = Cli::try_parse_from(["helpline", "call", "police"]).expect("parse");
        assert_eq!(
            cli.cmd,
            Some(Cmd::Call {
                query: "police".into()
            })
        );
    }
}
