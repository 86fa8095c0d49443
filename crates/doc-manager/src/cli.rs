use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

use doc_manager::{DataLoader, SearchRequest};

#[derive(Debug, Parser)]
#[command(
    name = "doc-manager",
    version,
    about = "Query an in-memory document store seeded from JSON or YAML files"
)]
pub struct Cli {
    /// Directory that config discovery and relative seed paths resolve against
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Explicit config file; skips discovery under --root
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Extra seed file or directory, loaded after the configured seed paths
    #[arg(long = "seed", global = true)]
    pub seeds: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the document with the given id
    Find { id: String },
    /// Print documents matching every given criterion
    Search(SearchArgs),
    /// Print every stored document
    List,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Read the request from a JSON or YAML file
    #[arg(long, conflicts_with_all = ["title_prefixes", "contains", "author_ids", "from", "to"])]
    pub request: Option<PathBuf>,

    #[arg(long = "title-prefix")]
    pub title_prefixes: Vec<String>,

    #[arg(long)]
    pub contains: Vec<String>,

    #[arg(long = "author-id")]
    pub author_ids: Vec<String>,

    /// Exclusive lower bound, RFC 3339
    #[arg(long)]
    pub from: Option<DateTime<Utc>>,

    /// Exclusive upper bound, RFC 3339
    #[arg(long)]
    pub to: Option<DateTime<Utc>>,
}

impl SearchArgs {
    /// Flags that were never passed stay absent, so a bare `search` is a
    /// criteria-free request.
    pub fn into_request(self) -> doc_manager::Result<SearchRequest> {
        if let Some(path) = self.request {
            return DataLoader::load_request(&path);
        }

        Ok(SearchRequest {
            title_prefixes: non_empty(self.title_prefixes),
            contains_contents: non_empty(self.contains),
            author_ids: non_empty(self.author_ids),
            created_from: self.from,
            created_to: self.to,
        })
    }
}

fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_args(args: &[&str]) -> SearchArgs {
        let cli = Cli::try_parse_from(args).expect("parse");
        match cli.command {
            Commands::Search(args) => args,
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_find_parses_id() {
        let cli = Cli::try_parse_from(["doc-manager", "find", "doc-1"]).expect("parse");
        match cli.command {
            Commands::Find { id } => assert_eq!(id, "doc-1"),
            _ => panic!("expected find command"),
        }
    }

    #[test]
    fn test_root_defaults_to_current_dir() {
        let cli = Cli::try_parse_from(["doc-manager", "list"]).expect("parse");
        assert_eq!(cli.root, PathBuf::from("."));

        let cli = Cli::try_parse_from(["doc-manager", "list", "--root", "/srv/docs"]).expect("parse");
        assert_eq!(cli.root, PathBuf::from("/srv/docs"));
    }

    #[test]
    fn test_global_seed_flags() {
        let cli = Cli::try_parse_from([
            "doc-manager",
            "list",
            "--seed",
            "a.json",
            "--seed",
            "more",
        ])
        .expect("parse");
        assert_eq!(cli.seeds, vec![PathBuf::from("a.json"), PathBuf::from("more")]);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn test_search_flags_build_request() {
        let args = search_args(&[
            "doc-manager",
            "search",
            "--title-prefix",
            "Ja",
            "--contains",
            "advanced",
            "--author-id",
            "a-1",
            "--from",
            "2024-05-01T00:00:00Z",
        ]);
        let request = args.into_request().unwrap();
        assert_eq!(request.title_prefixes, Some(vec!["Ja".to_string()]));
        assert_eq!(request.contains_contents, Some(vec!["advanced".to_string()]));
        assert_eq!(request.author_ids, Some(vec!["a-1".to_string()]));
        assert!(request.created_from.is_some());
        assert!(request.created_to.is_none());
    }

    #[test]
    fn test_bare_search_is_criteria_free() {
        let request = search_args(&["doc-manager", "search"]).into_request().unwrap();
        assert!(request.is_empty());
    }

    #[test]
    fn test_request_file_conflicts_with_flags() {
        let parsed = Cli::try_parse_from([
            "doc-manager",
            "search",
            "--request",
            "req.json",
            "--contains",
            "x",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_invalid_timestamp_is_rejected() {
        let parsed = Cli::try_parse_from(["doc-manager", "search", "--from", "yesterday"]);
        assert!(parsed.is_err());
    }
}
