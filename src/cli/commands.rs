//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "markgone")]
#[command(about = "Render plain text with a title line and a tag line to HTML", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Document to render to standard output ('-' or omitted: standard input)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Write the HTML to this file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file (default: markgone.toml in the current directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a document or every document in a directory to HTML files
    Convert {
        /// Document file or directory
        path: PathBuf,

        /// Directory to write HTML files into, mirroring the input tree
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// List the tags used by documents
    Tags {
        /// Document file or directory (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

impl Cli {
    /// Log filter for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "markgone=warn",
            1 => "markgone=info",
            2 => "markgone=debug",
            _ => "markgone=trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_input() {
        let cli = Cli::try_parse_from(["markgone", "post.txt", "-o", "post.html"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("post.txt")));
        assert_eq!(cli.output, Some(PathBuf::from("post.html")));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_convert() {
        let cli =
            Cli::try_parse_from(["markgone", "convert", "site", "--out-dir", "public", "-vv"])
                .unwrap();
        match cli.command {
            Some(Commands::Convert { path, out_dir }) => {
                assert_eq!(path, PathBuf::from("site"));
                assert_eq!(out_dir, Some(PathBuf::from("public")));
            }
            other => panic!("Expected convert command, got {:?}", other),
        }
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_tags_default_path() {
        let cli = Cli::try_parse_from(["markgone", "tags"]).unwrap();
        match cli.command {
            Some(Commands::Tags { path }) => assert_eq!(path, PathBuf::from(".")),
            other => panic!("Expected tags command, got {:?}", other),
        }
    }

    #[test]
    fn test_log_filter_levels() {
        let mut cli = Cli::try_parse_from(["markgone"]).unwrap();
        assert_eq!(cli.log_filter(), "markgone=warn");
        cli.verbose = 1;
        assert_eq!(cli.log_filter(), "markgone=info");
        cli.verbose = 5;
        assert_eq!(cli.log_filter(), "markgone=trace");
    }
}
