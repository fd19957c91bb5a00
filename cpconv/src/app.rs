use std::path::PathBuf;

use clap::Parser;

/// cpconv - convert text between UTF-8 and single-byte codepages
#[derive(Debug, Parser)]
#[command(name = "cpconv", version, about, long_about = None)]
pub struct Cli {
    /// Source encoding (name, alias, codepage number, or utf-8).
    #[arg(short = 'f', long = "from-code", value_name = "ENCODING")]
    pub from: Option<String>,

    /// Target encoding (name, alias, codepage number, or utf-8).
    #[arg(short = 't', long = "to-code", value_name = "ENCODING")]
    pub to: Option<String>,

    /// Output file (default: stdout).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Replace characters the target cannot represent with this text.
    #[arg(long, value_name = "TEXT", conflicts_with = "discard")]
    pub replace: Option<String>,

    /// Silently drop characters the target cannot represent.
    #[arg(short = 'c', long)]
    pub discard: bool,

    /// List available encodings and exit.
    #[arg(short, long)]
    pub list: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Input files (default: stdin).
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iconv_style_flags() {
        let cli = Cli::parse_from(["cpconv", "-f", "cp1254", "-t", "utf-8", "-c", "in.txt"]);
        assert_eq!(cli.from.as_deref(), Some("cp1254"));
        assert_eq!(cli.to.as_deref(), Some("utf-8"));
        assert!(cli.discard);
        assert_eq!(cli.inputs, vec![PathBuf::from("in.txt")]);
    }

    #[test]
    fn replace_conflicts_with_discard() {
        let res = Cli::try_parse_from(["cpconv", "-f", "x", "-t", "y", "-c", "--replace", "?"]);
        assert!(res.is_err());
    }
}
