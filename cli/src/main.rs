//! huddle — split a roster of names into randomized groups.
//!
//! Thin I/O glue around [`huddle_shuffler::GroupShuffler`]: read names from
//! a file (or stdin), print one accepted group per line. An empty output is
//! a legitimate outcome, not an error — it means the roster was smaller
//! than the group size or history left nothing new to emit.

use anyhow::Context;
use clap::Parser;
use huddle_shuffler::GroupShuffler;
use huddle_types::Participant;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "huddle", about = "Split a roster of names into randomized groups")]
struct Cli {
    /// Path to the roster file, one name per line ("-" reads stdin).
    /// Blank lines and lines starting with '#' are skipped.
    roster: PathBuf,

    /// Number of members per group.
    #[arg(long, default_value_t = 3, env = "HUDDLE_GROUP_SIZE")]
    group_size: usize,

    /// Log level: "trace", "debug", "info", "warn", "error".
    /// RUST_LOG takes precedence when set.
    #[arg(long, default_value = "info", env = "HUDDLE_LOG_LEVEL")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level);

    let contents = if cli.roster.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin()).context("failed to read roster from stdin")?
    } else {
        std::fs::read_to_string(&cli.roster)
            .with_context(|| format!("failed to read roster file {}", cli.roster.display()))?
    };

    let roster = parse_roster(&contents);
    tracing::info!(participants = roster.len(), "loaded roster");

    let mut shuffler = GroupShuffler::new(roster, cli.group_size)?;

    let mut produced = 0usize;
    for group in shuffler.groups() {
        println!("{group}");
        produced += 1;
    }

    if produced == 0 {
        tracing::warn!("no groups produced — is the roster smaller than the group size?");
    } else {
        tracing::info!(groups = produced, "done");
    }

    Ok(())
}

/// Install the fmt subscriber. RUST_LOG overrides the flag when present.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// One name per non-empty line; '#' starts a comment line.
fn parse_roster(contents: &str) -> Vec<Participant> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(Participant::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_skips_blanks_and_comments() {
        let roster = parse_roster("# team\nAda\n\n  Bob  \n#Cleo\nDan\n");
        let names: Vec<&str> = roster.iter().map(Participant::as_str).collect();
        assert_eq!(names, vec!["Ada", "Bob", "Dan"]);
    }

    #[test]
    fn parse_of_empty_input_is_empty() {
        assert!(parse_roster("").is_empty());
        assert!(parse_roster("\n# only a comment\n").is_empty());
    }

    #[test]
    fn roster_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Ada\nBob\nCleo").unwrap();
        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(parse_roster(&contents).len(), 3);
    }
}
