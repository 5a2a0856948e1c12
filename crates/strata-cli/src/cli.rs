use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use strata_codec::CodecSpec;

#[derive(Parser)]
#[command(
    name = "strata",
    about = "Strata: read and write stores through a chain of reversible codecs",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML file with `chain` and `[store]` settings
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory that store names resolve under
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Codec to pass data through; repeat in write order (identity, reverse, crc32, hex)
    #[arg(short = 't', long = "through", global = true)]
    pub through: Vec<CodecSpec>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write data into a store
    Put(PutArgs),
    /// Read data back out of a store
    Get(GetArgs),
    /// Report whether a store holds data
    Exists(NameArgs),
    /// Delete a store
    Rm(NameArgs),
}

#[derive(Args)]
pub struct PutArgs {
    pub name: String,
    /// Read from this file instead of stdin
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct GetArgs {
    pub name: String,
    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct NameArgs {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_put() {
        let cli = Cli::try_parse_from(["strata", "put", "notes"]).unwrap();
        if let Command::Put(args) = cli.command {
            assert_eq!(args.name, "notes");
            assert!(args.file.is_none());
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_put_from_file() {
        let cli = Cli::try_parse_from(["strata", "put", "notes", "-f", "in.txt"]).unwrap();
        if let Command::Put(args) = cli.command {
            assert_eq!(args.file, Some(PathBuf::from("in.txt")));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_through_keeps_order() {
        let cli =
            Cli::try_parse_from(["strata", "-t", "reverse", "get", "notes", "--through", "crc32"])
                .unwrap();
        assert_eq!(cli.through, vec![CodecSpec::Reverse, CodecSpec::Crc32]);
        assert!(matches!(cli.command, Command::Get(_)));
    }

    #[test]
    fn parse_unknown_codec_fails() {
        assert!(Cli::try_parse_from(["strata", "-t", "zstd", "get", "notes"]).is_err());
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::try_parse_from([
            "strata", "exists", "notes", "--root", "/srv", "-v", "-c", "s.toml",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.root, Some(PathBuf::from("/srv")));
        assert_eq!(cli.config, Some(PathBuf::from("s.toml")));
        assert!(matches!(cli.command, Command::Exists(_)));
    }

    #[test]
    fn parse_rm() {
        let cli = Cli::try_parse_from(["strata", "rm", "notes"]).unwrap();
        assert!(matches!(cli.command, Command::Rm(_)));
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
