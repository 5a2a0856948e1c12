use std::fs::File;
use std::io;

use anyhow::Context;
use colored::Colorize;
use strata_codec::CodecSpec;
use strata_compose::{Composer, TransformedStore};
use strata_io::{copy_into, FileStore, FlushOnClose, OutputStream, Source, Store};
use tracing::debug;

use crate::cli::*;
use crate::config::CliConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;
    match cli.command {
        Command::Put(args) => cmd_put(&config, args),
        Command::Get(args) => cmd_get(&config, args),
        Command::Exists(args) => cmd_exists(&config, args),
        Command::Rm(args) => cmd_rm(&config, args),
    }
}

/// Config file first, then command-line overrides.
fn resolve_config(cli: &Cli) -> anyhow::Result<CliConfig> {
    let mut config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    if let Some(root) = &cli.root {
        config.store.root = root.clone();
    }
    if !cli.through.is_empty() {
        config.chain = cli.through.clone();
    }
    Ok(config)
}

fn open_store(config: &CliConfig, name: &str) -> anyhow::Result<TransformedStore<FileStore>> {
    let raw = config.store.file_store(name)?;
    let chain = config.effective_chain();
    let composer = Composer::from_chain(chain.iter().map(CodecSpec::transformation))?;
    debug!(
        store = name,
        path = %raw.path().display(),
        chain = %describe(&chain),
        "opened store"
    );
    Ok(composer.bind(raw))
}

fn describe(chain: &[CodecSpec]) -> String {
    chain.iter().map(CodecSpec::name).collect::<Vec<_>>().join(" > ")
}

fn cmd_put(config: &CliConfig, args: PutArgs) -> anyhow::Result<()> {
    let store = open_store(config, &args.name)?;
    let copied = match &args.file {
        Some(path) => {
            let mut file = File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            copy_into(&mut file, &store)
        }
        None => copy_into(&mut io::stdin().lock(), &store),
    }
    .with_context(|| format!("cannot write {}", args.name))?;
    println!(
        "{} Stored {} bytes in {} ({})",
        "✓".green().bold(),
        copied,
        args.name.bold(),
        describe(&config.effective_chain()).cyan()
    );
    Ok(())
}

fn cmd_get(config: &CliConfig, args: GetArgs) -> anyhow::Result<()> {
    let store = open_store(config, &args.name)?;
    let mut input = store
        .input()
        .with_context(|| format!("cannot read {}", args.name))?;
    let (mut out, destination): (OutputStream, String) = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            (Box::new(FlushOnClose::new(file)), path.display().to_string())
        }
        None => (Box::new(FlushOnClose::new(io::stdout())), "stdout".to_string()),
    };
    io::copy(&mut input, &mut out)
        .with_context(|| format!("cannot copy {} to {destination}", args.name))?;
    out.close().with_context(|| format!("cannot write {destination}"))?;
    Ok(())
}

fn cmd_exists(config: &CliConfig, args: NameArgs) -> anyhow::Result<()> {
    let store = open_store(config, &args.name)?;
    if store.exists()? {
        println!("{} {}", args.name.bold(), "exists".green());
    } else {
        println!("{} {}", args.name.bold(), "missing".yellow());
    }
    Ok(())
}

fn cmd_rm(config: &CliConfig, args: NameArgs) -> anyhow::Result<()> {
    let store = open_store(config, &args.name)?;
    store
        .delete()
        .with_context(|| format!("cannot delete {}", args.name))?;
    println!("{} Removed {}", "✓".green().bold(), args.name.bold());
    Ok(())
}
