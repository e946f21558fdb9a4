use std::{
    env, fmt,
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use log::debug;
use serde::{Deserialize, Serialize};

use bonhashlib::{hash::BonHasher, key::HashKey};

const PKG_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => f.write_str("debug"),
            Self::Trace => f.write_str("trace"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct Config {
    key: Option<String>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut p| {
        p.push(format!("{}.conf", PKG_NAME));
        p
    })
}

fn load_config_file(user_path: Option<&Path>) -> Result<Option<Config>> {
    let default_path = default_config_path();
    let path = user_path.or_else(|| default_path.as_deref());

    match path {
        Some(p) => {
            let file = match File::open(p) {
                Ok(f) => f,
                Err(e) => {
                    return if e.kind() == io::ErrorKind::NotFound {
                        Ok(None)
                    } else {
                        Err(e).context(format!("Could not open file: {:?}", p))
                    };
                }
            };

            let config = serde_json::from_reader(file)
                .context(format!("Could not parse config file: {:?}", p))?;

            Ok(Some(config))
        }
        None => Ok(None),
    }
}

/// Load the hash key from the following list in order:
/// * User-supplied key file path
/// * Command line argument / environment variable (hex-encoded)
/// * Config file (hex-encoded)
fn load_key(opts: &Opts, config: &Option<Config>) -> Result<HashKey> {
    if let Some(path) = &opts.key_file {
        let raw = fs::read(path)
            .context(format!("Could not read key file: {:?}", path))?;

        return Ok(HashKey::from_slice(&raw)?);
    }

    let encoded = opts.key
        .as_ref()
        .or_else(|| config.as_ref().and_then(|c| c.key.as_ref()))
        .ok_or_else(|| anyhow!("No key argument or variable specified"))?;
    let raw = hex::decode(encoded)
        .context("Key is not a valid hex string")?;

    Ok(HashKey::from_slice(&raw)?)
}

/// A small tool for computing the bonhash digest of a file.
#[derive(Debug, Parser)]
#[command(version)]
struct Opts {
    /// Path to the input file
    ///
    /// The file is read in full before any output is produced. Inputs smaller
    /// than 191 bytes are rejected.
    input: PathBuf,
    /// Hash key as an 84-character hex string
    ///
    /// The decoded key must be exactly 42 bytes. If unspecified, the key is
    /// loaded from the `BONHASH_KEY` environment variable, followed by the
    /// `key` config file variable.
    #[arg(short, long, env = "BONHASH_KEY")]
    key: Option<String>,
    /// Path to a file containing the raw 42-byte key
    ///
    /// Takes precedence over every other key source.
    #[arg(short = 'K', long)]
    key_file: Option<PathBuf>,
    /// Set logging verbosity
    ///
    /// By default, no log messages are printed out. This option overrides the
    /// RUST_LOG environment variable, which would otherwise be respected if
    /// this option was not passed.
    #[arg(long, value_enum)]
    loglevel: Option<LogLevel>,
    /// Config file path
    ///
    /// If unspecified, the default config file path is used. The config file
    /// can store the hash key to avoid needing to set environment variables
    /// or pass it as a command-line argument.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    if let Some(l) = opts.loglevel {
        env::set_var("RUST_LOG", format!("{}={},bonhashlib={}", PKG_NAME, l, l));
    }

    env_logger::init();

    debug!("Arguments: {:#?}", opts);

    let config = load_config_file(opts.config.as_deref())?;
    let key = load_key(&opts, &config)?;

    let data = fs::read(&opts.input)
        .context(format!("Could not read file: {:?}", opts.input))?;
    debug!("Read {} bytes from {:?}", data.len(), opts.input);

    let hasher = BonHasher::new(key, data)?;
    println!("{}", hasher.digest());

    Ok(())
}
