use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::slot::DefinitionSource;

#[derive(Debug, Default, Parser)]
#[command(name = "hp-server", version, about = "Serve one character's hit points over HTTP")]
pub struct Arguments {
    #[arg(short = 'c', long = "config", help = "Path to YAML configuration file")]
    pub config_file: Option<PathBuf>,

    #[arg(long, env = "HP_BIND", help = "Socket address to listen on")]
    pub bind: Option<SocketAddr>,

    #[arg(long, help = "Built-in character id")]
    pub character: Option<String>,

    #[arg(long, help = "Character definition JSON, overrides --character")]
    pub character_path: Option<PathBuf>,

    #[arg(long, help = "Seed the hit dice for reproducible rolls")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,

    #[serde(default = "default_character")]
    pub character: String,

    #[serde(default)]
    pub character_path: Option<PathBuf>,

    /// Absent means every load rolls from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_bind() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, 5000))
}

fn default_character() -> String {
    "briv".to_string()
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            character: default_character(),
            character_path: None,
            seed: None,
        }
    }
}

impl Configuration {
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!("Loading configuration from file: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_yaml(&text)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// File values first, then anything given on the command line.
    pub fn resolve(args: &Arguments) -> Result<Self> {
        let base = match &args.config_file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.overridden_by(args))
    }

    pub fn overridden_by(mut self, args: &Arguments) -> Self {
        if let Some(bind) = args.bind {
            self.bind = bind;
        }
        if let Some(character) = &args.character {
            self.character = character.clone();
        }
        if let Some(path) = &args.character_path {
            self.character_path = Some(path.clone());
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        self
    }

    pub fn source(&self) -> DefinitionSource {
        match &self.character_path {
            Some(path) => DefinitionSource::File(path.clone()),
            None => DefinitionSource::Builtin(self.character.clone()),
        }
    }
}
