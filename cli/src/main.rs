use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use hp_engine::content::{builtin_character, builtin_characters};
use hp_engine::{Character, CharacterBuilder, DamageOutcome, Dice};
use serde::Serialize;
use std::{fs, path::PathBuf, str::FromStr};
use tracing_subscriber::EnvFilter;

#[derive(Args)]
struct Source {
    /// Built-in character id
    #[arg(long, default_value = "briv", conflicts_with = "file")]
    character: String,
    /// Path to a character definition JSON file
    #[arg(long)]
    file: Option<PathBuf>,
    /// RNG seed for reproducible hit point rolls (omit for a fresh roll)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Cmd {
    /// List the built-in character ids
    List,
    /// Build a character and print it as JSON
    Show {
        #[command(flatten)]
        source: Source,
        /// Pretty-print JSON
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Build a character, apply steps in order, print a JSON report
    Play {
        #[command(flatten)]
        source: Source,
        /// Steps: heal:N, temp:N or damage:TYPE:N
        #[arg(required = true)]
        steps: Vec<Step>,
    },
}

#[derive(Parser)]
#[command(name = "hp-cli")]
#[command(about = "Character hit point harness")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Heal(i32),
    Temp(i32),
    Damage(String, i32),
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let amount = |raw: &str| {
            raw.trim()
                .parse::<i32>()
                .map_err(|e| format!("bad amount '{}' in '{}': {}", raw, s, e))
        };
        match parts.as_slice() {
            [op, n] if op.eq_ignore_ascii_case("heal") => Ok(Step::Heal(amount(*n)?)),
            [op, n] if op.eq_ignore_ascii_case("temp") => Ok(Step::Temp(amount(*n)?)),
            [op, kind, n] if op.eq_ignore_ascii_case("damage") => {
                Ok(Step::Damage(kind.to_string(), amount(*n)?))
            }
            _ => Err(format!(
                "unrecognised step '{}', expected heal:N, temp:N or damage:TYPE:N",
                s
            )),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StepReport {
    step: String,
    current_hp: i32,
    temp_hp: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    damage: Option<DamageOutcome>,
}

#[derive(Serialize)]
struct PlayReport {
    steps: Vec<StepReport>,
    character: Character,
}

fn load(source: &Source) -> Result<Character> {
    let text = match &source.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read character JSON: {}", path.display()))?,
        None => match builtin_character(&source.character) {
            Some(text) => text.to_string(),
            None => bail!("no built-in character '{}'", source.character),
        },
    };
    let mut dice = match source.seed {
        Some(seed) => Dice::from_seed(seed),
        None => Dice::from_entropy(),
    };
    Ok(CharacterBuilder::from_json(&text, &mut dice)?)
}

fn apply(character: &mut Character, step: &Step) -> Result<StepReport> {
    let (label, damage) = match step {
        Step::Heal(n) => {
            character.heal(*n)?;
            (format!("heal:{}", n), None)
        }
        Step::Temp(n) => {
            character.add_temp_hp(*n)?;
            (format!("temp:{}", n), None)
        }
        Step::Damage(kind, n) => {
            let outcome = character.take_damage_named(kind, *n)?;
            (format!("damage:{}:{}", kind, n), Some(outcome))
        }
    };
    Ok(StepReport {
        step: label,
        current_hp: character.current_hp(),
        temp_hp: character.temp_hp(),
        damage,
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::List => {
            let mut ids: Vec<_> = builtin_characters().into_keys().collect();
            ids.sort_unstable();
            for id in ids {
                println!("{}", id);
            }
        }
        Cmd::Show { source, pretty } => {
            let character = load(&source)?;
            if pretty {
                println!("{}", serde_json::to_string_pretty(&character)?);
            } else {
                println!("{}", serde_json::to_string(&character)?);
            }
        }
        Cmd::Play { source, steps } => {
            let mut character = load(&source)?;
            let mut reports = Vec::with_capacity(steps.len());
            for step in &steps {
                let report = apply(&mut character, step)
                    .with_context(|| format!("step {:?} failed", step))?;
                reports.push(report);
            }
            let report = PlayReport {
                steps: reports,
                character,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
