//! The single cached character.
//!
//! Every request takes the slot lock for its whole load, validate, mutate and
//! snapshot sequence, so two requests never interleave on the same state.

use std::path::PathBuf;
use std::sync::Arc;

use hp_engine::content::builtin_character;
use hp_engine::{Character, CharacterBuilder, Dice, EngineError};
use tokio::sync::Mutex;
use tracing::info;

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionSource {
    Builtin(String),
    File(PathBuf),
}

impl DefinitionSource {
    pub async fn read(&self) -> Result<String, ApiError> {
        match self {
            DefinitionSource::Builtin(id) => builtin_character(id)
                .map(str::to_string)
                .ok_or_else(|| ApiError::Load(format!("no built-in character '{}'", id))),
            DefinitionSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|e| ApiError::Load(format!("{}: {}", path.display(), e))),
        }
    }
}

struct SlotState {
    dice: Dice,
    character: Option<Character>,
}

#[derive(Clone)]
pub struct CharacterSlot {
    source: Arc<DefinitionSource>,
    state: Arc<Mutex<SlotState>>,
}

impl CharacterSlot {
    pub fn new(source: DefinitionSource, seed: Option<u64>) -> Self {
        let dice = match seed {
            Some(seed) => Dice::from_seed(seed),
            None => Dice::from_entropy(),
        };
        Self {
            source: Arc::new(source),
            state: Arc::new(Mutex::new(SlotState {
                dice,
                character: None,
            })),
        }
    }

    /// Current character, loading it on first use.
    pub async fn get(&self) -> Result<Character, ApiError> {
        let mut state = self.state.lock().await;
        let character = self.ensure_loaded(&mut state).await?;
        Ok(character.clone())
    }

    /// Run one engine operation against the cached character. Engine operations
    /// validate before mutating, so an error leaves the slot unchanged.
    pub async fn update<T>(
        &self,
        op: impl FnOnce(&mut Character) -> Result<T, EngineError>,
    ) -> Result<(Character, T), ApiError> {
        let mut state = self.state.lock().await;
        let character = self.ensure_loaded(&mut state).await?;
        let result = op(character)?;
        Ok((character.clone(), result))
    }

    /// Rebuild from the definition, rolling hit points again.
    pub async fn reload(&self) -> Result<Character, ApiError> {
        let mut state = self.state.lock().await;
        let character = self.load(&mut state.dice).await?;
        Ok(state.character.insert(character).clone())
    }

    async fn ensure_loaded<'a>(
        &self,
        state: &'a mut SlotState,
    ) -> Result<&'a mut Character, ApiError> {
        let character = match state.character.take() {
            Some(c) => c,
            None => self.load(&mut state.dice).await?,
        };
        Ok(state.character.insert(character))
    }

    async fn load(&self, dice: &mut Dice) -> Result<Character, ApiError> {
        let text = self.source.read().await?;
        let character = CharacterBuilder::from_json(&text, dice)?;
        info!(
            "Loaded {} ({} / {} HP) from {:?}",
            character.name,
            character.current_hp(),
            character.max_hp(),
            self.source
        );
        Ok(character)
    }
}
