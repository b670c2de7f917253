use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use hp_engine::Character;
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::ApiError;
use crate::slot::CharacterSlot;

#[derive(Debug, Deserialize)]
pub struct AmountQuery {
    pub value: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackQuery {
    pub damage_type: String,
    pub damage: i32,
}

pub fn router(slot: CharacterSlot) -> Router {
    Router::new()
        .route("/api/character", get(get_character))
        .route("/api/character/heal", post(heal))
        .route("/api/character/temp", post(add_temp))
        .route("/api/character/attack", post(attack))
        .route("/api/character/reload", post(reload))
        .layer(TraceLayer::new_for_http())
        .with_state(slot)
}

async fn get_character(State(slot): State<CharacterSlot>) -> Result<Json<Character>, ApiError> {
    Ok(Json(slot.get().await?))
}

async fn heal(
    State(slot): State<CharacterSlot>,
    Query(q): Query<AmountQuery>,
) -> Result<Json<Character>, ApiError> {
    let (character, restored) = slot.update(|c| c.heal(q.value)).await?;
    info!("{} healed {} (now {})", character.name, restored, character.current_hp());
    Ok(Json(character))
}

async fn add_temp(
    State(slot): State<CharacterSlot>,
    Query(q): Query<AmountQuery>,
) -> Result<Json<Character>, ApiError> {
    let (character, temp) = slot.update(|c| c.add_temp_hp(q.value)).await?;
    info!("{} temporary HP now {}", character.name, temp);
    Ok(Json(character))
}

async fn attack(
    State(slot): State<CharacterSlot>,
    Query(q): Query<AttackQuery>,
) -> Result<Json<Character>, ApiError> {
    let (character, outcome) = slot
        .update(|c| c.take_damage_named(&q.damage_type, q.damage))
        .await?;
    info!(
        "{} took {} {} (raw {}), now {} HP / {} temp",
        character.name,
        outcome.effective,
        outcome.damage_type,
        outcome.raw,
        character.current_hp(),
        character.temp_hp()
    );
    Ok(Json(character))
}

async fn reload(State(slot): State<CharacterSlot>) -> Result<Json<Character>, ApiError> {
    Ok(Json(slot.reload().await?))
}
