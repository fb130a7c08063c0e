use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{
    AttributeDefinition, CandidateItem, ClothesType, ItemAttributeValue, RecommendationContext,
};
use crate::services;

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct CreateAttributeRequest {
    pub name: String,
    pub selectable_values: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AttributeResponse {
    pub id: Uuid,
    pub name: String,
    pub selectable_values: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&AttributeDefinition> for AttributeResponse {
    fn from(definition: &AttributeDefinition) -> Self {
        Self {
            id: definition.id,
            name: definition.name.clone(),
            selectable_values: definition.selectable_values.clone(),
            created_at: definition.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ItemAttributeInput {
    pub definition_id: Uuid,
    pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub image_url: Option<String>,
    pub category: ClothesType,
    #[serde(default)]
    pub attributes: Vec<ItemAttributeInput>,
}

#[derive(Debug, Serialize)]
pub struct ItemAttributeResponse {
    pub definition_id: Uuid,
    pub definition_name: String,
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: Uuid,
    pub name: String,
    pub image_url: Option<String>,
    pub category: ClothesType,
    pub attributes: Vec<ItemAttributeResponse>,
}

impl From<&CandidateItem> for ItemResponse {
    fn from(item: &CandidateItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            image_url: item.image_url.clone(),
            category: item.category,
            attributes: item
                .attributes
                .iter()
                .map(|attr| ItemAttributeResponse {
                    definition_id: attr.definition_id,
                    definition_name: attr.definition_name.clone(),
                    value: attr.value.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub adjusted_temperature: f64,
    pub is_precipitating: bool,
    pub current_month: u32,
}

#[derive(Debug, Serialize)]
pub struct OutfitResponse {
    /// Selected items in fixed category order
    pub items: Vec<ItemResponse>,
    pub used_fallback: bool,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get all attribute definitions
pub async fn get_attributes(State(state): State<AppState>) -> Json<Vec<AttributeResponse>> {
    let inner = state.inner.read().await;
    let attributes: Vec<AttributeResponse> =
        inner.attributes.values().map(AttributeResponse::from).collect();
    Json(attributes)
}

/// Create a new attribute definition
///
/// Definitions are immutable once created; the closed value set declared
/// here is what item values are validated against.
pub async fn create_attribute(
    State(state): State<AppState>,
    Json(request): Json<CreateAttributeRequest>,
) -> AppResult<(StatusCode, Json<AttributeResponse>)> {
    if request.name.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Attribute name must not be empty".to_string(),
        ));
    }
    if request.selectable_values.is_empty() {
        return Err(AppError::InvalidInput(
            "Attribute must declare at least one selectable value".to_string(),
        ));
    }

    let definition = AttributeDefinition::new(request.name, request.selectable_values);
    let response = AttributeResponse::from(&definition);

    let mut inner = state.inner.write().await;
    inner.attributes.insert(definition.id, definition);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Get all wardrobe items
pub async fn get_items(State(state): State<AppState>) -> Json<Vec<ItemResponse>> {
    let inner = state.inner.read().await;
    let items: Vec<ItemResponse> = inner.items.values().map(ItemResponse::from).collect();
    Json(items)
}

/// Create a new wardrobe item
///
/// This is the boundary where attribute values are resolved against the
/// catalog and checked against each definition's closed value set; scoring
/// downstream assumes the data is already consistent.
pub async fn create_item(
    State(state): State<AppState>,
    Json(request): Json<CreateItemRequest>,
) -> AppResult<(StatusCode, Json<ItemResponse>)> {
    let mut inner = state.inner.write().await;

    let mut attributes = Vec::with_capacity(request.attributes.len());
    for input in &request.attributes {
        let definition = inner.attributes.get(&input.definition_id).ok_or_else(|| {
            AppError::NotFound(format!("Attribute definition {}", input.definition_id))
        })?;

        if let Some(value) = &input.value {
            if !definition.allows(value) {
                return Err(AppError::InvalidInput(format!(
                    "Value '{}' is not selectable for attribute '{}'",
                    value, definition.name
                )));
            }
        }

        attributes.push(ItemAttributeValue {
            definition_id: definition.id,
            definition_name: definition.name.clone(),
            value: input.value.clone(),
        });
    }

    let item = CandidateItem::new(
        request.name,
        request.image_url,
        request.category,
        attributes,
    );
    let response = ItemResponse::from(&item);
    inner.items.insert(item.id, item);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Recommend a weather-appropriate outfit from the current wardrobe
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> AppResult<Json<OutfitResponse>> {
    let start = Instant::now();

    let context = RecommendationContext::new(
        request.adjusted_temperature,
        request.is_precipitating,
        request.current_month,
    )?;

    // Snapshot the wardrobe so the engine runs without holding the lock
    let wardrobe: Vec<CandidateItem> = {
        let inner = state.inner.read().await;
        inner.items.values().cloned().collect()
    };

    let mut rng = rand::thread_rng();
    let result = services::recommend(&wardrobe, &context, &mut rng);

    tracing::info!(
        wardrobe_size = wardrobe.len(),
        selected = result.items.len(),
        used_fallback = result.used_fallback,
        processing_time_ms = start.elapsed().as_millis(),
        "Recommendation completed"
    );

    Ok(Json(OutfitResponse {
        items: result.items.iter().map(ItemResponse::from).collect(),
        used_fallback: result.used_fallback,
    }))
}
