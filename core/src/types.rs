//! Request and response DTOs for the Araria API.
//!
//! # Design
//! Field names follow the wire format exactly, which mixes camelCase,
//! snake_case and a few upper-case acronyms, so most renames are explicit.
//! Optional fields are skipped when `None`, since the API distinguishes an
//! absent field from `null`. Fields whose effect is unknown on this side
//! (`custom_task_uuid`, `clip_skip`, image-task `input`) are carried as
//! opaque values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageGenerateRequest {
    pub positive_prompt: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    #[serde(rename = "checkNSFW", skip_serializing_if = "Option::is_none")]
    pub check_nsfw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(rename = "CFGScale", skip_serializing_if = "Option::is_none")]
    pub cfg_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_prompt_weighting: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_weighting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_cost: Option<bool>,
    #[serde(rename = "customTaskUUID", skip_serializing_if = "Option::is_none")]
    pub custom_task_uuid: Option<String>,
}

impl ImageGenerateRequest {
    pub fn new(positive_prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            positive_prompt: positive_prompt.into(),
            model: model.into(),
            ..Self::default()
        }
    }
}

/// Shared by upscaling and background removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrlRequest {
    pub image_url: String,
}

pub type UpscaleRequest = ImageUrlRequest;
pub type BackgroundRemovalRequest = ImageUrlRequest;

/// Shared by prime walls and virtual staging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorRequest {
    pub prompt: String,
}

pub type DecorPrimeWallsRequest = DecorRequest;
pub type DecorImageRequest = DecorRequest;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub temperature: f64,
    pub user: i64,
    pub access_token: String,
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NuvemshopConnectRequest {
    pub store_id: u64,
    pub araria_api_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisionImageToTextRequest {
    pub image: String,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptGenerateRequest {
    pub system_prompt: String,
    pub description: String,
    pub model: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FashionVideoRequest {
    pub input_images: Vec<String>,
    pub vision_descriptions: Vec<String>,
    pub prompts: Vec<String>,
    pub theme: String,
    pub dimension: String,
    pub videos_per_image: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_video_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_start_at: Option<f64>,
}

/// A fashion video as stored by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FashionVideoResponse {
    pub id: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    pub input_images: Vec<String>,
    pub vision_descriptions: Vec<String>,
    pub prompts: Vec<String>,
    pub theme: String,
    pub dimension: String,
    pub videos_per_image: f64,
    pub video_urls: Vec<String>,
    pub selected_video_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_output_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_output_file_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_start_at: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watermark: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FashionTryonRequest {
    #[serde(rename = "modelId")]
    pub model_id: String,
    pub model: String,
    pub task_type: String,
    pub input: FashionTryonInput,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FashionTryonInput {
    pub model_input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dress_input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_input: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FashionModelRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub age: String,
    pub gender: String,
    pub body_type: String,
    pub ethnicity: String,
    pub style: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FashionModelPromptRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    pub prompt: String,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageTaskRequest {
    pub model: String,
    pub task_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
}
