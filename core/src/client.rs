//! Typed facade over the dispatcher, one method per Araria endpoint.
//!
//! # Design
//! Every method serializes its typed request, then hands the endpoint, path
//! parameters and payload to the shared `Dispatcher`, which validates and
//! sends it. Methods hold no logic of their own. Workflow state (chat
//! sessions, video and try-on progress) lives on the server, and the client
//! is safe to share between tasks.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::dispatcher::{Dispatcher, Payload};
use crate::endpoint::Endpoint;
use crate::error::{ArariaError, ArariaResult};
use crate::hook::RequestHook;
use crate::http::FileUpload;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{
    BackgroundRemovalRequest, ChatRequest, DecorImageRequest, DecorPrimeWallsRequest,
    FashionModelPromptRequest, FashionModelRequest, FashionTryonRequest, FashionVideoRequest,
    FashionVideoResponse, ImageGenerateRequest, ImageTaskRequest, NuvemshopConnectRequest,
    PromptGenerateRequest, UpscaleRequest, VisionImageToTextRequest,
};

#[derive(Debug)]
pub struct ArariaClient {
    dispatcher: Dispatcher,
}

impl ArariaClient {
    /// Client over the default `reqwest` transport.
    pub fn new(config: ClientConfig) -> ArariaResult<Self> {
        let transport = ReqwestTransport::new().map_err(|e| ArariaError::Config(e.to_string()))?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let dispatcher = Dispatcher::new(&config, transport);
        debug!(
            base_url = dispatcher.base_url(),
            profile = ?config.profile(),
            "created ArariaClient"
        );
        Self { dispatcher }
    }

    #[must_use]
    pub fn with_hook(self, hook: Arc<dyn RequestHook>) -> Self {
        Self {
            dispatcher: self.dispatcher.with_hook(hook),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Untyped entry point: validate `payload` against the endpoint's schema
    /// and send it.
    pub async fn call(
        &self,
        endpoint: Endpoint,
        params: &[&str],
        payload: Option<Value>,
    ) -> ArariaResult<Value> {
        let payload = payload.map_or(Payload::None, Payload::Json);
        self.dispatcher.dispatch(endpoint, params, payload).await
    }

    async fn send<T: DeserializeOwned>(&self, endpoint: Endpoint, params: &[&str]) -> ArariaResult<T> {
        self.dispatcher.dispatch(endpoint, params, Payload::None).await
    }

    async fn send_json<B, T>(&self, endpoint: Endpoint, params: &[&str], body: &B) -> ArariaResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let value =
            serde_json::to_value(body).map_err(|e| ArariaError::Serialization(e.to_string()))?;
        self.dispatcher
            .dispatch(endpoint, params, Payload::Json(value))
            .await
    }

    // --- images ---

    pub async fn img_generate(&self, request: &ImageGenerateRequest) -> ArariaResult<Value> {
        self.send_json(Endpoint::ImgGenerate, &[], request).await
    }

    pub async fn upscale_image(&self, request: &UpscaleRequest) -> ArariaResult<Value> {
        self.send_json(Endpoint::UpscaleImage, &[], request).await
    }

    pub async fn remove_background(&self, request: &BackgroundRemovalRequest) -> ArariaResult<Value> {
        self.send_json(Endpoint::RemoveBackground, &[], request).await
    }

    pub async fn generate_decor_prime_walls(
        &self,
        request: &DecorPrimeWallsRequest,
    ) -> ArariaResult<Value> {
        self.send_json(Endpoint::DecorPrimeWalls, &[], request).await
    }

    /// Virtual staging: furnish an interior photo from a prompt.
    pub async fn generate_decor_image(&self, request: &DecorImageRequest) -> ArariaResult<Value> {
        self.send_json(Endpoint::DecorImage, &[], request).await
    }

    pub async fn get_models(&self) -> ArariaResult<Value> {
        self.send(Endpoint::GetModels, &[]).await
    }

    pub async fn get_image_task(&self, id: &str) -> ArariaResult<Value> {
        self.send(Endpoint::GetImageTask, &[id]).await
    }

    pub async fn create_image_task(&self, request: &ImageTaskRequest) -> ArariaResult<Value> {
        self.send_json(Endpoint::CreateImageTask, &[], request).await
    }

    // --- nuvemshop ---

    /// Link a Nuvemshop store to an Araria account.
    pub async fn nuvemshop_connect(&self, request: &NuvemshopConnectRequest) -> ArariaResult<Value> {
        self.send_json(Endpoint::NuvemshopConnect, &[], request).await
    }

    pub async fn nuvemshop_user(&self, store_id: u64, token: &str) -> ArariaResult<Value> {
        let store_id = store_id.to_string();
        self.send(Endpoint::NuvemshopUser, &[store_id.as_str(), token]).await
    }

    pub async fn nuvemshop_chat(&self, request: &ChatRequest) -> ArariaResult<Value> {
        self.send_json(Endpoint::NuvemshopChat, &[], request).await
    }

    pub async fn nuvemshop_init_chat_session(&self) -> ArariaResult<Value> {
        self.send(Endpoint::NuvemshopInitChatSession, &[]).await
    }

    pub async fn nuvemshop_get_session_messages(&self, session_id: &str) -> ArariaResult<Value> {
        self.send(Endpoint::NuvemshopGetSessionMessages, &[session_id])
            .await
    }

    pub async fn nuvemshop_delete_session(&self, session_id: &str) -> ArariaResult<Value> {
        self.send(Endpoint::NuvemshopDeleteSession, &[session_id]).await
    }

    // --- files ---

    /// Upload a file as multipart form data under the `file` field.
    pub async fn upload_file(&self, file: FileUpload) -> ArariaResult<Value> {
        self.dispatcher
            .dispatch(Endpoint::UploadFile, &[], Payload::File(file))
            .await
    }

    pub async fn delete_file(&self, id: &str) -> ArariaResult<Value> {
        self.send(Endpoint::DeleteFile, &[id]).await
    }

    pub async fn get_files(&self) -> ArariaResult<Value> {
        self.send(Endpoint::GetFiles, &[]).await
    }

    pub async fn get_file(&self, id: &str) -> ArariaResult<Value> {
        self.send(Endpoint::GetFile, &[id]).await
    }

    // --- vision / llm ---

    pub async fn vision_image_to_text(
        &self,
        request: &VisionImageToTextRequest,
    ) -> ArariaResult<String> {
        self.send_json(Endpoint::VisionImageToText, &[], request).await
    }

    pub async fn prompt_generate(&self, request: &PromptGenerateRequest) -> ArariaResult<String> {
        self.send_json(Endpoint::PromptGenerate, &[], request).await
    }

    // --- fashion video ---

    pub async fn get_fashion_videos(&self) -> ArariaResult<Value> {
        self.send(Endpoint::GetFashionVideos, &[]).await
    }

    pub async fn get_fashion_video(&self, id: &str) -> ArariaResult<FashionVideoResponse> {
        self.send(Endpoint::GetFashionVideo, &[id]).await
    }

    pub async fn create_fashion_video(&self, request: &FashionVideoRequest) -> ArariaResult<Value> {
        self.send_json(Endpoint::CreateFashionVideo, &[], request).await
    }

    /// Queue video generation for an existing fashion video.
    pub async fn create_fashion_video_task(&self, fashion_video_id: &str) -> ArariaResult<Value> {
        self.send(Endpoint::CreateFashionVideoTask, &[fashion_video_id])
            .await
    }

    pub async fn update_fashion_video(
        &self,
        fashion_video_id: &str,
        request: &FashionVideoRequest,
    ) -> ArariaResult<Value> {
        self.send_json(Endpoint::UpdateFashionVideo, &[fashion_video_id], request)
            .await
    }

    pub async fn finalize_fashion_video(&self, fashion_video_id: &str) -> ArariaResult<Value> {
        self.send(Endpoint::FinalizeFashionVideo, &[fashion_video_id])
            .await
    }

    // --- fashion tryon ---

    pub async fn create_fashion_tryon(&self, request: &FashionTryonRequest) -> ArariaResult<Value> {
        self.send_json(Endpoint::CreateFashionTryon, &[], request).await
    }

    pub async fn get_fashion_tryons(&self) -> ArariaResult<Value> {
        self.send(Endpoint::GetFashionTryons, &[]).await
    }

    pub async fn get_fashion_tryon(&self, id: &str) -> ArariaResult<Value> {
        self.send(Endpoint::GetFashionTryon, &[id]).await
    }

    // --- fashion model ---

    pub async fn create_fashion_model(&self, request: &FashionModelRequest) -> ArariaResult<Value> {
        self.send_json(Endpoint::CreateFashionModel, &[], request).await
    }

    pub async fn regenerate_fashion_model(&self, id: &str) -> ArariaResult<Value> {
        self.send(Endpoint::RegenerateFashionModel, &[id]).await
    }

    pub async fn get_fashion_models(&self) -> ArariaResult<Value> {
        self.send(Endpoint::GetFashionModels, &[]).await
    }

    pub async fn get_fashion_model(&self, id: &str) -> ArariaResult<Value> {
        self.send(Endpoint::GetFashionModel, &[id]).await
    }

    pub async fn delete_fashion_model(&self, id: &str) -> ArariaResult<Value> {
        self.send(Endpoint::DeleteFashionModel, &[id]).await
    }

    pub async fn generate_fashion_model_prompt(
        &self,
        request: &FashionModelPromptRequest,
    ) -> ArariaResult<Value> {
        self.send_json(Endpoint::GenerateFashionModelPrompt, &[], request)
            .await
    }

    pub async fn load_random_fashion_model_prompt(&self) -> ArariaResult<Value> {
        self.send(Endpoint::LoadRandomFashionModelPrompt, &[]).await
    }
}
