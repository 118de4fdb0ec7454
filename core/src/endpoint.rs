//! The endpoint table: every remote operation as a fixed
//! `(method, path template, schema)` triple.
//!
//! Path templates use `{name}` placeholders filled positionally by
//! `EndpointDescriptor::render_path`. Each parameter is percent-encoded as a
//! single path segment.

use std::borrow::Cow;

use crate::error::ArariaError;
use crate::http::HttpMethod;
use crate::schema::Schema;
use crate::schemas;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    pub name: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub schema: Option<&'static Schema>,
}

impl EndpointDescriptor {
    /// Number of `{...}` placeholders in the path template.
    pub fn param_count(&self) -> usize {
        self.path.matches('{').count()
    }

    /// Fill the path template with `params`, in order.
    pub fn render_path(&self, params: &[&str]) -> Result<String, ArariaError> {
        let expected = self.param_count();
        if params.len() != expected {
            return Err(ArariaError::PathParams {
                endpoint: self.name,
                expected,
                actual: params.len(),
            });
        }

        let mut params = params.iter();
        let segments: Vec<Cow<'_, str>> = self
            .path
            .split('/')
            .map(|segment| {
                if segment.starts_with('{') && segment.ends_with('}') {
                    // Counted above, so every placeholder has a value.
                    params
                        .next()
                        .map_or(Cow::Borrowed(""), |value| urlencoding::encode(value))
                } else {
                    Cow::Borrowed(segment)
                }
            })
            .collect();
        Ok(segments.join("/"))
    }
}

macro_rules! endpoints {
    (@schema) => { None };
    (@schema $schema:path) => { Some(&$schema) };
    ($(
        $(#[$meta:meta])*
        $variant:ident => $method:ident $path:literal $(, $schema:path)?;
    )*) => {
        /// A remote operation exposed by the Araria API.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Endpoint {
            $($(#[$meta])* $variant,)*
        }

        impl Endpoint {
            pub const ALL: &'static [Endpoint] = &[$(Endpoint::$variant,)*];

            pub fn descriptor(self) -> EndpointDescriptor {
                match self {
                    $(Endpoint::$variant => EndpointDescriptor {
                        name: stringify!($variant),
                        method: HttpMethod::$method,
                        path: $path,
                        schema: endpoints!(@schema $($schema)?),
                    },)*
                }
            }
        }
    };
}

endpoints! {
    ImgGenerate => Post "img/generate", schemas::IMAGE_GENERATE;
    UpscaleImage => Post "img/upscale", schemas::UPSCALE;
    RemoveBackground => Post "img/bkg-removal", schemas::BACKGROUND_REMOVAL;
    DecorPrimeWalls => Post "img/prime-walls", schemas::DECOR_PRIME_WALLS;
    /// Virtual staging of an interior photo.
    DecorImage => Post "img/virtual-staging", schemas::DECOR_IMAGE;
    GetModels => Get "models";
    NuvemshopConnect => Post "nuvemshop/connect", schemas::NUVEMSHOP_CONNECT;
    NuvemshopUser => Get "nuvemshop/user/{storeId}/{token}";
    NuvemshopChat => Post "nuvemshop/chat", schemas::CHAT;
    NuvemshopInitChatSession => Post "nuvemshop/chat/init";
    NuvemshopGetSessionMessages => Get "nuvemshop/chat/session/{id}";
    NuvemshopDeleteSession => Delete "nuvemshop/chat/session/{id}";
    /// Multipart upload; the body is a file, not JSON.
    UploadFile => Post "files/upload";
    DeleteFile => Delete "files/{id}";
    GetFiles => Get "files";
    GetFile => Get "files/{id}";
    VisionImageToText => Post "vision/img-to-text", schemas::VISION_IMAGE_TO_TEXT;
    PromptGenerate => Post "llm/prompt-generate", schemas::PROMPT_GENERATE;
    GetFashionVideos => Get "fashion-video";
    GetFashionVideo => Get "fashion-video/{id}";
    CreateFashionVideo => Post "fashion-video", schemas::FASHION_VIDEO;
    CreateFashionVideoTask => Post "fashion-video/generate/{id}";
    UpdateFashionVideo => Put "fashion-video/{id}", schemas::FASHION_VIDEO;
    FinalizeFashionVideo => Post "fashion-video/finalize/{id}";
    CreateFashionTryon => Post "fashion-tryon", schemas::FASHION_TRYON;
    GetFashionTryons => Get "fashion-tryon";
    GetFashionTryon => Get "fashion-tryon/{id}";
    CreateFashionModel => Post "fashion-model", schemas::FASHION_MODEL;
    RegenerateFashionModel => Post "fashion-model/regenerate/{id}";
    GetFashionModels => Get "fashion-model";
    GetFashionModel => Get "fashion-model/{id}";
    DeleteFashionModel => Delete "fashion-model/{id}";
    GetImageTask => Get "img/task/{id}";
    /// Midjourney-style task submission.
    CreateImageTask => Post "img/midjourney", schemas::IMAGE_TASK;
    GenerateFashionModelPrompt => Post "fashion-model/prompt", schemas::FASHION_MODEL_PROMPT;
    LoadRandomFashionModelPrompt => Get "fashion-model/prompt/random";
}
