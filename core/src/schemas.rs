//! Request shapes accepted by the Araria API, keyed by wire field name.

use crate::schema::{FieldKind, FieldSpec, Schema};

const STRINGS: FieldKind = FieldKind::Array(&FieldKind::String);

pub static IMAGE_GENERATE: Schema = Schema {
    name: "ImageGenerateRequest",
    fields: &[
        FieldSpec::required("positivePrompt", FieldKind::String),
        FieldSpec::required("model", FieldKind::String),
        FieldSpec::optional("scheduler", FieldKind::String),
        FieldSpec::optional("negativePrompt", FieldKind::String),
        FieldSpec::optional("seed", FieldKind::Number),
        FieldSpec::optional("steps", FieldKind::Number),
        FieldSpec::optional("checkNSFW", FieldKind::Boolean),
        FieldSpec::optional("seedImage", FieldKind::String),
        FieldSpec::optional("maskImage", FieldKind::String),
        FieldSpec::optional("strength", FieldKind::Number),
        FieldSpec::optional("height", FieldKind::Number),
        FieldSpec::optional("width", FieldKind::Number),
        FieldSpec::optional("CFGScale", FieldKind::Number),
        FieldSpec::optional("clipSkip", FieldKind::Number),
        FieldSpec::optional("usePromptWeighting", FieldKind::Boolean),
        FieldSpec::optional("promptWeighting", FieldKind::String),
        FieldSpec::optional("numberResults", FieldKind::Number),
        FieldSpec::optional("outputType", FieldKind::String),
        FieldSpec::optional("outputFormat", FieldKind::String),
        FieldSpec::optional("includeCost", FieldKind::Boolean),
        FieldSpec::optional("customTaskUUID", FieldKind::String),
    ],
};

pub static UPSCALE: Schema = Schema {
    name: "UpscaleRequest",
    fields: &[FieldSpec::required("image_url", FieldKind::String)],
};

pub static BACKGROUND_REMOVAL: Schema = Schema {
    name: "BackgroundRemovalRequest",
    fields: &[FieldSpec::required("image_url", FieldKind::String)],
};

pub static DECOR_PRIME_WALLS: Schema = Schema {
    name: "DecorPrimeWallsRequest",
    fields: &[FieldSpec::required("prompt", FieldKind::String)],
};

pub static DECOR_IMAGE: Schema = Schema {
    name: "DecorImageRequest",
    fields: &[FieldSpec::required("prompt", FieldKind::String)],
};

pub static CHAT: Schema = Schema {
    name: "ChatRequest",
    fields: &[
        FieldSpec::required("model", FieldKind::String),
        FieldSpec::required("prompt", FieldKind::String),
        FieldSpec::required("stream", FieldKind::Boolean),
        FieldSpec::required("temperature", FieldKind::Number),
        FieldSpec::required("user", FieldKind::Number),
        FieldSpec::required("access_token", FieldKind::String),
        FieldSpec::required("sessionId", FieldKind::String),
    ],
};

pub static FASHION_VIDEO: Schema = Schema {
    name: "FashionVideoRequest",
    fields: &[
        FieldSpec::required("inputImages", STRINGS),
        FieldSpec::required("visionDescriptions", STRINGS),
        FieldSpec::required("prompts", STRINGS),
        FieldSpec::required("theme", FieldKind::String),
        FieldSpec::required("dimension", FieldKind::String),
        FieldSpec::required("videosPerImage", FieldKind::Number),
        FieldSpec::optional("videoUrls", STRINGS),
        FieldSpec::optional("selectedVideoUrls", STRINGS),
        FieldSpec::optional("bgColor", FieldKind::String),
        FieldSpec::optional("musicPath", FieldKind::String),
        FieldSpec::optional("logoPath", FieldKind::String),
        FieldSpec::optional("audioStartAt", FieldKind::Number),
    ],
};

pub static NUVEMSHOP_CONNECT: Schema = Schema {
    name: "NuvemshopConnectRequest",
    fields: &[
        FieldSpec::required("storeId", FieldKind::Number),
        FieldSpec::required("arariaApiKey", FieldKind::String),
    ],
};

pub static VISION_IMAGE_TO_TEXT: Schema = Schema {
    name: "VisionImageToTextRequest",
    fields: &[
        FieldSpec::required("image", FieldKind::String),
        FieldSpec::required("model", FieldKind::String),
    ],
};

pub static PROMPT_GENERATE: Schema = Schema {
    name: "PromptGenerateRequest",
    fields: &[
        FieldSpec::required("systemPrompt", FieldKind::String),
        FieldSpec::required("description", FieldKind::String),
        FieldSpec::required("model", FieldKind::String),
    ],
};

static TRYON_INPUT: Schema = Schema {
    name: "FashionTryonInput",
    fields: &[
        FieldSpec::required("model_input", FieldKind::String),
        FieldSpec::optional("dress_input", FieldKind::String),
        FieldSpec::optional("upper_input", FieldKind::String),
        FieldSpec::optional("lower_input", FieldKind::String),
    ],
};

pub static FASHION_TRYON: Schema = Schema {
    name: "FashionTryonRequest",
    fields: &[
        FieldSpec::required("modelId", FieldKind::String),
        FieldSpec::required("model", FieldKind::String),
        FieldSpec::required("task_type", FieldKind::String),
        FieldSpec::required("input", FieldKind::Object(&TRYON_INPUT)),
    ],
};

pub static FASHION_MODEL: Schema = Schema {
    name: "FashionModelRequest",
    fields: &[
        FieldSpec::required("name", FieldKind::String),
        FieldSpec::optional("description", FieldKind::String),
        FieldSpec::required("age", FieldKind::String),
        FieldSpec::required("gender", FieldKind::String),
        FieldSpec::required("bodyType", FieldKind::String),
        FieldSpec::required("ethnicity", FieldKind::String),
        FieldSpec::required("style", FieldKind::String),
        FieldSpec::optional("prompt", FieldKind::String),
    ],
};

pub static FASHION_MODEL_PROMPT: Schema = Schema {
    name: "FashionModelPromptRequest",
    fields: &[
        FieldSpec::optional("systemPrompt", FieldKind::String),
        FieldSpec::required("prompt", FieldKind::String),
        FieldSpec::required("model", FieldKind::String),
    ],
};

pub static IMAGE_TASK: Schema = Schema {
    name: "ImageTaskRequest",
    fields: &[
        FieldSpec::required("model", FieldKind::String),
        FieldSpec::required("task_type", FieldKind::String),
        FieldSpec::optional("input", FieldKind::Any),
    ],
};
