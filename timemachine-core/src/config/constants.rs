/// Base URLs for the inference providers
pub mod urls {
    pub const HUGGINGFACE_INFERENCE_BASE: &str = "https://router.huggingface.co/hf-inference";
    pub const OPENROUTER_API_BASE: &str = "https://openrouter.ai/api/v1";
    pub const DEFAULT_APP_URL: &str = "http://localhost:3000";
}

/// Headers OpenRouter uses to attribute traffic to the calling application
pub mod headers {
    pub const REFERER: &str = "HTTP-Referer";
    pub const TITLE: &str = "X-Title";
    pub const APP_TITLE: &str = "Prompt Time Machine";
}

/// Environment variables read once at startup
pub mod env_vars {
    /// Checked in order, first non-empty value wins
    pub const HUGGINGFACE_TOKEN: &[&str] = &[
        "HUGGINGFACE_API_KEY",
        "HF_ACCESS_TOKEN",
        "HUGGING_FACE_API_KEY",
    ];
    pub const OPENROUTER_API_KEY: &str = "OPENROUTER_API_KEY";
    pub const OPENROUTER_BASE_URL: &str = "OPENROUTER_BASE_URL";
    pub const HF_INFERENCE_BASE_URL: &str = "HF_INFERENCE_BASE_URL";
    pub const APP_URL: &str = "APP_URL";
}

/// Decoding defaults applied when a backend entry leaves them out
pub mod generation {
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;
    pub const DEFAULT_MAX_TOKENS: u32 = 70;
    pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 15;
    pub const MAX_TEMPERATURE: f32 = 2.0;
}

/// Chat roles as sent on the wire
pub mod message_roles {
    pub const SYSTEM: &str = "system";
    pub const USER: &str = "user";
}

/// Server defaults
pub mod server {
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 3000;
}

/// Configuration file locations
pub mod files {
    pub const CONFIG_FILE: &str = "timemachine.toml";
    pub const CONFIG_DIR: &str = ".timemachine";
}
