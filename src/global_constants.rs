pub const APPLICATION_NAME: &str = "ProLens AI";
pub const APPLICATION_VERSION_LABEL: &str = "v1.0 BETA";
pub const CONFIG_DIRECTORY_NAME: &str = "prolens";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_ORCHESTRATOR: &str = "[ORCHESTRATOR]";
pub const LOG_TAG_CAPTURE: &str = "[CAPTURE]";
pub const LOG_TAG_ENCODER: &str = "[ENCODER]";
pub const LOG_TAG_GEMINI: &str = "[GEMINI]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";

pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_API_KEY_FALLBACK: &str = "API_KEY";

pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_RESPONSE_LANGUAGE: &str = "Traditional Chinese (Hong Kong/Cantonese style)";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 60;
pub const DEFAULT_MAX_IMAGE_DIMENSION: u32 = 2048;

pub const UPLOAD_MIME_TYPE: &str = "image/jpeg";
pub const UPLOAD_JPEG_QUALITY: u8 = 85;
pub const DATA_URL_BASE64_MARKER: &str = "base64,";

pub const API_KEY_HEADER: &str = "x-goog-api-key";
pub const RESPONSE_MIME_TYPE: &str = "application/json";

pub const SYSTEM_INSTRUCTION: &str = "You are a world-class photography instructor. Analyze scenes for lighting conditions, subject movement, and depth of field requirements. Provide practical, professional advice.";

pub const USER_PROMPT_TEMPLATE: &str = "Analyze this image as a professional photographer. Suggest the optimal camera settings (ISO, Aperture, Shutter Speed, etc.) if I were to take this shot with a professional DSLR or Mirrorless camera to achieve the best quality. Provide the response in {language}.";

pub const USER_MESSAGE_ANALYSIS_FAILED: &str = "分析失敗，請檢查網絡或重試。";
pub const USER_MESSAGE_ERROR_TITLE: &str = "出錯了";
pub const USER_MESSAGE_RETRY: &str = "試多次";
pub const USER_MESSAGE_ANALYZING: &str = "ANALYZING SCENE...";
pub const USER_MESSAGE_ANALYZING_DETAIL: &str = "正在計算最佳曝光值";
pub const USER_MESSAGE_IDLE_HINT: &str = "用手機影低現場環境，即時獲取專業單反相機設定建議";
pub const USER_MESSAGE_SETTINGS_TITLE: &str = "建議設定";
pub const USER_MESSAGE_EXPLANATION_TITLE: &str = "📸 分析結果";
pub const USER_MESSAGE_TIPS_TITLE: &str = "💡 拍攝貼士";
pub const USER_MESSAGE_TAKE_ANOTHER: &str = "影過另一張";
pub const USER_MESSAGE_MISSING_VALUE: &str = "-";

pub const SESSION_PROMPT_IMAGE_PATH: &str = "Image path (q to quit): ";
pub const SESSION_PROMPT_CONTINUE: &str = "Press Enter to continue (q to quit): ";
pub const SESSION_QUIT_COMMAND: &str = "q";

pub const STARTUP_BANNER: &str = r#"
╔════════════════════════════════════════════════════════╗
║  ProLens AI                                  v1.0 BETA ║
║                                                        ║
║  Give me a photo of the scene and I will suggest       ║
║  ISO, aperture, shutter speed, white balance and       ║
║  focal length for a professional camera.               ║
║                                                        ║
║  Powered by Google Gemini                              ║
╚════════════════════════════════════════════════════════╝
"#;
