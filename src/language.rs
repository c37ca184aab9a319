//! Static language-code table shared by option validation and the translators.

/// Language codes accepted for `--source` and `--target`.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "zh-cn", "zh-tw", "fr", "de", "es", "it", "ja", "ko", "ru", "pt", "ar", "hi", "tr", "vi",
    "th", "id", "nl", "pl", "sv", "fi", "no", "da", "cs", "el", "he", "ro", "hu", "sk", "uk", "bg",
    "hr", "lt", "lv", "et", "sl", "sr", "ms", "ca", "fa", "ur", "bn", "ta", "te", "ml", "gu", "kn",
    "pa", "mr", "sw", "zu", "af", "eu", "gl", "is", "mt", "sq", "mk", "az", "hy", "ka", "be", "uz",
    "kk", "ky", "mn", "lo", "km", "my", "si", "ne", "ps", "sd", "am", "om", "so", "ti", "yi", "yo",
    "xh",
];

/// Source languages that get dictionary segmentation and pinyin.
const CHINESE_LANGUAGES: [&str; 2] = ["zh-cn", "zh-tw"];

/// Normalize user input the way the options form does: trim and lowercase.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_lowercase()
}

pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&code)
}

/// Whether `code` names a Chinese variant written in CJK ideographs.
pub fn is_chinese(code: &str) -> bool {
    CHINESE_LANGUAGES.contains(&code)
}

/// Convert language code to human-readable name for prompts and summaries.
pub fn language_code_to_name(code: &str) -> &'static str {
    let lowercase = code.to_lowercase();
    match lowercase.as_str() {
        "en" => "English",
        "zh-cn" => "Simplified Chinese",
        "zh-tw" => "Traditional Chinese",
        "es" => "Spanish",
        "fr" => "French",
        "de" => "German",
        "it" => "Italian",
        "pt" => "Portuguese",
        "ru" => "Russian",
        "ja" => "Japanese",
        "ko" => "Korean",
        "ar" => "Arabic",
        "hi" => "Hindi",
        "th" => "Thai",
        "vi" => "Vietnamese",
        "id" => "Indonesian",
        "ms" => "Malay",
        "nl" => "Dutch",
        "pl" => "Polish",
        "tr" => "Turkish",
        "uk" => "Ukrainian",
        "cs" => "Czech",
        "sv" => "Swedish",
        "da" => "Danish",
        "fi" => "Finnish",
        "no" => "Norwegian",
        "el" => "Greek",
        "he" => "Hebrew",
        "hu" => "Hungarian",
        "ro" => "Romanian",
        "bg" => "Bulgarian",
        "hr" => "Croatian",
        "sk" => "Slovak",
        "sl" => "Slovenian",
        "lt" => "Lithuanian",
        "lv" => "Latvian",
        "et" => "Estonian",
        "fa" => "Persian",
        "bn" => "Bengali",
        "ca" => "Catalan",
        "sr" => "Serbian",
        _ => "the requested language",
    }
}
