//! Language tag to English display name mapping

/// Resolve an ISO 639-1 style tag to an English language name
pub fn english_name(tag: &str) -> Option<&'static str> {
    match tag {
        "aa" => Some("Afar"),
        "af" => Some("Afrikaans"),
        "am" => Some("Amharic"),
        "ar" => Some("Arabic"),
        "as" => Some("Assamese"),
        "az" => Some("Azerbaijani"),
        "be" => Some("Belarusian"),
        "bg" => Some("Bulgarian"),
        "bn" => Some("Bengali"),
        "bs" => Some("Bosnian"),
        "ca" => Some("Catalan"),
        "cs" => Some("Czech"),
        "cy" => Some("Welsh"),
        "da" => Some("Danish"),
        "de" => Some("German"),
        "el" => Some("Greek"),
        "en" => Some("English"),
        "eo" => Some("Esperanto"),
        "es" => Some("Spanish"),
        "et" => Some("Estonian"),
        "eu" => Some("Basque"),
        "fa" => Some("Persian"),
        "fi" => Some("Finnish"),
        "fil" => Some("Filipino"),
        "fr" => Some("French"),
        "ga" => Some("Irish"),
        "gl" => Some("Galician"),
        "gu" => Some("Gujarati"),
        "ha" => Some("Hausa"),
        "he" | "iw" => Some("Hebrew"),
        "hi" => Some("Hindi"),
        "hr" => Some("Croatian"),
        "hu" => Some("Hungarian"),
        "hy" => Some("Armenian"),
        "id" => Some("Indonesian"),
        "ig" => Some("Igbo"),
        "is" => Some("Icelandic"),
        "it" => Some("Italian"),
        "ja" => Some("Japanese"),
        "jv" => Some("Javanese"),
        "ka" => Some("Georgian"),
        "kk" => Some("Kazakh"),
        "km" => Some("Khmer"),
        "kn" => Some("Kannada"),
        "ko" => Some("Korean"),
        "ku" => Some("Kurdish"),
        "ky" => Some("Kyrgyz"),
        "lo" => Some("Lao"),
        "lt" => Some("Lithuanian"),
        "lv" => Some("Latvian"),
        "mk" => Some("Macedonian"),
        "ml" => Some("Malayalam"),
        "mn" => Some("Mongolian"),
        "mr" => Some("Marathi"),
        "ms" => Some("Malay"),
        "mt" => Some("Maltese"),
        "my" => Some("Burmese"),
        "ne" => Some("Nepali"),
        "nl" => Some("Dutch"),
        "no" | "nb" => Some("Norwegian"),
        "or" => Some("Odia"),
        "pa" => Some("Punjabi"),
        "pl" => Some("Polish"),
        "ps" => Some("Pashto"),
        "pt" => Some("Portuguese"),
        "ro" => Some("Romanian"),
        "ru" => Some("Russian"),
        "sd" => Some("Sindhi"),
        "si" => Some("Sinhala"),
        "sk" => Some("Slovak"),
        "sl" => Some("Slovenian"),
        "so" => Some("Somali"),
        "sq" => Some("Albanian"),
        "sr" => Some("Serbian"),
        "sv" => Some("Swedish"),
        "sw" => Some("Swahili"),
        "ta" => Some("Tamil"),
        "te" => Some("Telugu"),
        "th" => Some("Thai"),
        "tl" => Some("Tagalog"),
        "tr" => Some("Turkish"),
        "uk" => Some("Ukrainian"),
        "ur" => Some("Urdu"),
        "uz" => Some("Uzbek"),
        "vi" => Some("Vietnamese"),
        "yo" => Some("Yoruba"),
        "zh" => Some("Chinese"),
        "zu" => Some("Zulu"),
        _ => None,
    }
}

/// Resolve the display language for a playlist audio content identifier
///
/// Tries the prefix before the first `.`, then before the first `-`;
/// unrecognized identifiers pass through verbatim.
pub fn display_language(audio_id: &str) -> String {
    if audio_id.is_empty() {
        return String::new();
    }

    let before_dot = audio_id.split('.').next().unwrap_or(audio_id);
    if let Some(name) = english_name(before_dot) {
        return name.to_string();
    }

    let before_dash = audio_id.split('-').next().unwrap_or(audio_id);
    if let Some(name) = english_name(before_dash) {
        return name.to_string();
    }

    audio_id.to_string()
}
