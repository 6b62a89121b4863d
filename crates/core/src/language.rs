//! Language definitions for the 12 supported languages
//!
//! Covers the 11 Indian languages handled by the speech providers plus
//! English. Anything outside this closed set degrades to English.

use serde::{Deserialize, Serialize};

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Bengali,
    Gujarati,
    Kannada,
    Malayalam,
    Marathi,
    Odia,
    Punjabi,
    Tamil,
    Telugu,
    Urdu,
}

impl Language {
    /// All supported languages
    pub const ALL: [Language; 12] = [
        Self::English,
        Self::Hindi,
        Self::Bengali,
        Self::Gujarati,
        Self::Kannada,
        Self::Malayalam,
        Self::Marathi,
        Self::Odia,
        Self::Punjabi,
        Self::Tamil,
        Self::Telugu,
        Self::Urdu,
    ];

    /// Get the BCP-47 style language tag used by the speech providers
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en-IN",
            Self::Hindi => "hi-IN",
            Self::Bengali => "bn-IN",
            Self::Gujarati => "gu-IN",
            Self::Kannada => "kn-IN",
            Self::Malayalam => "ml-IN",
            Self::Marathi => "mr-IN",
            Self::Odia => "or-IN",
            Self::Punjabi => "pa-IN",
            Self::Tamil => "ta-IN",
            Self::Telugu => "te-IN",
            Self::Urdu => "ur-IN",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Bengali => "Bengali",
            Self::Gujarati => "Gujarati",
            Self::Kannada => "Kannada",
            Self::Malayalam => "Malayalam",
            Self::Marathi => "Marathi",
            Self::Odia => "Odia",
            Self::Punjabi => "Punjabi",
            Self::Tamil => "Tamil",
            Self::Telugu => "Telugu",
            Self::Urdu => "Urdu",
        }
    }

    /// Resolve a provider language tag to a `Language`
    ///
    /// Returns `None` for tags outside the supported set; callers should
    /// fall back to [`Language::default`] (English).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en-IN" => Some(Self::English),
            "hi-IN" => Some(Self::Hindi),
            "bn-IN" => Some(Self::Bengali),
            "gu-IN" => Some(Self::Gujarati),
            "kn-IN" => Some(Self::Kannada),
            "ml-IN" => Some(Self::Malayalam),
            "mr-IN" => Some(Self::Marathi),
            "or-IN" => Some(Self::Odia),
            "pa-IN" => Some(Self::Punjabi),
            "ta-IN" => Some(Self::Tamil),
            "te-IN" => Some(Self::Telugu),
            "ur-IN" => Some(Self::Urdu),
            _ => None,
        }
    }

    /// Resolve a provider tag, degrading to English for unknown tags
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }

    /// Canned greeting returned for greeting inputs, per language
    pub fn greeting(&self) -> &'static str {
        match self {
            Self::English => "Hello! How can I help you?",
            Self::Hindi => "नमस्ते! मैं आपकी किस प्रकार सहायता कर सकता हूँ?",
            Self::Bengali => "হ্যালো! আমি কীভাবে আপনার সাহায্য করতে পারি?",
            Self::Gujarati => "હેલો! હું તમને કેવી રીતે મદદ કરી શકું?",
            Self::Kannada => "ಹಲೋ! ನಾನು ನಿಮಗೆ ಹೇಗೆ ಸಹಾಯ ಮಾಡಬಹುದು?",
            Self::Malayalam => "ഹലോ! ഞാൻ നിങ്ങൾക്ക് എങ്ങനെ സഹായിക്കാം?",
            Self::Marathi => "हॅलो! मी तुम्हाला कशी मदत करू शकतो?",
            Self::Odia => "ନମସ୍କାର! ମୁଁ କିପରି ଆପଣଙ୍କୁ ସାହାଯ୍ୟ କରିପାରିବି?",
            Self::Punjabi => "ਹੈਲੋ! ਮੈਂ ਤੁਹਾਡੀ ਕਿਵੇਂ ਮਦਦ ਕਰ ਸਕਦਾ ਹਾਂ?",
            Self::Tamil => "வணக்கம்! நான் உங்களுக்கு எப்படி உதவலாம்?",
            Self::Telugu => "హలో! నేను మీకు ఎలా సహాయపడగలను?",
            Self::Urdu => "ہیلو! میں آپ کی کس طرح مدد کر سکتا ہوں؟",
        }
    }

    /// Fallback phrase the generator must return verbatim when the
    /// retrieved context does not answer the question
    pub fn fallback(&self) -> &'static str {
        match self {
            Self::English => "Sorry, this isn't relevant. Can I help with something else?",
            Self::Hindi => "माफ करें, यह प्रासंगिक नहीं है। क्या मैं आपकी किसी और चीज़ में मदद कर सकता हूँ?",
            Self::Bengali => "দুঃখিত, এটি প্রাসঙ্গিক নয়। আমি কি অন্য কিছুতে সাহায্য করতে পারি?",
            Self::Gujarati => "માફ કરશો, આ સંબંધિત નથી. શું હું બીજી કોઈ બાબતમાં મદદ કરી શકું?",
            Self::Kannada => "ಕ್ಷಮಿಸಿ, ಇದು ಸಂಬಂಧಿತವಾಗಿಲ್ಲ. ನಾನು ಮತ್ತೊಂದು ಸಹಾಯ ಮಾಡಬಹುದೇ?",
            Self::Malayalam => "ക്ഷമിക്കണം, ഇത് പ്രസക്തമായതല്ല. ഞാൻ മറ്റെന്തെങ്കിലുമൊക്കെ സഹായിക്കാമോ?",
            Self::Marathi => "माफ करा, हे संबंधित नाही. मी इतर काही मदत करू शकतो का?",
            Self::Odia => "ମାନ୍ୟ କରନ୍ତୁ, ଏହିଟି ସମ୍ବନ୍ଧିତ ନୁହେଁ । ମୁଁ ଅନ୍ୟ କିଛିରେ ସାହାଯ୍ୟ କରିପାରିବି କି?",
            Self::Punjabi => "ਮਾਫ ਕਰਨਾ, ਇਹ ਸਬੰਧਤ ਨਹੀਂ ਹੈ। ਕੀ ਮੈਂ ਹੋਰ ਕਿਸੇ ਗੱਲ 'ਚ ਤੁਹਾਡੀ ਮਦਦ ਕਰ ਸਕਦਾ ਹਾਂ?",
            Self::Tamil => "மன்னிக்கவும், இது தொடர்புடையதல்ல. நான் வேறு எதையாவது உதவ முடியுமா?",
            Self::Telugu => "క్షమించండి, ఇది సంబంధించినది కాదు. నేను ఇంకేదైనా సహాయపడగలనా?",
            Self::Urdu => "معاف کیجیے، یہ متعلقہ نہیں ہے۔ کیا میں کسی اور چیز میں آپ کی مدد کر سکتا ہوں؟",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
