pub const JAVA_LANGUAGE_ID: &str = "java";

/// Snapshot of an editor document at the time an event was observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub uri: String,
    pub language_id: String,
    pub text: String,
}

impl Document {
    pub fn new(
        uri: impl Into<String>,
        language_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            language_id: language_id.into(),
            text: text.into(),
        }
    }

    pub fn java(uri: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(uri, JAVA_LANGUAGE_ID, text)
    }

    pub fn is_java(&self) -> bool {
        self.language_id == JAVA_LANGUAGE_ID
    }
}
