//! Document-level metadata.

/// Metadata for the document shell around rendered sections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentMeta {
    /// Document title.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// BCP 47 language tag of the content.
    pub lang: String,
    /// Stylesheet URLs, linked in order.
    pub stylesheets: Vec<String>,
    /// Script URLs, loaded deferred in order.
    pub scripts: Vec<String>,
}

impl DocumentMeta {
    /// Create metadata with no stylesheets or scripts.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        lang: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            lang: lang.into(),
            stylesheets: Vec::new(),
            scripts: Vec::new(),
        }
    }

    /// Add a stylesheet URL.
    #[must_use]
    pub fn with_stylesheet(mut self, url: impl Into<String>) -> Self {
        self.stylesheets.push(url.into());
        self
    }

    /// Add a script URL.
    #[must_use]
    pub fn with_script(mut self, url: impl Into<String>) -> Self {
        self.scripts.push(url.into());
        self
    }
}
