//! Inputs of one report build.

/// The AI analysis result and the user inputs it was produced from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRequest {
    /// Markdown report returned by the AI model
    pub markdown_body: String,
    /// Free-text project context
    pub context_text: String,
    /// Free-text request sent with the plan
    pub prompt_text: String,
    /// Uploaded plan image, if any
    pub reference_image: Option<Vec<u8>>,
}

impl ReportRequest {
    /// Creates a request for the given Markdown body.
    pub fn new(markdown_body: impl Into<String>) -> Self {
        Self {
            markdown_body: markdown_body.into(),
            ..Default::default()
        }
    }

    /// Sets the context text.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context_text = context.into();
        self
    }

    /// Sets the prompt text.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt_text = prompt.into();
        self
    }

    /// Attaches the analyzed plan image.
    pub fn with_reference_image(mut self, data: Vec<u8>) -> Self {
        self.reference_image = Some(data);
        self
    }

    /// Returns true if the Markdown body has no visible content.
    pub fn is_empty(&self) -> bool {
        self.markdown_body.trim().is_empty()
    }
}
