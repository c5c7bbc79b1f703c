//! Rendering options and house-style configuration.

/// Labels whose trailing bulleted children warrant a blank line before the
/// next distinct label. The set is configurable because house conventions
/// differ; this is the default.
pub const DEFAULT_TRIGGER_LABELS: [&str; 4] =
    ["Objective(s)", "Process Owner(s)", "Input(s)", "Dependency(ies)"];

/// Options for rendering a document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Body font family
    pub font: String,

    /// Body text size in points
    pub base_size_pt: usize,

    /// Title-block first line size in points
    pub title_size_pt: usize,

    /// Section and inline heading size in points
    pub heading_size_pt: usize,

    /// Footer text size in points
    pub footer_size_pt: usize,

    /// Trigger labels for the blank-line heuristic, in raw (unnormalized) form
    pub trigger_labels: Vec<String>,

    /// Override for the artifact filename stem; defaults to a slug of the title
    pub filename_stem: Option<String>,
}

impl RenderOptions {
    /// Create new render options with house-style defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the body font family.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    /// Replace the trigger-label set.
    pub fn with_trigger_labels<S: Into<String>>(
        mut self,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        self.trigger_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single trigger label to the set.
    pub fn with_trigger_label(mut self, label: impl Into<String>) -> Self {
        self.trigger_labels.push(label.into());
        self
    }

    /// Set the artifact filename stem.
    pub fn with_filename_stem(mut self, stem: impl Into<String>) -> Self {
        self.filename_stem = Some(stem.into());
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font: "Calibri".to_string(),
            base_size_pt: 11,
            title_size_pt: 18,
            heading_size_pt: 14,
            footer_size_pt: 10,
            trigger_labels: DEFAULT_TRIGGER_LABELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            filename_stem: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.font, "Calibri");
        assert_eq!(options.base_size_pt, 11);
        assert_eq!(options.trigger_labels.len(), 4);
        assert!(options.filename_stem.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let options = RenderOptions::new()
            .with_font("Arial")
            .with_trigger_labels(["Output(s)"])
            .with_trigger_label("Owner")
            .with_filename_stem("sop-042");

        assert_eq!(options.font, "Arial");
        assert_eq!(options.trigger_labels, vec!["Output(s)", "Owner"]);
        assert_eq!(options.filename_stem.as_deref(), Some("sop-042"));
    }
}
