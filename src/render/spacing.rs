//! Blank-line heuristic between labelled fields.
//!
//! Certain labels conventionally carry bulleted children; when the next
//! distinct label appears after such a run of bullets, a blank paragraph
//! should separate them. The decision depends on the previous label's
//! identity and on whether bullets actually followed it, so the state lives
//! in an explicit per-section object rather than in the dispatch loop.

/// Reduce a label to its comparison form.
///
/// Lowercases, then strips plural and parenthetical-plural suffixes so that
/// `"Objective"`, `"Objectives"` and `"Objective(s)"` compare equal, and
/// `"Dependency"`, `"Dependencies"` and `"Dependency(ies)"` likewise. A
/// trailing bare `s` survives only after a double-s stem (`"Process"`).
pub fn normalize_label(raw: &str) -> String {
    let mut label = raw.trim().to_lowercase();

    if let Some(stem) = label.strip_suffix("(ies)") {
        label = stem.trim_end().to_string();
        if !label.ends_with('y') {
            label.push('y');
        }
    } else if let Some(stem) = label.strip_suffix("(s)") {
        label = stem.trim_end().to_string();
    }

    if let Some(stem) = label.strip_suffix("ies") {
        label = format!("{stem}y");
    } else if label.ends_with('s') && !label.ends_with("ss") {
        label.pop();
    }

    label
}

/// Section-scoped state machine deciding blank-line insertion before labels.
#[derive(Debug, Clone)]
pub struct LabelSpacing {
    triggers: Vec<String>,
    last_label: Option<String>,
    had_bullets: bool,
}

impl LabelSpacing {
    /// Create a machine with the given trigger-label set (raw form).
    pub fn new<S: AsRef<str>>(trigger_labels: &[S]) -> Self {
        Self {
            triggers: trigger_labels
                .iter()
                .map(|l| normalize_label(l.as_ref()))
                .collect(),
            last_label: None,
            had_bullets: false,
        }
    }

    /// Reset at the start of a section.
    pub fn reset(&mut self) {
        self.last_label = None;
        self.had_bullets = false;
    }

    /// Record a new label and report whether a blank paragraph must precede
    /// it: the previous label must be a distinct trigger label that actually
    /// had bullets emitted under it.
    pub fn on_label(&mut self, label: &str) -> bool {
        let normalized = normalize_label(label);
        let separate = match self.last_label.as_deref() {
            Some(last) => {
                self.had_bullets && last != normalized && self.triggers.iter().any(|t| t == last)
            }
            None => false,
        };

        self.last_label = Some(normalized);
        self.had_bullets = false;
        separate
    }

    /// Record a bullet or sub-bullet under the current label.
    pub fn on_bullet(&mut self) {
        self.had_bullets = true;
    }

    /// A step or heading boundary drops any pending label context.
    pub fn on_boundary(&mut self) {
        self.reset();
    }
}
