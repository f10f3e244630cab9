use serde::{Deserialize, Serialize};

// serde helper: skip boolean flags that are false so the serialized form
// carries only the flags that are set.
fn is_false(value: &bool) -> bool {
    !*value
}

/// The classification result consumed by presentation code.
///
/// Identifiers are absent when nothing could be resolved (unregistered
/// process, underivable state). A false flag and an absent flag mean the
/// same thing to consumers. Constructed fresh per classification call and
/// never cached by the classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_state: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub action_needed: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_final: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub emphasize_transition_moment: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_sale_notification: bool,
}

impl StateDescriptor {
    /// Descriptor carrying only the identifiers, no flags set.
    ///
    /// This is what the default producer of every rule table returns.
    pub fn bare(process_name: &str, process_state: Option<&str>) -> Self {
        Self {
            process_name: Some(process_name.to_string()),
            process_state: process_state.map(str::to_string),
            ..Self::default()
        }
    }

    /// True when nothing was resolved at all (registry miss).
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The viewing party has something to do in this state.
    pub fn needs_action(mut self) -> Self {
        self.action_needed = true;
        self
    }

    /// The transaction has reached a terminal state.
    pub fn finalized(mut self) -> Self {
        self.is_final = true;
        self
    }

    /// The transition timestamp deserves visual emphasis.
    pub fn emphasized(mut self) -> Self {
        self.emphasize_transition_moment = true;
        self
    }

    /// A notification-worthy sale event for the provider.
    pub fn sale_notification(mut self) -> Self {
        self.is_sale_notification = true;
        self
    }
}
