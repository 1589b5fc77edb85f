//! Newsletter form state: the email input and its submit trigger

use tracing::trace;

/// The email text field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailInput {
    value: String,
}

impl EmailInput {
    /// Current text
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the text, as the user typing would
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Empty the field
    pub fn clear(&mut self) {
        self.value.clear();
    }
}

/// The submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerControl {
    label: String,
    enabled: bool,
    loading: bool,
    saved_label: Option<String>,
}

impl TriggerControl {
    /// An enabled trigger showing `label`
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            loading: false,
            saved_label: None,
        }
    }

    /// Text currently shown on the trigger
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the trigger can be activated
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the loading spinner is shown
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Disable the trigger and show the spinner with `label`
    pub fn begin_loading(&mut self, label: &str) {
        if self.saved_label.is_none() {
            self.saved_label = Some(std::mem::replace(&mut self.label, label.to_string()));
        } else {
            self.label = label.to_string();
        }
        self.enabled = false;
        self.loading = true;
        trace!("Trigger loading: {}", self.label);
    }

    /// Restore the original label and re-enable the trigger
    pub fn restore(&mut self) {
        if let Some(label) = self.saved_label.take() {
            self.label = label;
        }
        self.enabled = true;
        self.loading = false;
    }
}

/// Input and trigger of the newsletter signup form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterForm {
    /// Email field
    pub input: EmailInput,
    /// Submit button
    pub trigger: TriggerControl,
}

impl NewsletterForm {
    /// An empty form whose trigger reads `label`
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            input: EmailInput::default(),
            trigger: TriggerControl::new(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_then_restore_round_trips_label() {
        let mut trigger = TriggerControl::new("Subscribe");
        trigger.begin_loading("Subscribing...");

        assert_eq!(trigger.label(), "Subscribing...");
        assert!(!trigger.is_enabled());
        assert!(trigger.is_loading());

        trigger.restore();
        assert_eq!(trigger, TriggerControl::new("Subscribe"));
    }

    #[test]
    fn repeated_loading_keeps_first_label() {
        let mut trigger = TriggerControl::new("Join");
        trigger.begin_loading("Wait");
        trigger.begin_loading("Still waiting");
        trigger.restore();
        assert_eq!(trigger.label(), "Join");
    }

    #[test]
    fn input_clear_empties_value() {
        let mut input = EmailInput::default();
        input.set_value("user@example.com");
        input.clear();
        assert_eq!(input.value(), "");
    }
}
