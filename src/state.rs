// src/state.rs
pub const SEND_LABEL: &str = "Send";
pub const THINKING_LABEL: &str = "Thinking...";

/// The input box, send button and typing indicator of a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    enabled: bool,
    typing: bool,
    focused: bool,
    draft: String,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            enabled: true,
            typing: false,
            focused: false,
            draft: String::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn send_label(&self) -> &'static str {
        if self.enabled { SEND_LABEL } else { THINKING_LABEL }
    }

    /// Typing into a disabled input has no effect.
    pub fn set_draft(&mut self, text: impl Into<String>) -> bool {
        if !self.enabled {
            return false;
        }
        self.draft = text.into();
        true
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.focused = false;
        }
    }

    pub fn show_typing(&mut self) {
        self.typing = true;
    }

    pub fn hide_typing(&mut self) {
        self.typing = false;
    }

    pub fn focus(&mut self) {
        if self.enabled {
            self.focused = true;
        }
    }
}
