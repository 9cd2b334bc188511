//! Chat widget state. Owned by the controller; no globals.

/// Visibility plus the pending auto-popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatWidget {
    visible: bool,
    popup_pending: bool,
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatWidget {
    /// Hidden, with the auto-popup armed.
    pub fn new() -> Self {
        Self {
            visible: false,
            popup_pending: true,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn popup_pending(&self) -> bool {
        self.popup_pending
    }

    /// Flip visibility. Any manual toggle cancels the auto-popup.
    /// Returns the new visibility.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.popup_pending = false;
        self.visible
    }

    /// Hide the widget. The auto-popup is left as it was.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Popup delay elapsed. Returns true if this opened the widget.
    pub fn popup_elapsed(&mut self) -> bool {
        if !self.popup_pending {
            return false;
        }
        self.popup_pending = false;
        if self.visible {
            return false;
        }
        self.visible = true;
        true
    }
}
