/// Presentation-only state: where the list cursor is and what the search
/// prompt holds. None of it feeds back into the session.
#[derive(Debug, Default, Clone)]
pub struct ViewState {
    /// Highlighted row of the session view.
    pub cursor: usize,
    /// Typing goes to the search prompt.
    pub search_mode: bool,
    /// Search text being edited.
    pub input: String,
    /// Last problem reported by the audio output, shown in the status box.
    pub message: Option<String>,
}

impl ViewState {
    /// Keep the cursor inside a view of `len` rows.
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn down(&mut self, len: usize) {
        if len > 0 {
            self.cursor = (self.cursor + 1).min(len - 1);
        }
    }

    pub fn up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn top(&mut self) {
        self.cursor = 0;
    }

    pub fn bottom(&mut self, len: usize) {
        self.cursor = len.saturating_sub(1);
    }
}
