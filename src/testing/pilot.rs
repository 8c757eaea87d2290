//! EditorPilot: programmatic interaction with a headless markup editor.

use std::time::Instant;

use tokio::runtime::Handle;

use crate::editor::{
    EditorError, EditorOptions, MarkupSyncEngine, SyncState, TextBuffer, TextSurface,
};
use crate::event::input::{Key, KeyEvent, Modifiers};
use crate::markup::error::MarkupError;
use crate::markup::object::WidgetObject;

/// Marker [`EditorPilot::text_with_caret`] inserts at the cursor.
pub const CARET: char = '|';

// ---------------------------------------------------------------------------
// EditorPilot
// ---------------------------------------------------------------------------

/// A headless editor driver for testing.
///
/// Key presses are reported to the engine in the order a text widget raises
/// them: key down, char typed, text changed, cursor changed.
///
/// # Examples
///
/// ```ignore
/// use plinth::testing::EditorPilot;
///
/// let mut pilot = EditorPilot::new(tokio::runtime::Handle::current());
/// pilot.type_text("<Grid>");
/// assert_eq!(pilot.text(), "<Grid></Grid>");
/// ```
pub struct EditorPilot {
    engine: MarkupSyncEngine<TextBuffer>,
}

impl EditorPilot {
    /// An empty editor with default options.
    pub fn new(runtime: Handle) -> Self {
        Self::with_options(runtime, EditorOptions::default())
    }

    pub fn with_options(runtime: Handle, options: EditorOptions) -> Self {
        Self {
            engine: MarkupSyncEngine::new(runtime, TextBuffer::new(), options),
        }
    }

    /// Replace the buffer, as when opening a file. The cursor goes to 0.
    pub fn load(&mut self, text: &str) {
        self.engine.load_text(text);
    }

    // ── Input simulation ─────────────────────────────────────────────

    pub fn press_key(&mut self, key: Key) {
        self.press(KeyEvent::plain(key));
    }

    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) {
        self.press(KeyEvent::new(key, modifiers));
    }

    /// Type each character of `text` as an individual key press. `\n` is
    /// sent as Enter.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            match ch {
                '\n' => self.press_key(Key::Enter),
                _ => self.press_key(Key::Char(ch)),
            }
        }
    }

    /// Put the cursor at byte offset `offset`.
    pub fn move_cursor(&mut self, offset: usize) {
        self.engine.surface_mut().set_cursor(offset);
        self.engine.on_cursor_changed();
    }

    /// Put the cursor just inside the first occurrence of `needle`, i.e.
    /// after its first character. Returns `false` if `needle` is absent.
    pub fn click_in(&mut self, needle: &str) -> bool {
        match self.text().find(needle) {
            Some(at) => {
                self.move_cursor(at + 1);
                true
            }
            None => false,
        }
    }

    /// Edit the live object through the property inspector path.
    pub fn edit<F>(&mut self, edit: F) -> Result<(), EditorError>
    where
        F: FnOnce(&mut WidgetObject) -> Result<(), MarkupError>,
    {
        self.engine.edit_object(edit)
    }

    fn press(&mut self, key: KeyEvent) {
        self.engine.on_key_down(&key);
        if let Some(ch) = key.typed_char() {
            self.engine.on_char_typed(ch);
        }
        let old_len = self.engine.surface().len();
        if self.engine.surface_mut().apply_key(&key) {
            self.engine.on_text_changed(old_len);
        }
        self.engine.on_cursor_changed();
    }

    // ── Processing ───────────────────────────────────────────────────

    /// Simulate one frame: start due refreshes and apply arrived results.
    pub fn tick(&mut self) -> usize {
        self.engine.poll(Instant::now())
    }

    /// Wait for every in-flight parse to report back.
    pub async fn settle(&mut self) {
        self.engine.settle().await;
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn engine(&self) -> &MarkupSyncEngine<TextBuffer> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut MarkupSyncEngine<TextBuffer> {
        &mut self.engine
    }

    pub fn text(&self) -> &str {
        self.engine.surface().text()
    }

    pub fn cursor(&self) -> usize {
        self.engine.surface().cursor()
    }

    pub fn state(&self) -> SyncState {
        self.engine.state()
    }

    pub fn object(&self) -> Option<&WidgetObject> {
        self.engine.object()
    }

    /// The buffer with [`CARET`] inserted at the cursor, for snapshots.
    pub fn text_with_caret(&self) -> String {
        let mut text = self.text().to_string();
        text.insert(self.cursor(), CARET);
        text
    }
}

// ===========================================================================
// Tests
// ===========================================================================
