//! Live markup ↔ object synchronization.
//!
//! [`MarkupSyncEngine`] watches a text surface holding widget markup. Each
//! time the cursor moves it finds the tag under the cursor, parses that tag
//! alone on tokio's blocking pool, and exposes the result as a typed
//! [`WidgetObject`] a property inspector can edit. Edits are serialized and
//! spliced back over the tag.
//!
//! Parse results come back over a channel as `(generation, result)` pairs and
//! are applied on the owning thread in [`poll`](MarkupSyncEngine::poll) or
//! [`settle`](MarkupSyncEngine::settle). A result whose generation is not the
//! latest is dropped, so the object always belongs to the span under the
//! cursor, never to one the cursor has already left.
//!
//! The engine also keeps a whole-document [`Project`] refreshed in the
//! background, debounced for single-character edits.

use std::time::Instant;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::dom::Project;
use crate::editor::buffer::TextSurface;
use crate::editor::error::EditorError;
use crate::editor::options::EditorOptions;
use crate::event::input::{Key, KeyEvent};
use crate::markup::error::MarkupError;
use crate::markup::format::format_markup;
use crate::markup::object::WidgetObject;
use crate::markup::parser::{parse_object, parse_project};
use crate::markup::scan::{positions, resolve_span, CursorPosition, MarkupSpan};
use crate::markup::writer::{strip_self_close, write_object};

/// Status text shown while the whole document is being reparsed.
pub const RELOADING_STATUS: &str = "Reloading...";

// ---------------------------------------------------------------------------
// SyncState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncState {
    /// The cursor is not inside an editable tag.
    Unfocused,
    /// A tag is under the cursor but its last parse failed.
    SpanResolved,
    /// A parse of the tag under the cursor is in flight.
    SpanNeedsReparse,
    /// The object matches the tag under the cursor and can be edited.
    ObjectLoaded,
}

// ---------------------------------------------------------------------------
// Worker messages
// ---------------------------------------------------------------------------

#[derive(Debug)]
enum WorkerResult {
    Object {
        generation: u64,
        result: Result<WidgetObject, MarkupError>,
    },
    Project {
        generation: u64,
        result: Result<Project, MarkupError>,
    },
}

/// The span most recently sent to a worker, with the text that was parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Dispatched {
    span: MarkupSpan,
    source: String,
}

// ---------------------------------------------------------------------------
// MarkupSyncEngine
// ---------------------------------------------------------------------------

/// Keeps a typed object in step with the tag under the cursor of `S`.
///
/// Owned by the UI thread. The host forwards the surface's events to the
/// `on_*` hooks in the order the surface raises them (key down, char typed,
/// text changed, cursor changed) and calls [`poll`](Self::poll) once per
/// frame.
pub struct MarkupSyncEngine<S: TextSurface> {
    runtime: Handle,
    surface: S,
    options: EditorOptions,

    state: SyncState,
    span: Option<MarkupSpan>,
    position: CursorPosition,
    object: Option<WidgetObject>,
    dispatched: Option<Dispatched>,
    generation: u64,
    pending_reparses: usize,

    project: Option<Project>,
    refresh_generation: u64,
    pending_refreshes: usize,
    refresh_requested_at: Option<Instant>,

    status: String,
    object_error: Option<String>,
    dirty: bool,
    auto_indent_pending: bool,
    auto_close_pending: bool,

    tx: UnboundedSender<WorkerResult>,
    rx: UnboundedReceiver<WorkerResult>,
}

impl<S: TextSurface> MarkupSyncEngine<S> {
    /// Create an engine over `surface`. Parses run on `runtime`'s blocking
    /// pool.
    pub fn new(runtime: Handle, surface: S, options: EditorOptions) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            runtime,
            surface,
            options,
            state: SyncState::Unfocused,
            span: None,
            position: CursorPosition::default(),
            object: None,
            dispatched: None,
            generation: 0,
            pending_reparses: 0,
            project: None,
            refresh_generation: 0,
            pending_refreshes: 0,
            refresh_requested_at: None,
            status: String::new(),
            object_error: None,
            dirty: false,
            auto_indent_pending: false,
            auto_close_pending: false,
            tx,
            rx,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for the host's own edits. Report them through the
    /// `on_*` hooks afterwards.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: EditorOptions) {
        self.options = options;
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn span(&self) -> Option<MarkupSpan> {
        self.span
    }

    /// The object parsed from the tag under the cursor, or the last one that
    /// parsed if the current text does not.
    pub fn object(&self) -> Option<&WidgetObject> {
        self.object.as_ref()
    }

    /// The most recent successfully parsed whole document.
    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn take_project(&mut self) -> Option<Project> {
        self.project.take()
    }

    /// Whole-document status: [`RELOADING_STATUS`] while a refresh is in
    /// flight, the parse error if the document is broken, empty otherwise.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Why the tag under the cursor last failed to parse, if it did.
    pub fn object_error(&self) -> Option<&str> {
        self.object_error.as_deref()
    }

    pub fn position(&self) -> CursorPosition {
        self.position
    }

    /// `Line: L, Col: C, Indent: I` for the status bar.
    pub fn location(&self) -> String {
        self.position.to_string()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag after the host has saved the text.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Whether any parse or refresh has not reported back yet.
    pub fn is_busy(&self) -> bool {
        self.pending_reparses + self.pending_refreshes > 0
    }

    // -----------------------------------------------------------------------
    // Surface hooks
    // -----------------------------------------------------------------------

    pub fn on_key_down(&mut self, key: &KeyEvent) {
        self.auto_indent_pending = key.code == Key::Enter;
    }

    pub fn on_char_typed(&mut self, ch: char) {
        self.auto_close_pending = ch == '>';
    }

    /// The surface's text changed; `old_len` is the previous length in bytes.
    ///
    /// The tag under the cursor is resolved again, since an edit can move or
    /// rewrite it without the cursor moving.
    pub fn on_text_changed(&mut self, old_len: usize) {
        self.text_changed(old_len, self.auto_close_pending);
        self.update_cursor();
    }

    pub fn on_cursor_changed(&mut self) {
        self.update_cursor();
        let indented = self.apply_auto_indent();
        let closed = self.apply_auto_close();
        if indented || closed {
            self.update_cursor();
        }
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Replace the whole text, e.g. after opening a file.
    ///
    /// The cursor goes to the start, the dirty flag is cleared and the
    /// document is reparsed immediately.
    pub fn load_text(&mut self, text: impl Into<String>) {
        self.surface.set_text(text.into());
        self.surface.set_cursor(0);
        self.clear_span();
        self.project = None;
        self.queue_refresh();
        self.update_cursor();
        self.dirty = false;
    }

    /// Edit the live object and write it back over its tag.
    ///
    /// Only allowed once the object for the current tag has loaded. The tag's
    /// open/close style is kept: an opening tag stays an opening tag.
    pub fn edit_object<F>(&mut self, edit: F) -> Result<(), EditorError>
    where
        F: FnOnce(&mut WidgetObject) -> Result<(), MarkupError>,
    {
        let (Some(span), Some(object), SyncState::ObjectLoaded) =
            (self.span, self.object.as_ref(), self.state)
        else {
            return Err(EditorError::NoLiveObject);
        };
        if !self.span_is_live(span) {
            return Err(EditorError::NoLiveObject);
        }

        let mut edited = object.clone();
        edit(&mut edited)?;

        let mut xml = write_object(&edited);
        if span.needs_close_tag {
            xml = strip_self_close(&xml);
        }

        let text = self.surface.text();
        let old_len = text.len();
        let spliced = format!("{}{}{}", &text[..span.start], xml, &text[span.end + 1..]);
        let new_span = MarkupSpan {
            end: span.start + xml.len() - 1,
            ..span
        };

        let cursor = self.surface.cursor();
        let cursor = if cursor > span.end {
            cursor - span.end + new_span.end
        } else {
            cursor.min(new_span.end)
        };
        self.surface.set_text(spliced);
        self.surface.set_cursor(cursor);

        let source = new_span.parse_text(self.surface.text());
        self.span = Some(new_span);
        self.dispatched = Some(Dispatched {
            span: new_span,
            source,
        });
        self.object = Some(edited);
        self.position = positions(self.surface.text(), self.surface.cursor());
        self.text_changed(old_len, false);
        Ok(())
    }

    /// Re-indent the whole document with the configured indent size.
    pub fn format(&mut self) -> Result<(), EditorError> {
        let formatted = format_markup(self.surface.text(), self.options.indent_size)?;
        if formatted == self.surface.text() {
            return Ok(());
        }
        let old_len = self.surface.text().len();
        self.surface.set_text(formatted);
        self.text_changed(old_len, true);
        self.update_cursor();
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Result delivery
    // -----------------------------------------------------------------------

    /// Once-per-frame housekeeping: start a due refresh and apply every
    /// result that has arrived. Returns how many results were applied
    /// (stale ones are not counted).
    pub fn poll(&mut self, now: Instant) -> usize {
        if let Some(requested) = self.refresh_requested_at {
            if now.saturating_duration_since(requested) >= self.options.refresh_delay {
                self.queue_refresh();
            }
        }

        let mut applied = 0;
        while let Ok(message) = self.rx.try_recv() {
            if self.apply(message) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait until every dispatched parse and refresh has reported back,
    /// applying results as they arrive.
    pub async fn settle(&mut self) {
        while self.is_busy() {
            match self.rx.recv().await {
                Some(message) => {
                    self.apply(message);
                }
                None => break,
            }
        }
    }

    fn apply(&mut self, message: WorkerResult) -> bool {
        match message {
            WorkerResult::Object { generation, result } => {
                self.pending_reparses = self.pending_reparses.saturating_sub(1);
                if generation != self.generation {
                    log::debug!(
                        "discarding stale reparse (generation {generation}, current {})",
                        self.generation
                    );
                    return false;
                }
                match result {
                    Ok(object) => {
                        self.object = Some(object);
                        self.object_error = None;
                        self.state = SyncState::ObjectLoaded;
                    }
                    Err(err) => {
                        log::debug!("tag under cursor does not parse: {err}");
                        self.object_error = Some(err.to_string());
                        self.state = SyncState::SpanResolved;
                    }
                }
            }
            WorkerResult::Project { generation, result } => {
                self.pending_refreshes = self.pending_refreshes.saturating_sub(1);
                if generation != self.refresh_generation {
                    log::debug!("discarding stale project refresh (generation {generation})");
                    return false;
                }
                match result {
                    Ok(project) => {
                        self.project = Some(project);
                        self.status.clear();
                    }
                    Err(err) => {
                        log::debug!("document does not parse: {err}");
                        self.status = err.to_string();
                    }
                }
            }
        }
        true
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    fn update_cursor(&mut self) {
        let text = self.surface.text();
        let cursor = self.surface.cursor();
        self.position = positions(text, cursor);

        match resolve_span(text, cursor) {
            Some(span) => {
                let source = span.parse_text(text);
                self.track_span(span, source);
            }
            None => self.clear_span(),
        }
    }

    /// Whether `span` still covers the text its object was parsed from.
    /// False after an edit the engine was not told about.
    fn span_is_live(&self, span: MarkupSpan) -> bool {
        let text = self.surface.text();
        text.get(span.start..=span.end).is_some()
            && self
                .dispatched
                .as_ref()
                .is_some_and(|d| d.span == span && d.source == span.parse_text(text))
    }

    fn track_span(&mut self, span: MarkupSpan, source: String) {
        self.span = Some(span);
        let current = Dispatched { span, source };
        if self.dispatched.as_ref() == Some(&current) {
            return;
        }

        self.generation += 1;
        let generation = self.generation;
        let source = current.source.clone();
        self.dispatched = Some(current);
        self.state = SyncState::SpanNeedsReparse;
        self.pending_reparses += 1;

        let tx = self.tx.clone();
        self.runtime.spawn_blocking(move || {
            let result = parse_object(&source);
            let _ = tx.send(WorkerResult::Object { generation, result });
        });
    }

    fn clear_span(&mut self) {
        self.generation += 1;
        self.span = None;
        self.dispatched = None;
        self.object = None;
        self.object_error = None;
        self.state = SyncState::Unfocused;
    }

    fn text_changed(&mut self, old_len: usize, immediate: bool) {
        self.dirty = true;
        if immediate || self.surface.text().len().abs_diff(old_len) > 1 {
            self.queue_refresh();
        } else {
            self.refresh_requested_at = Some(Instant::now());
        }
    }

    fn queue_refresh(&mut self) {
        self.refresh_requested_at = None;
        self.refresh_generation += 1;
        self.pending_refreshes += 1;
        self.status = RELOADING_STATUS.to_string();

        let generation = self.refresh_generation;
        let text = self.surface.text().to_string();
        let tx = self.tx.clone();
        self.runtime.spawn_blocking(move || {
            let result = parse_project(&text);
            let _ = tx.send(WorkerResult::Project { generation, result });
        });
    }

    /// After Enter: indent the new line to the nesting depth at the cursor,
    /// one level less if the line starts with a closing tag.
    ///
    /// Also applies when the cursor is at the end of the buffer, so a newly
    /// typed line is indented before anything follows it.
    fn apply_auto_indent(&mut self) -> bool {
        if !std::mem::take(&mut self.auto_indent_pending)
            || !self.options.auto_indent
            || self.options.indent_size == 0
        {
            return false;
        }

        let text = self.surface.text();
        let pos = self.surface.cursor();
        if pos == 0 {
            return false;
        }

        let mut level = self.position.indent;
        if text[pos..].starts_with("</") {
            level = level.saturating_sub(1);
        }
        if level == 0 {
            return false;
        }

        let indent = " ".repeat(level * self.options.indent_size);
        let old_len = text.len();
        self.surface.insert_at(pos, &indent);
        self.surface.set_cursor(pos + indent.len());
        self.text_changed(old_len, false);
        true
    }

    /// After typing the `>` of an opening tag: insert its closing tag after
    /// the cursor, leaving the cursor in place.
    fn apply_auto_close(&mut self) -> bool {
        if !std::mem::take(&mut self.auto_close_pending) || !self.options.auto_close {
            return false;
        }
        let Some(span) = self.span.filter(|span| span.needs_close_tag) else {
            return false;
        };
        let pos = self.surface.cursor();
        if pos != span.end + 1 {
            return false;
        }
        let Some(name) = span.name(self.surface.text()) else {
            return false;
        };

        let close = format!("</{name}>");
        let old_len = self.surface.text().len();
        self.surface.insert_at(pos, &close);
        self.text_changed(old_len, true);
        true
    }
}

// ===========================================================================
// Tests
// ===========================================================================
