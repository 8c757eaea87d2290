//! Editor configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// EditorOptions
// ---------------------------------------------------------------------------

/// Behaviour switches for the markup editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorOptions {
    /// Indent new lines to the tag nesting depth when Enter is pressed.
    pub auto_indent: bool,
    /// Spaces per nesting level, for auto-indent and formatting.
    pub indent_size: usize,
    /// Insert `</Name>` after typing the `>` of an opening tag.
    pub auto_close: bool,
    /// How long small edits wait before the whole document is reparsed.
    #[serde(with = "millis")]
    pub refresh_delay: Duration,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            auto_indent: true,
            indent_size: 2,
            auto_close: true,
            refresh_delay: Duration::from_secs(1),
        }
    }
}

impl EditorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auto_indent(mut self, enabled: bool) -> Self {
        self.auto_indent = enabled;
        self
    }

    pub fn with_indent_size(mut self, size: usize) -> Self {
        self.indent_size = size;
        self
    }

    pub fn with_auto_close(mut self, enabled: bool) -> Self {
        self.auto_close = enabled;
        self
    }

    pub fn with_refresh_delay(mut self, delay: Duration) -> Self {
        self.refresh_delay = delay;
        self
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
