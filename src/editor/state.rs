//! Editor session state persisted between runs.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::editor::error::EditorError;
use crate::editor::options::EditorOptions;
use crate::style::color::Color;

/// File name the host usually stores [`EditorState`] under.
pub const STATE_FILE_NAME: &str = "editor-state.json";

/// Window geometry, pane splits, recent paths and user settings.
///
/// Missing fields load as defaults, so state files from older versions still
/// load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorState {
    pub window_size: (u32, u32),
    /// Positions of the top (preview/source) and right (inspector) splitters,
    /// as fractions of the window.
    pub top_split: f32,
    pub right_split: f32,
    pub edit_file: Option<PathBuf>,
    pub last_folder: Option<PathBuf>,
    /// Custom swatches from the color picker, as `#RRGGBB[AA]` strings.
    pub user_colors: Vec<String>,
    pub options: EditorOptions,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            window_size: (1280, 800),
            top_split: 0.65,
            right_split: 0.75,
            edit_file: None,
            last_folder: None,
            user_colors: Vec::new(),
            options: EditorOptions::default(),
        }
    }
}

impl EditorState {
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, EditorError> {
        let path = path.as_ref();
        let state = Self::from_json(&fs::read_to_string(path)?)?;
        log::debug!("loaded editor state from {}", path.display());
        Ok(state)
    }

    /// Load the state, or fall back to defaults if the file is missing or bad.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path.as_ref()).unwrap_or_else(|err| {
            log::debug!("using default editor state: {err}");
            Self::default()
        })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), EditorError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// User colors that parse; malformed entries are skipped.
    pub fn colors(&self) -> Vec<Color> {
        self.user_colors
            .iter()
            .filter_map(|s| crate::style::color::parse_color(s))
            .collect()
    }

    pub fn set_colors(&mut self, colors: &[Color]) {
        self.user_colors = colors.iter().map(|c| c.to_hex()).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("plinth-{}-{name}", std::process::id()))
    }

    #[test]
    fn json_round_trip() {
        let mut state = EditorState {
            window_size: (1024, 768),
            edit_file: Some(PathBuf::from("ui/main.xmmp")),
            options: EditorOptions::new().with_indent_size(4),
            ..Default::default()
        };
        state.set_colors(&[Color::rgb(255, 0, 0), Color::rgba(0, 0, 255, 128)]);

        let restored = EditorState::from_json(&state.to_json().unwrap()).unwrap();
        assert_eq!(restored, state);
        assert_eq!(restored.user_colors, vec!["#FF0000", "#0000FF80"]);
        assert_eq!(restored.colors()[1], Color::rgba(0, 0, 255, 128));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let state = EditorState::from_json(r#"{"lastFolder": "/tmp"}"#).unwrap();
        assert_eq!(state.last_folder, Some(PathBuf::from("/tmp")));
        assert_eq!(state.window_size, (1280, 800));
        assert_eq!(state.options, EditorOptions::default());
    }

    #[test]
    fn bad_json_is_state_error() {
        assert!(matches!(
            EditorState::from_json("{ not json"),
            Err(EditorError::State(_))
        ));
    }

    #[test]
    fn malformed_colors_are_skipped() {
        let state = EditorState {
            user_colors: vec!["#00FF00".into(), "nope".into()],
            ..Default::default()
        };
        assert_eq!(state.colors(), vec![Color::rgb(0, 255, 0)]);
    }

    #[test]
    fn save_and_load() {
        let path = temp_path(STATE_FILE_NAME);
        let state = EditorState {
            top_split: 0.5,
            ..Default::default()
        };
        state.save(&path).unwrap();
        assert_eq!(EditorState::load(&path).unwrap(), state);
        fs::remove_file(&path).unwrap();

        assert!(matches!(EditorState::load(&path), Err(EditorError::Io(_))));
        assert_eq!(EditorState::load_or_default(&path), EditorState::default());
    }
}
