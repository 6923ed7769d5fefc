//! Per-view display state for a motion detail page.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How line numbers are rendered next to the motion text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum LineNumberingMode {
    /// No line numbers.
    None,
    /// Numbers rendered inside the text column.
    Inside,
    /// Numbers rendered in the margin.
    #[default]
    Outside,
}

/// Which version of the text is shown when change recommendations exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ChangeRecoMode {
    /// The submitted text.
    #[default]
    Original,
    /// The text with all recommendations applied.
    Changed,
    /// Inline diff between original and changed.
    Diff,
    /// The final, voted version.
    Final,
}

/// Mutable presentation state carried by a projection.
///
/// Templates read and write these directly; the projection itself never
/// interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DisplaySettings {
    /// Line numbering mode.
    pub line_numbering: LineNumberingMode,
    /// Change recommendation mode.
    pub change_reco: ChangeRecoMode,
    /// Maximum line length used for line numbering.
    pub line_length: u32,
    /// Currently highlighted line, if any.
    pub highlighted_line: Option<u32>,
}

/// Line length used when nothing is configured.
pub const DEFAULT_LINE_LENGTH: u32 = 80;

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            line_numbering: LineNumberingMode::default(),
            change_reco: ChangeRecoMode::default(),
            line_length: DEFAULT_LINE_LENGTH,
            highlighted_line: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_motion_detail_page() {
        let settings = DisplaySettings::default();
        assert_eq!(settings.line_numbering, LineNumberingMode::Outside);
        assert_eq!(settings.change_reco, ChangeRecoMode::Original);
        assert_eq!(settings.line_length, 80);
        assert_eq!(settings.highlighted_line, None);
    }

    #[test]
    fn modes_use_snake_case() {
        let json = serde_json::to_string(&ChangeRecoMode::Diff).ok();
        assert_eq!(json.as_deref(), Some("\"diff\""));
    }
}
