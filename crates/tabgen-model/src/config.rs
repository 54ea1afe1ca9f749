//! Configuration for the generated table.

use std::fmt;

/// Icon used when none is given on the command line.
pub const DEFAULT_ICON: &str = "py-mode.svg";

pub const DEFAULT_DESCRIPTION: &str =
    "Input method for Cherokee, based on Natasha's syllabary table";

pub const DEFAULT_AUTHOR: &str = "Thomas Klute <thomas2.klute@uni-dortmund.de>";

/// Fixed per deployment; ibus-table uses it to recognise upgrades of the same table.
pub const DEFAULT_UUID: &str = "fa824c40-b615-46b0-807d-b9fa311c3a1c";

/// Value of the `AUTO_SELECT` flag.
///
/// Both variants have shipped, so neither is hardcoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoSelect {
    #[default]
    Enabled,
    Disabled,
}

impl AutoSelect {
    pub fn as_flag(self) -> &'static str {
        match self {
            Self::Enabled => "TRUE",
            Self::Disabled => "FALSE",
        }
    }
}

impl From<bool> for AutoSelect {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

impl fmt::Display for AutoSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_flag())
    }
}

/// Options controlling table generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Icon file name written to the `ICON` field.
    pub icon: String,
    pub author: String,
    pub description: String,
    pub uuid: String,
    pub auto_select: AutoSelect,
    /// Append synthetic `na` + `h…` rows after the source rows.
    pub expand_quirks: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            icon: DEFAULT_ICON.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            uuid: DEFAULT_UUID.to_string(),
            auto_select: AutoSelect::default(),
            expand_quirks: true,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    #[must_use]
    pub fn with_auto_select(mut self, auto_select: AutoSelect) -> Self {
        self.auto_select = auto_select;
        self
    }

    #[must_use]
    pub fn with_quirks(mut self, enable: bool) -> Self {
        self.expand_quirks = enable;
        self
    }
}
