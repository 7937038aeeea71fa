//! Per-document configuration.

use serde::{Deserialize, Serialize};

use crate::path::{DEFAULT_SEPARATOR, Mode, mutate::DEFAULT_MAX_INDEX};

/// Settings carried by a [`Document`](super::Document).
///
/// Every document owns its options, so documents with different separators
/// or resolution modes can be used side by side. `Options` deserializes with
/// defaults for missing fields and can be embedded in an application's own
/// configuration:
///
/// ```rust
/// # use pathdoc::Options;
/// let options: Options = serde_json::from_str(r#"{"separator": 47}"#)?;
/// assert_eq!(options.separator, b'/');
/// assert!(!options.violence_check);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Byte separating path segments
    pub separator: u8,
    /// Resolve keys that contain the separator on reads and appends
    pub violence_check: bool,
    /// Largest index a write may grow a sequence to
    pub max_index: usize,
    /// Ask decoders to keep numbers as their decimal text
    pub preserve_numbers: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            separator: DEFAULT_SEPARATOR,
            violence_check: false,
            max_index: DEFAULT_MAX_INDEX,
            preserve_numbers: false,
        }
    }
}

impl Options {
    pub fn separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    pub fn violence_check(mut self, enabled: bool) -> Self {
        self.violence_check = enabled;
        self
    }

    pub fn max_index(mut self, max_index: usize) -> Self {
        self.max_index = max_index;
        self
    }

    pub fn preserve_numbers(mut self, enabled: bool) -> Self {
        self.preserve_numbers = enabled;
        self
    }

    /// The resolution mode these options select.
    pub fn mode(&self) -> Mode {
        Mode::from(self.violence_check)
    }
}
