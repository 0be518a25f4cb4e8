//! Pure per-dependency decision.

/// What the probe reported for one dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inspection {
    pub exists:          bool,
    pub version_matches: bool,
    pub size_matches:    bool,
}

impl Inspection {
    /// An absent file: version and size are not queried and count as failed.
    pub const fn missing() -> Self {
        Self {
            exists:          false,
            version_matches: false,
            size_matches:    false,
        }
    }

    /// Any single failed check forces the whole payload to be rewritten.
    pub const fn needs_extraction(&self) -> bool {
        !self.exists || !self.version_matches || !self.size_matches
    }
}
