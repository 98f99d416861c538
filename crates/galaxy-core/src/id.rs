//! Drawable handles

use std::fmt;

/// Handle a scene binding returns from `attach`.
///
/// Each binding hands them out from its own [`DrawableIds`] sequence, so a
/// handle only means something to the binding that issued it.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct DrawableId(u64);

impl DrawableId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DrawableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues increasing [`DrawableId`]s starting at `#1`; never reuses one
#[derive(Debug, Default)]
pub struct DrawableIds {
    issued: u64,
}

impl DrawableIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> DrawableId {
        self.issued += 1;
        DrawableId(self.issued)
    }

    /// How many ids have been handed out
    pub fn issued(&self) -> u64 {
        self.issued
    }
}
