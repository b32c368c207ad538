//! Place modal carousel state.
//!
//! One instance is owned by whatever renders the venue/photo modals. Only one
//! modal is open at a time; navigation stays inside its group.

use serde::Serialize;

/// Resolves a navigation request to a new index.
///
/// Returns `None` when `target` falls outside `[0, total)` or equals
/// `current`.
pub fn clamp_navigation(current: usize, target: i64, total: usize) -> Option<usize> {
    if target < 0 {
        return None;
    }
    let target = usize::try_from(target).ok()?;
    if target >= total || target == current {
        return None;
    }
    Some(target)
}

/// Identifier of the modal showing `index` within `group`.
pub fn modal_id(group: &str, index: usize) -> String {
    format!("place-modal-{}-{}", group, index)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct OpenModal {
    group: String,
    index: usize,
    total: usize,
}

/// Carousel of place modals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CarouselState {
    open: Option<OpenModal>,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the modal at `index` of a group with `total` entries.
    ///
    /// Ignored when `index` is out of bounds.
    pub fn open(&mut self, group: impl Into<String>, index: usize, total: usize) {
        if index >= total {
            return;
        }
        self.open = Some(OpenModal {
            group: group.into(),
            index,
            total,
        });
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Jumps to `target`; out-of-range targets and a closed carousel are no-ops.
    ///
    /// Returns whether the active modal changed.
    pub fn navigate(&mut self, target: i64) -> bool {
        let Some(open) = self.open.as_mut() else {
            return false;
        };
        match clamp_navigation(open.index, target, open.total) {
            Some(index) => {
                open.index = index;
                true
            }
            None => false,
        }
    }

    pub fn prev(&mut self) -> bool {
        match self.current_index() {
            Some(index) => self.navigate(index as i64 - 1),
            None => false,
        }
    }

    pub fn next(&mut self) -> bool {
        match self.current_index() {
            Some(index) => self.navigate(index as i64 + 1),
            None => false,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.open.as_ref().is_some_and(|open| open.index > 0)
    }

    pub fn has_next(&self) -> bool {
        self.open
            .as_ref()
            .is_some_and(|open| open.index + 1 < open.total)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.open.as_ref().map(|open| open.index)
    }

    pub fn active_modal_id(&self) -> Option<String> {
        self.open
            .as_ref()
            .map(|open| modal_id(&open.group, open.index))
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_modal_id().as_deref() == Some(id)
    }
}
