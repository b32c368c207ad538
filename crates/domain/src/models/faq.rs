//! FAQ accordion: at most one answer is expanded.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    open_id: Option<String>,
}

impl FaqAccordion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `id`, or closes it if it is already open.
    pub fn toggle(&mut self, id: &str) {
        if self.is_open(id) {
            self.open_id = None;
        } else {
            self.open_id = Some(id.to_string());
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open_id.as_deref() == Some(id)
    }

    pub fn open_id(&self) -> Option<&str> {
        self.open_id.as_deref()
    }
}
