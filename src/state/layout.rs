//! Layout shell: expanded/collapsed state of the directory panel.

/// Whether the directory panel is expanded. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutShell {
    expanded: bool,
}

impl Default for LayoutShell {
    fn default() -> Self {
        Self { expanded: true }
    }
}

impl LayoutShell {
    /// Layout with the given initial state.
    pub fn new(expanded: bool) -> Self {
        Self { expanded }
    }

    /// Flip between expanded and collapsed.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Whether the directory panel is shown.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}
