//! Decides when the screen needs drawing

/// Tracks what the last drawn frame showed
#[derive(Debug)]
pub struct Redraw {
    drawn_revision: Option<u64>,
    dirty: bool,
}

impl Redraw {
    pub fn new() -> Self {
        Self {
            drawn_revision: None,
            dirty: true,
        }
    }

    /// Something other than the item list changed
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// True if a frame should be drawn for the given item-list revision.
    /// Resets the tracker as if that frame was drawn.
    pub fn take(&mut self, items_revision: u64) -> bool {
        let needed = self.dirty || self.drawn_revision != Some(items_revision);
        self.dirty = false;
        self.drawn_revision = Some(items_revision);
        needed
    }
}

impl Default for Redraw {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_drawn() {
        let mut redraw = Redraw::new();
        assert!(redraw.take(0));
        assert!(!redraw.take(0));
    }

    #[test]
    fn test_revision_change_forces_draw() {
        let mut redraw = Redraw::new();
        redraw.take(0);
        assert!(redraw.take(1));
        assert!(!redraw.take(1));
    }

    #[test]
    fn test_dirty_forces_draw() {
        let mut redraw = Redraw::new();
        redraw.take(3);
        redraw.mark_dirty();
        assert!(redraw.take(3));
        assert!(!redraw.take(3));
    }
}
