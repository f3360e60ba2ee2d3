//! Recording backend
//!
//! Records every command it receives in issue order instead of drawing
//! anything. Tests assert on the call sequence (flush ordering in
//! particular); headless hosts can use it as a no-op display.

use std::collections::HashMap;

use super::{Backend, Error, PairId, RegionId, Result};
use crate::core::{BorderGlyphs, Color, Coord};

/// One recorded backend command
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateRegion {
        id: RegionId,
        origin: Coord,
        extent: Coord,
    },
    CreateChildRegion {
        id: RegionId,
        parent: RegionId,
        origin: Coord,
        extent: Coord,
    },
    MoveCursor {
        id: RegionId,
        pos: Coord,
    },
    DrawBorder {
        id: RegionId,
        glyphs: BorderGlyphs,
    },
    SetBackground {
        id: RegionId,
        pair: PairId,
    },
    RegisterPair {
        pair: PairId,
        fg: Color,
        bg: Color,
    },
    Erase(RegionId),
    FlushRegion(RegionId),
    FlushDisplay,
    DropRegion(RegionId),
}

/// Backend that records commands instead of rendering
pub struct RecordingBackend {
    rows: i32,
    cols: i32,
    color: bool,
    /// Live regions mapped to their parent, for handle validation
    regions: HashMap<RegionId, Option<RegionId>>,
    next_id: u32,
    pub calls: Vec<Call>,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingBackend {
    /// Create a recording backend reporting a standard 24x80 display
    pub fn new() -> Self {
        Self::with_size(24, 80)
    }

    /// Create a recording backend reporting the given display size
    pub fn with_size(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            color: true,
            regions: HashMap::new(),
            next_id: 1,
            calls: Vec::new(),
        }
    }

    /// Report the display as monochrome
    pub fn monochrome(mut self) -> Self {
        self.color = false;
        self
    }

    /// Forget recorded calls, keeping live regions
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn check(&self, id: RegionId) -> Result<()> {
        if self.regions.contains_key(&id) {
            Ok(())
        } else {
            Err(Error::UnknownRegion(id))
        }
    }
}

impl Backend for RecordingBackend {
    fn display_size(&self) -> (i32, i32) {
        (self.rows, self.cols)
    }

    fn color_support(&self) -> bool {
        self.color
    }

    fn create_region(&mut self, origin: Coord, extent: Coord) -> Result<RegionId> {
        let id = RegionId(self.next_id);
        self.next_id += 1;
        self.regions.insert(id, None);
        self.calls.push(Call::CreateRegion { id, origin, extent });
        Ok(id)
    }

    fn create_child_region(
        &mut self,
        parent: RegionId,
        origin: Coord,
        extent: Coord,
    ) -> Result<RegionId> {
        if !self.regions.contains_key(&parent) {
            return Err(Error::InvalidParent(parent));
        }
        let id = RegionId(self.next_id);
        self.next_id += 1;
        self.regions.insert(id, Some(parent));
        self.calls.push(Call::CreateChildRegion {
            id,
            parent,
            origin,
            extent,
        });
        Ok(id)
    }

    fn move_cursor(&mut self, id: RegionId, pos: Coord) -> Result<()> {
        self.check(id)?;
        self.calls.push(Call::MoveCursor { id, pos });
        Ok(())
    }

    fn draw_border(&mut self, id: RegionId, glyphs: &BorderGlyphs) -> Result<()> {
        self.check(id)?;
        self.calls.push(Call::DrawBorder { id, glyphs: *glyphs });
        Ok(())
    }

    fn set_background(&mut self, id: RegionId, pair: PairId) -> Result<()> {
        self.check(id)?;
        self.calls.push(Call::SetBackground { id, pair });
        Ok(())
    }

    fn register_pair(&mut self, pair: PairId, fg: Color, bg: Color) -> Result<()> {
        self.calls.push(Call::RegisterPair { pair, fg, bg });
        Ok(())
    }

    fn erase(&mut self, id: RegionId) -> Result<()> {
        self.check(id)?;
        self.calls.push(Call::Erase(id));
        Ok(())
    }

    fn flush_region(&mut self, id: RegionId) -> Result<()> {
        self.check(id)?;
        self.calls.push(Call::FlushRegion(id));
        Ok(())
    }

    fn flush_display(&mut self) -> Result<()> {
        self.calls.push(Call::FlushDisplay);
        Ok(())
    }

    fn drop_region(&mut self, id: RegionId) -> Result<()> {
        self.check(id)?;
        if self.regions.values().any(|parent| *parent == Some(id)) {
            return Err(Error::ParentInUse(id));
        }
        self.regions.remove(&id);
        self.calls.push(Call::DropRegion(id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_issue_order() {
        let mut backend = RecordingBackend::new();
        let id = backend
            .create_region(Coord::new(0, 0), Coord::new(5, 5))
            .unwrap();
        backend.flush_display().unwrap();
        backend.flush_region(id).unwrap();

        assert_eq!(backend.calls.len(), 3);
        assert_eq!(backend.calls[1], Call::FlushDisplay);
        assert_eq!(backend.calls[2], Call::FlushRegion(id));
    }

    #[test]
    fn test_rejects_dangling_handles() {
        let mut backend = RecordingBackend::new();
        let ghost = RegionId(99);
        assert!(matches!(
            backend.flush_region(ghost),
            Err(Error::UnknownRegion(_))
        ));
        assert!(matches!(
            backend.create_child_region(ghost, Coord::new(0, 0), Coord::new(1, 1)),
            Err(Error::InvalidParent(_))
        ));
    }
}
