use showreel_core::ViewportSource;

/// Terminal window treated as a pixel viewport
///
/// Each column counts as `cell_width_px` pixels and each row as twice that,
/// roughly the aspect ratio of a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalViewport {
    columns: u16,
    cell_width_px: u32,
}

impl TerminalViewport {
    pub fn new(columns: u16, cell_width_px: u32) -> Self {
        Self {
            columns,
            cell_width_px: cell_width_px.max(1),
        }
    }

    /// Record a terminal resize
    pub fn resize(&mut self, columns: u16) {
        self.columns = columns;
    }

    /// Cell position to pixel position
    pub fn to_px(&self, column: u16, row: u16) -> (i32, i32) {
        let cell = self.cell_width_px as i32;
        (
            i32::from(column).saturating_mul(cell),
            i32::from(row).saturating_mul(cell * 2),
        )
    }
}

impl ViewportSource for TerminalViewport {
    fn viewport_width(&self) -> u32 {
        u32::from(self.columns).saturating_mul(self.cell_width_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_in_px() {
        let mut viewport = TerminalViewport::new(96, 8);
        assert_eq!(viewport.viewport_width(), 768);
        viewport.resize(80);
        assert_eq!(viewport.viewport_width(), 640);
    }

    #[test]
    fn test_to_px() {
        let viewport = TerminalViewport::new(100, 8);
        assert_eq!(viewport.to_px(3, 2), (24, 32));
    }

    #[test]
    fn test_zero_cell_width_floors() {
        let viewport = TerminalViewport::new(10, 0);
        assert_eq!(viewport.viewport_width(), 10);
    }
}
