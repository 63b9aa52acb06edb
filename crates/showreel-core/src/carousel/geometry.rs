
/// Fixed pagination parameters of one carousel
///
/// `len` is the number of slides, `visible` the desktop window width and
/// `groups` the number of mobile indicator dots. Window and group counts are
/// kept at one or more so the arithmetic below never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideGeometry {
    len: usize,
    visible: usize,
    groups: usize,
}

impl SlideGeometry {
    pub fn new(len: usize, visible: usize, groups: usize) -> Self {
        Self {
            len,
            visible: visible.max(1),
            groups: groups.max(1),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn visible_count(&self) -> usize {
        self.visible
    }

    #[inline]
    pub fn group_count(&self) -> usize {
        self.groups
    }

    /// Last valid single-slide index (0 when empty)
    #[inline]
    pub fn max_mobile_index(&self) -> usize {
        self.len.saturating_sub(1)
    }

    /// Last valid left edge of the desktop window
    #[inline]
    pub fn max_desktop_index(&self) -> usize {
        self.len.saturating_sub(self.visible)
    }

    /// Slides represented by each indicator dot, rounded up
    #[inline]
    pub fn slides_per_group(&self) -> usize {
        self.len.div_ceil(self.groups)
    }

    /// Same slide list with a different length
    pub fn with_len(self, len: usize) -> Self {
        Self { len, ..self }
    }
}
