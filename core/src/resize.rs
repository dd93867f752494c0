//! Drag-to-resize state for the terminal panel.
//!
//! Heights and coordinates are in the same unit as the viewport (terminal rows
//! in the TUI). The pointer coordinate is signed so samples from above the
//! screen clamp instead of wrapping.

/// Bounds applied to every height update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeLimits {
    pub min_height: u16,
    /// Rows kept free above the panel (title bar, tab bar, a sliver of editor)
    pub reserved_chrome: u16,
}

impl Default for ResizeLimits {
    fn default() -> Self {
        Self {
            min_height: 6,
            reserved_chrome: 4,
        }
    }
}

impl ResizeLimits {
    /// Largest allowed height for a viewport. Never below `min_height`.
    pub fn max_height(&self, viewport_height: u16) -> u16 {
        viewport_height
            .saturating_sub(self.reserved_chrome)
            .max(self.min_height)
    }

    pub fn clamp(&self, height: i32, viewport_height: u16) -> u16 {
        let max = i32::from(self.max_height(viewport_height));
        let min = i32::from(self.min_height);
        // min wins if the viewport is too small to honour both bounds
        height.min(max).max(min) as u16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Dragging,
}

/// Panel height plus the idle/dragging gesture machine
#[derive(Debug, Clone)]
pub struct PanelResize {
    limits: ResizeLimits,
    height: u16,
    state: GestureState,
}

impl PanelResize {
    pub fn new(initial_height: u16, limits: ResizeLimits) -> Self {
        Self {
            limits,
            height: initial_height.max(limits.min_height),
            state: GestureState::Idle,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn limits(&self) -> ResizeLimits {
        self.limits
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == GestureState::Dragging
    }

    pub fn begin(&mut self) {
        self.state = GestureState::Dragging;
    }

    /// Apply a pointer sample. Ignored unless a drag is in progress.
    pub fn drag_to(&mut self, pointer_y: i32, viewport_height: u16) -> bool {
        if self.state != GestureState::Dragging {
            return false;
        }
        let from_bottom = i32::from(viewport_height).saturating_sub(pointer_y);
        self.height = self.limits.clamp(from_bottom, viewport_height);
        true
    }

    pub fn end(&mut self) {
        self.state = GestureState::Idle;
    }

    /// Keyboard resize: grow (positive) or shrink (negative) by `delta` rows
    pub fn nudge(&mut self, delta: i32, viewport_height: u16) {
        let target = i32::from(self.height).saturating_add(delta);
        self.height = self.limits.clamp(target, viewport_height);
    }

    /// Re-apply the bounds after the viewport changed size
    pub fn fit(&mut self, viewport_height: u16) {
        self.height = self.limits.clamp(i32::from(self.height), viewport_height);
    }
}
