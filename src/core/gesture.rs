/// Minimum horizontal pointer travel (CSS pixels) for a drag to register
/// as navigation; anything at or under this is treated as a click.
pub const DRAG_THRESHOLD_PX: f32 = 75.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    Advance,
    Retreat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum DragPhase {
    #[default]
    Idle,
    Dragging {
        start_x: f32,
        current_x: f32,
    },
}

/// Pointer-drag state machine over the scene surface.
///
/// Transitions are pure with respect to the DOM: the event-wiring layer is
/// responsible for not calling [`DragTracker::pointer_down`] when the
/// pointer went down on an interactive control (navigation buttons resolve
/// through their own click handlers).
#[derive(Clone, Copy, Debug)]
pub struct DragTracker {
    phase: DragPhase,
    threshold: f32,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD_PX)
    }
}

impl DragTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            phase: DragPhase::Idle,
            threshold,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn pointer_down(&mut self, x: f32) {
        self.phase = DragPhase::Dragging {
            start_x: x,
            current_x: x,
        };
    }

    /// Updates the tracked position; emits nothing until release.
    pub fn pointer_move(&mut self, x: f32) {
        if let DragPhase::Dragging { current_x, .. } = &mut self.phase {
            *current_x = x;
        }
    }

    /// Resolve the session. A leftward drag past the threshold advances
    /// (pulls the next item in), a rightward one retreats.
    pub fn pointer_up(&mut self) -> Option<NavCommand> {
        let DragPhase::Dragging { start_x, current_x } = self.phase else {
            return None;
        };
        self.phase = DragPhase::Idle;
        let delta = current_x - start_x;
        if delta.abs() > self.threshold {
            if delta < 0.0 {
                Some(NavCommand::Advance)
            } else {
                Some(NavCommand::Retreat)
            }
        } else {
            None
        }
    }

    /// Leaving the surface mid-drag resolves like a release; otherwise a
    /// no-op.
    pub fn pointer_leave(&mut self) -> Option<NavCommand> {
        if self.is_dragging() {
            self.pointer_up()
        } else {
            None
        }
    }
}
