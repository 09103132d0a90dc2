//! # Manipulation State
//!
//! Tracks which transform the gizmo applies and whether a handle is being
//! dragged. The active axis and the drag anchor only exist inside
//! [`DragState::Dragging`], so "dragging without an axis" cannot be
//! represented.

use cgmath::Vector3;

/// Which transform the gizmo applies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Translate, Mode::Rotate, Mode::Scale];

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Translate => "Translate",
            Mode::Rotate => "Rotate",
            Mode::Scale => "Scale",
        }
    }
}

/// A world axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Hit-test priority order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Unit basis vector
    pub fn direction(&self) -> Vector3<f32> {
        match self {
            Axis::X => Vector3::unit_x(),
            Axis::Y => Vector3::unit_y(),
            Axis::Z => Vector3::unit_z(),
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// Drag state of the gizmo
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        axis: Axis,
        /// Ray sample from the previous frame; deltas are measured from here
        anchor: Vector3<f32>,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn active_axis(&self) -> Option<Axis> {
        match self {
            DragState::Dragging { axis, .. } => Some(*axis),
            DragState::Idle => None,
        }
    }

    pub fn anchor(&self) -> Option<Vector3<f32>> {
        match self {
            DragState::Dragging { anchor, .. } => Some(*anchor),
            DragState::Idle => None,
        }
    }
}

/// Mode plus drag state, one per editor session
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ManipulationState {
    pub mode: Mode,
    pub drag: DragState,
}

impl ManipulationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch mode. An ongoing drag is left alone; the new mode only changes
    /// which handles the next press tests and how the drag is applied.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn begin_drag(&mut self, axis: Axis, anchor: Vector3<f32>) {
        self.drag = DragState::Dragging { axis, anchor };
    }

    /// Move the anchor of an ongoing drag; no-op while idle
    pub fn advance_anchor(&mut self, new_anchor: Vector3<f32>) {
        if let DragState::Dragging { anchor, .. } = &mut self.drag {
            *anchor = new_anchor;
        }
    }

    /// Back to neutral
    pub fn reset(&mut self) {
        self.drag = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn active_axis(&self) -> Option<Axis> {
        self.drag.active_axis()
    }

    /// Whether `axis` should be drawn highlighted
    pub fn is_highlighted(&self, axis: Axis) -> bool {
        self.active_axis() == Some(axis)
    }
}

/// Coarse editor state derived from selection and drag state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Nothing selected
    Idle,
    /// An object is selected, no handle is grabbed
    Selected(usize),
    /// A handle of the selected object is being dragged
    Dragging(usize, Axis),
}

impl EditorState {
    pub fn derive(selection: Option<usize>, manipulation: &ManipulationState) -> Self {
        match (selection, manipulation.drag) {
            (None, _) => EditorState::Idle,
            (Some(index), DragState::Idle) => EditorState::Selected(index),
            (Some(index), DragState::Dragging { axis, .. }) => EditorState::Dragging(index, axis),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = ManipulationState::new();
        assert_eq!(state.mode, Mode::Translate);
        assert!(!state.is_dragging());
        assert_eq!(state.active_axis(), None);
    }

    #[test]
    fn test_dragging_and_axis_move_together() {
        let mut state = ManipulationState::new();
        state.begin_drag(Axis::Y, Vector3::new(0.0, 1.0, 0.0));
        assert!(state.is_dragging());
        assert_eq!(state.active_axis(), Some(Axis::Y));

        state.reset();
        assert!(!state.is_dragging());
        assert_eq!(state.active_axis(), None);
        assert_eq!(state.drag.anchor(), None);
    }

    #[test]
    fn test_mode_change_keeps_drag() {
        let mut state = ManipulationState::new();
        state.begin_drag(Axis::Z, Vector3::new(0.0, 0.0, 0.0));
        state.set_mode(Mode::Scale);
        assert_eq!(state.mode, Mode::Scale);
        assert_eq!(state.active_axis(), Some(Axis::Z));
    }

    #[test]
    fn test_advance_anchor_while_idle_is_noop() {
        let mut state = ManipulationState::new();
        state.advance_anchor(Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(state.drag, DragState::Idle);
    }

    #[test]
    fn test_highlight_follows_active_axis() {
        let mut state = ManipulationState::new();
        assert!(!state.is_highlighted(Axis::X));
        state.begin_drag(Axis::X, Vector3::new(0.0, 0.0, 0.0));
        assert!(state.is_highlighted(Axis::X));
        assert!(!state.is_highlighted(Axis::Y));
    }

    #[test]
    fn test_editor_state_derivation() {
        let mut state = ManipulationState::new();
        assert_eq!(EditorState::derive(None, &state), EditorState::Idle);
        assert_eq!(EditorState::derive(Some(2), &state), EditorState::Selected(2));

        state.begin_drag(Axis::X, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(
            EditorState::derive(Some(2), &state),
            EditorState::Dragging(2, Axis::X)
        );
    }
}
