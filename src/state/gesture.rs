// Drag/touch gesture tracking shared by both input paths.
use crate::model::SwapCommand;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// HTML5 drag and drop (mouse / pen).
    Pointer,
    Touch,
}

impl InputKind {
    /// Whether the source cell is hidden while the gesture runs. Touch keeps it
    /// visible so `elementFromPoint` still finds it under the finger.
    pub fn hides_source(self) -> bool {
        matches!(self, InputKind::Pointer)
    }
}

/// Visual stand-in for the tile being dragged. Dropping it must release it.
pub trait DragGhost {
    /// Called with the latest touch point in client coordinates.
    fn follow(&mut self, _x: f64, _y: f64) {}
}

impl<G: DragGhost> DragGhost for Option<G> {
    fn follow(&mut self, x: f64, y: f64) {
        if let Some(g) = self {
            g.follow(x, y);
        }
    }
}

struct ActiveGesture<G> {
    kind: InputKind,
    source: usize,
    target: Option<usize>,
    /// `Touch.identifier` of the finger that started a touch gesture.
    touch_id: Option<i32>,
    ghost: G,
}

/// At most one gesture is live; ending it in any way drops its ghost.
pub struct Gesture<G> {
    active: Option<ActiveGesture<G>>,
}

impl<G> Default for Gesture<G> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<G: DragGhost> Gesture<G> {
    /// Starts tracking from `source`. A previous gesture, if any, is discarded.
    pub fn begin(&mut self, kind: InputKind, source: usize, ghost: G) {
        self.active = Some(ActiveGesture {
            kind,
            source,
            target: None,
            touch_id: None,
            ghost,
        });
    }

    /// Starts a touch gesture owned by the finger `touch_id`.
    pub fn begin_touch(&mut self, source: usize, touch_id: i32, ghost: G) {
        self.begin(InputKind::Touch, source, ghost);
        if let Some(active) = self.active.as_mut() {
            active.touch_id = Some(touch_id);
        }
    }

    /// True if `touch_id` is the finger driving the live touch gesture.
    pub fn owns_touch(&self, touch_id: i32) -> bool {
        self.active
            .as_ref()
            .is_some_and(|a| a.kind == InputKind::Touch && a.touch_id == Some(touch_id))
    }

    pub fn kind(&self) -> Option<InputKind> {
        self.active.as_ref().map(|a| a.kind)
    }

    pub fn source(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.source)
    }

    pub fn target(&self) -> Option<usize> {
        self.active.as_ref().and_then(|a| a.target)
    }

    /// Touch move. The ghost follows the finger; a hovered tile becomes the target.
    pub fn track(&mut self, x: f64, y: f64, hovered: Option<usize>) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.kind != InputKind::Touch {
            return;
        }
        active.ghost.follow(x, y);
        if let Some(i) = hovered {
            active.target = Some(i);
        }
    }

    /// Pointer drop on `target`. Ends the gesture.
    pub fn drop_on(&mut self, target: usize) -> Option<SwapCommand> {
        let active = self.active.take()?;
        (active.source != target).then_some(SwapCommand {
            from: active.source,
            to: target,
        })
    }

    /// Touch end. Swaps with the last hovered tile, if it differs from the source.
    pub fn finish(&mut self) -> Option<SwapCommand> {
        let active = self.active.take()?;
        match active.target {
            Some(to) if to != active.source => Some(SwapCommand {
                from: active.source,
                to,
            }),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }
}
