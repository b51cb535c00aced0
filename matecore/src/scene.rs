//! Scene navigation
//!
//! A scene is one full-window layout plus the state behind it.  The app
//! host owns exactly one scene at a time; switching scenes drops the old
//! one, so every scene's state lives and dies with its screen.
//!
//! There is no global scene manager.  The host hands the active scene a
//! `&mut Navigator` each frame; the scene files a switch request through
//! it and the host applies the request synchronously once the frame's UI
//! code has finished.

/// Identifier for each known scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneId {
    /// Landing screen: resizable image + navigation button.
    Primary,
    /// Arithmetic screen: two operands, operator dropdown, result.
    Secondary,
}

/// One full-window screen.
///
/// Construction is the "bound" moment: widget defaults (selected operator,
/// empty inputs) are set in the constructor, and `ui` is called once per
/// frame for as long as the scene is active.
pub trait Scene {
    fn id(&self) -> SceneId;

    /// Draw the scene for this frame.  Navigation requests go through `nav`.
    fn ui(&mut self, ctx: &egui::Context, nav: &mut Navigator);
}

/// Tracks which scene is active and collects switch requests.
///
/// Scenes never swap themselves while their own `ui` is still on the
/// stack; `request` only records the target and the host drains it with
/// [`take_pending`](Navigator::take_pending) after the frame.
pub struct Navigator {
    current: SceneId,
    pending: Option<SceneId>,
}

impl Navigator {
    pub fn new(initial: SceneId) -> Self {
        Self {
            current: initial,
            pending: None,
        }
    }

    /// The scene currently being displayed.
    pub fn current(&self) -> SceneId {
        self.current
    }

    /// Ask to switch to `id` at the end of the current frame.
    pub fn request(&mut self, id: SceneId) {
        self.pending = Some(id);
    }

    /// Drain the pending request, if any.
    ///
    /// Marks the returned scene as current.  Requests for the scene that
    /// is already current are dropped here, so the host never rebuilds a
    /// scene for a no-op switch.
    pub fn take_pending(&mut self) -> Option<SceneId> {
        let next = self.pending.take()?;
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }
}
