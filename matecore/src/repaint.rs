//! Repaint controller
//!
//! egui is an immediate-mode GUI: every frame redraws everything.  This
//! app is purely reactive — nothing on screen changes unless the user
//! typed, clicked, or resized — so idle frames are pure waste.
//!
//! `RepaintController` brackets the app's `update()`: `begin_frame`
//! clears any stale request, `mark_needs_repaint` records that state
//! changed outside an input event, and `end_frame` schedules exactly one
//! follow-up repaint when a request is pending.  With no request
//! pending, egui sleeps until the next input event.

/// Controls when the egui context should request repaints.
///
/// Drop this into the app struct; call [`begin_frame`](Self::begin_frame)
/// at the top of `update()` and [`end_frame`](Self::end_frame) at the
/// bottom.
pub struct RepaintController {
    /// Whether a one-shot repaint has been requested this frame.
    needs_repaint: bool,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self {
            needs_repaint: false,
        }
    }

    /// Request a single repaint on the next opportunity.
    ///
    /// Call this when state changes outside of user input — for example
    /// when a scene swap happens after the frame's UI code has run.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    /// Call at the **start** of `update()`.
    ///
    /// Clears any request left over from the previous frame; only marks
    /// made during the current frame survive to `end_frame`.
    pub fn begin_frame(&mut self) {
        self.needs_repaint = false;
    }

    /// Call at the **end** of `update()`.
    ///
    /// Schedules an immediate repaint when one was requested this frame;
    /// otherwise egui sleeps until the next input event.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        if self.needs_repaint {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_frame_requests_no_repaint() {
        let ctx = egui::Context::default();
        let mut rc = RepaintController::new();
        rc.begin_frame();
        rc.end_frame(&ctx);
        assert!(!ctx.has_requested_repaint());
    }

    #[test]
    fn marked_frame_requests_one_shot_repaint() {
        let ctx = egui::Context::default();
        let mut rc = RepaintController::new();
        rc.begin_frame();
        rc.mark_needs_repaint();
        rc.end_frame(&ctx);
        assert!(ctx.has_requested_repaint());
    }

    #[test]
    fn begin_frame_clears_stale_marks() {
        let ctx = egui::Context::default();
        let mut rc = RepaintController::new();
        rc.mark_needs_repaint();
        // Next frame starts: the old mark must not leak into it.
        rc.begin_frame();
        rc.end_frame(&ctx);
        assert!(!ctx.has_requested_repaint());
    }
}
