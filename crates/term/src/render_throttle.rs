//! Frame pacing for the runner loop.

/// Decides whether the runner should redraw.
///
/// While the simulation runs every frame is drawn. While it is paused a frame is
/// drawn when the session fingerprint changes, and otherwise at most once per
/// `min_static_interval_ms` so a resized or scribbled-on terminal recovers.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last: Option<LastFrame>,
}

#[derive(Debug, Clone, Copy)]
struct LastFrame {
    at_ms: u64,
    fingerprint: u64,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last: None,
        }
    }

    /// Forget the last frame so the next call always renders.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// `fingerprint` is only evaluated while paused, after the first frame.
    pub fn should_render(
        &mut self,
        now_ms: u64,
        fingerprint: impl FnOnce() -> u64,
        paused: bool,
    ) -> bool {
        let (render, fingerprint) = match self.last {
            None => (true, if paused { fingerprint() } else { 0 }),
            Some(_) if !paused => (true, 0),
            Some(last) => {
                let fp = fingerprint();
                let due = fp != last.fingerprint
                    || now_ms.saturating_sub(last.at_ms) >= self.min_static_interval_ms;
                (due, fp)
            }
        };
        if render {
            self.last = Some(LastFrame {
                at_ms: now_ms,
                fingerprint,
            });
        }
        render
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidate_forces_next_frame() {
        let mut t = RenderThrottle::new(1_000);
        assert!(t.should_render(0, || 7, true));
        assert!(!t.should_render(5, || 7, true));
        t.invalidate();
        assert!(t.should_render(6, || 7, true));
    }

    #[test]
    fn running_frames_skip_the_fingerprint() {
        let mut t = RenderThrottle::new(1_000);
        for now in 0..5 {
            assert!(t.should_render(now, || panic!("hashed while running"), false));
        }
    }
}
