/// Skips redraws while the snapshot fingerprint is unchanged.
///
/// An unchanged frame is still redrawn every `refresh_ms` so a terminal that
/// lost its contents recovers without user input.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    refresh_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(refresh_ms: u64) -> Self {
        Self {
            refresh_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Decide whether to render a frame with `fingerprint` at `now_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let due = match self.last_fingerprint {
            None => true,
            Some(last) if last != fingerprint => true,
            Some(_) => now_ms.saturating_sub(self.last_render_ms) >= self.refresh_ms,
        };
        if due {
            self.last_render_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
        }
        due
    }

    /// Make the next call render unconditionally.
    pub fn force(&mut self) {
        self.last_fingerprint = None;
    }
}
