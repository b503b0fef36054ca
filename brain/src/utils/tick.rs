use log::warn;
use std::time::Instant;

/// The game's physics runs at 120 Hz, which leaves ~8ms to make a decision.
const BUDGET_MS: u128 = 8;

/// Soft per-tick time budget. Going over is logged and otherwise ignored —
/// the next tick starts fresh regardless.
pub struct TickBudget {
    name: &'static str,
    start: Instant,
}

impl TickBudget {
    pub fn start(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    pub fn finish(self) {
        let ms = self.start.elapsed().as_millis();
        if ms >= BUDGET_MS {
            warn!("{} slow tick took {}ms", self.name, ms);
        }
    }
}
