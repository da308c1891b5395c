/// Per-tick bookkeeping handed to policies by the [`Brain`](crate::Brain).
///
/// Wall-clock time is never consulted: anything time-driven reads
/// [`WorldSnapshot::elapsed_time`](crate::WorldSnapshot::elapsed_time), so tests control the clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: u64,
    pub dt_seconds: f32,
}

impl TickContext {
    pub fn new(tick: u64, dt_seconds: f32) -> Self {
        Self { tick, dt_seconds }
    }
}
