use crate::constants::MAX_CATCH_UP_STEPS;

/// Steps owed to each driver for one host frame. Simulation steps run
/// first, then countdown steps, never interleaved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DueSteps {
    pub simulation: u32,
    pub countdown: u32,
}

/// Turns host timestamps into a fixed-cadence schedule for the two drivers.
pub struct RunLoop {
    tick_rate: u32,
    countdown_rate: u32,
    last_ms: Option<f64>,
    simulation_accum_ms: f64,
    countdown_accum_ms: f64,
}

impl RunLoop {
    pub fn new(tick_rate: u32, countdown_rate: u32) -> Self {
        Self {
            tick_rate: tick_rate.max(1),
            countdown_rate: countdown_rate.max(1),
            last_ms: None,
            simulation_accum_ms: 0.0,
            countdown_accum_ms: 0.0,
        }
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    pub fn set_tick_rate(&mut self, tick_rate: u32) {
        self.tick_rate = tick_rate.max(1);
    }

    pub fn countdown_rate(&self) -> u32 {
        self.countdown_rate
    }

    /// Forget the last timestamp; the next `advance` only re-establishes the baseline.
    pub fn reset(&mut self) {
        self.last_ms = None;
        self.simulation_accum_ms = 0.0;
        self.countdown_accum_ms = 0.0;
    }

    pub fn advance(&mut self, now_ms: f64) -> DueSteps {
        let elapsed = match self.last_ms {
            Some(last) if now_ms > last => now_ms - last,
            _ => 0.0,
        };
        self.last_ms = Some(now_ms);

        self.simulation_accum_ms += elapsed;
        self.countdown_accum_ms += elapsed;

        let simulation_interval = 1000.0 / self.tick_rate as f64;
        let mut simulation = 0;
        while self.simulation_accum_ms >= simulation_interval {
            if simulation == MAX_CATCH_UP_STEPS {
                // Drop the backlog instead of spiralling after a stall
                self.simulation_accum_ms = 0.0;
                break;
            }
            self.simulation_accum_ms -= simulation_interval;
            simulation += 1;
        }

        let countdown_interval = 1000.0 / self.countdown_rate as f64;
        let mut countdown = 0;
        while self.countdown_accum_ms >= countdown_interval {
            self.countdown_accum_ms -= countdown_interval;
            countdown += 1;
        }

        DueSteps {
            simulation,
            countdown,
        }
    }
}
