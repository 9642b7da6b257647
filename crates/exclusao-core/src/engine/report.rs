use std::time::{Duration, Instant};

use crate::step::StepId;

/// Resultado de una ejecución completa: duración por step y total.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    steps: Vec<(StepId, Duration)>,
    total: Duration,
}

impl RunReport {
    pub(crate) fn record(&mut self, id: StepId, elapsed: Duration) {
        self.steps.push((id, elapsed));
    }

    pub(crate) fn finish(&mut self, total: Duration) {
        self.total = total;
    }

    /// Steps ejecutados, en orden de ejecución.
    pub fn steps(&self) -> &[(StepId, Duration)] {
        &self.steps
    }

    pub fn executed(&self) -> Vec<StepId> {
        self.steps.iter().map(|(id, _)| *id).collect()
    }

    pub fn total(&self) -> Duration {
        self.total
    }
}

/// Cronómetro que reporta el tiempo transcurrido al soltarse.
///
/// Se usa como bloque `finally`: el callback corre exactamente una vez,
/// tanto en el camino feliz como si se sale por `?` o por un error.
pub struct ElapsedTimer<F: FnOnce(Duration)> {
    started: Instant,
    on_drop: Option<F>,
}

impl<F: FnOnce(Duration)> ElapsedTimer<F> {
    pub fn start(on_drop: F) -> Self {
        Self { started: Instant::now(),
               on_drop: Some(on_drop) }
    }
}

impl<F: FnOnce(Duration)> Drop for ElapsedTimer<F> {
    fn drop(&mut self) {
        if let Some(report) = self.on_drop.take() {
            report(self.started.elapsed());
        }
    }
}
