//! Ejecutor secuencial del plan.
//!
//! Invariantes:
//! - un step a la vez, sobre el mismo adapter;
//! - cada step se construye desde el catálogo justo antes de correr y se
//!   descarta al terminar;
//! - el primer error corta el plan: los steps posteriores nunca se intentan;
//! - sin reintentos (si los hay, son del step).

use std::time::Instant;

use tracing::{error, info};

use crate::adapter::DbAdapter;
use crate::constants::OPERATIONAL_LOGGER;
use crate::errors::PipelineError;
use crate::plan::ExecutionPlan;
use crate::step::{CompanyFilter, StepCatalog};

use super::RunReport;

pub struct PipelineExecutor<'c, C: StepCatalog + ?Sized> {
    catalog: &'c C,
}

impl<'c, C: StepCatalog + ?Sized> PipelineExecutor<'c, C> {
    pub fn new(catalog: &'c C) -> Self {
        Self { catalog }
    }

    /// Corre `plan` en orden contra `adapter`.
    ///
    /// Devuelve el `RunReport` si todos los steps terminan; en caso contrario
    /// `PipelineError::StepFailed` con el step que falló y la causa original.
    pub fn execute(&self,
                   plan: &ExecutionPlan,
                   adapter: &mut dyn DbAdapter,
                   empresas: &CompanyFilter)
                   -> Result<RunReport, PipelineError> {
        let started = Instant::now();
        let mut report = RunReport::default();
        info!(target: OPERATIONAL_LOGGER,
              "Plano com {} step(s): {} | empresas: {}",
              plan.len(),
              plan.steps().iter().map(|s| s.as_str()).collect::<Vec<_>>().join(" -> "),
              empresas);

        for (pos, &id) in plan.into_iter().enumerate() {
            info!(target: OPERATIONAL_LOGGER, "[{}/{}] Iniciando step {id}", pos + 1, plan.len());
            let step_started = Instant::now();
            let mut step = self.catalog.create(id, &mut *adapter);
            if let Err(source) = step.run(empresas) {
                error!(target: OPERATIONAL_LOGGER,
                       "[{}/{}] Step {id} falhou após {:.3}s: {source}",
                       pos + 1,
                       plan.len(),
                       step_started.elapsed().as_secs_f64());
                return Err(PipelineError::StepFailed { step: id, source });
            }
            let elapsed = step_started.elapsed();
            info!(target: OPERATIONAL_LOGGER,
                  "[{}/{}] Step {id} concluído em {:.3}s",
                  pos + 1,
                  plan.len(),
                  elapsed.as_secs_f64());
            report.record(id, elapsed);
        }

        report.finish(started.elapsed());
        Ok(report)
    }
}
