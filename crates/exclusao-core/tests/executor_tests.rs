//! Ejecución de planes con un catálogo que registra cada step construido.

use std::cell::RefCell;
use std::rc::Rc;

use exclusao_core::{resolve, AdapterError, CompanyFilter, DbAdapter, ExecutionPlan, PipelineError, PipelineExecutor,
                    Step, StepCatalog, StepError, StepId};

#[derive(Default)]
struct Calls {
    created: Vec<StepId>,
    ran: Vec<(StepId, String)>,
    adapter_hits: usize,
}

/// Adapter en memoria: cuenta las sentencias que le llegan.
#[derive(Default)]
struct CountingAdapter {
    statements: usize,
}

impl DbAdapter for CountingAdapter {
    fn execute(&mut self, _sql: &str) -> Result<(), AdapterError> {
        self.statements += 1;
        Ok(())
    }
    fn execute_with(&mut self, _sql: &str, _arg: &str) -> Result<usize, AdapterError> {
        self.statements += 1;
        Ok(0)
    }
    fn query_lines(&mut self, _sql: &str, _arg: &str) -> Result<Vec<String>, AdapterError> {
        self.statements += 1;
        Ok(vec![])
    }
    fn begin(&mut self) -> Result<(), AdapterError> {
        Ok(())
    }
    fn commit(&mut self) -> Result<(), AdapterError> {
        Ok(())
    }
    fn rollback(&mut self) -> Result<(), AdapterError> {
        Ok(())
    }
}

struct RecordingStep<'a> {
    id: StepId,
    adapter: &'a mut dyn DbAdapter,
    calls: Rc<RefCell<Calls>>,
    fail: bool,
}

impl Step for RecordingStep<'_> {
    fn id(&self) -> StepId {
        self.id
    }

    fn run(&mut self, empresas: &CompanyFilter) -> Result<(), StepError> {
        self.adapter.execute("SELECT 1")?;
        let mut calls = self.calls.borrow_mut();
        calls.adapter_hits += 1;
        calls.ran.push((self.id, empresas.as_str().to_string()));
        if self.fail {
            return Err(StepError::Failed(format!("{} falhou", self.id)));
        }
        Ok(())
    }
}

struct RecordingCatalog {
    calls: Rc<RefCell<Calls>>,
    failing: Option<StepId>,
}

impl RecordingCatalog {
    fn new(failing: Option<StepId>) -> Self {
        Self { calls: Rc::new(RefCell::new(Calls::default())),
               failing }
    }
}

impl StepCatalog for RecordingCatalog {
    fn create<'a>(&self, id: StepId, adapter: &'a mut dyn DbAdapter) -> Box<dyn Step + 'a> {
        self.calls.borrow_mut().created.push(id);
        Box::new(RecordingStep { id,
                                 adapter,
                                 calls: self.calls.clone(),
                                 fail: self.failing == Some(id) })
    }
}

#[test]
fn single_step_receives_raw_filter_once() {
    let catalog = RecordingCatalog::new(None);
    let mut adapter = CountingAdapter::default();
    let plan = resolve("exclusao").unwrap();

    let report = PipelineExecutor::new(&catalog).execute(&plan, &mut adapter, &CompanyFilter::new("10,20"))
                                                .expect("plan ok");

    let calls = catalog.calls.borrow();
    assert_eq!(calls.created, vec![StepId::Exclusao]);
    assert_eq!(calls.ran, vec![(StepId::Exclusao, "10,20".to_string())]);
    assert_eq!(report.executed(), vec![StepId::Exclusao]);
    assert_eq!(adapter.statements, 1);
}

#[test]
fn all_steps_run_once_in_resolution_order() {
    let catalog = RecordingCatalog::new(None);
    let mut adapter = CountingAdapter::default();
    let plan = ExecutionPlan::basic_process();

    let report = PipelineExecutor::new(&catalog).execute(&plan, &mut adapter, &CompanyFilter::default())
                                                .unwrap();

    let calls = catalog.calls.borrow();
    let ran: Vec<StepId> = calls.ran.iter().map(|(id, _)| *id).collect();
    assert_eq!(ran, plan.steps());
    assert_eq!(calls.created, plan.steps());
    assert_eq!(report.executed(), plan.steps());
    assert_eq!(calls.adapter_hits, plan.len());
    assert!(report.total() >= report.steps().iter().map(|(_, d)| *d).sum::<std::time::Duration>());
}

#[test]
fn failure_at_step_k_stops_the_plan() {
    let plan = ExecutionPlan::basic_process();
    for (k, &failing) in plan.steps().iter().enumerate() {
        let catalog = RecordingCatalog::new(Some(failing));
        let mut adapter = CountingAdapter::default();

        let err = PipelineExecutor::new(&catalog).execute(&plan, &mut adapter, &CompanyFilter::new("7"))
                                                 .unwrap_err();

        match err {
            PipelineError::StepFailed { step, source: StepError::Failed(msg) } => {
                assert_eq!(step, failing);
                assert!(msg.contains(failing.as_str()));
            }
            other => panic!("esperaba StepFailed, obtuve {other:?}"),
        }
        let calls = catalog.calls.borrow();
        let ran: Vec<StepId> = calls.ran.iter().map(|(id, _)| *id).collect();
        assert_eq!(ran, &plan.steps()[..=k], "steps 1..=k corren una vez; el resto nunca");
        assert_eq!(calls.created.len(), k + 1);
    }
}

#[test]
fn adapter_errors_surface_with_step_context() {
    struct BrokenAdapter;
    impl DbAdapter for BrokenAdapter {
        fn execute(&mut self, _sql: &str) -> Result<(), AdapterError> {
            Err(AdapterError::Connection("server closed the connection".into()))
        }
        fn execute_with(&mut self, _sql: &str, _arg: &str) -> Result<usize, AdapterError> {
            unreachable!()
        }
        fn query_lines(&mut self, _sql: &str, _arg: &str) -> Result<Vec<String>, AdapterError> {
            unreachable!()
        }
        fn begin(&mut self) -> Result<(), AdapterError> {
            Ok(())
        }
        fn commit(&mut self) -> Result<(), AdapterError> {
            Ok(())
        }
        fn rollback(&mut self) -> Result<(), AdapterError> {
            Ok(())
        }
    }

    let catalog = RecordingCatalog::new(None);
    let plan = resolve("processo_basico").unwrap();
    let err = PipelineExecutor::new(&catalog).execute(&plan, &mut BrokenAdapter, &CompanyFilter::default())
                                             .unwrap_err();

    assert!(matches!(&err,
                     PipelineError::StepFailed { step: StepId::MelhoriasModelagem,
                                                 source: StepError::Adapter(AdapterError::Connection(_)) }));
    assert!(catalog.calls.borrow().ran.is_empty());
    assert_eq!(catalog.calls.borrow().created, vec![StepId::MelhoriasModelagem]);
}
