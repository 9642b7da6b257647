//! Pool, sesión y catálogo en memoria para probar la orquestación.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use exclusao_core::{AdapterError, CompanyFilter, ConnectionPool, DbAdapter, Step, StepCatalog, StepError, StepId};
use exclusao_empresas::{run, ExecutionRequest, LogContext, Outcome};
use exclusao_persistence::DbConfig;

#[derive(Default)]
pub struct Ledger {
    pub pools_created: usize,
    pub borrowed: usize,
    pub released: usize,
    pub ran: Vec<(StepId, String)>,
}

pub type Shared = Rc<RefCell<Ledger>>;

pub struct FakeSession(Shared);

impl DbAdapter for FakeSession {
    fn execute(&mut self, _sql: &str) -> Result<(), AdapterError> {
        Ok(())
    }
    fn execute_with(&mut self, _sql: &str, _arg: &str) -> Result<usize, AdapterError> {
        Ok(0)
    }
    fn query_lines(&mut self, _sql: &str, _arg: &str) -> Result<Vec<String>, AdapterError> {
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

impl Drop for FakeSession {
    fn drop(&mut self) {
        self.0.borrow_mut().released += 1;
    }
}

pub struct FakePool {
    pub ledger: Shared,
    pub refuse: bool,
}

impl ConnectionPool for FakePool {
    type Session = FakeSession;

    fn borrow(&self) -> Result<FakeSession, AdapterError> {
        if self.refuse {
            return Err(AdapterError::Connection("connection refused".into()));
        }
        self.ledger.borrow_mut().borrowed += 1;
        Ok(FakeSession(self.ledger.clone()))
    }
}

#[derive(Clone, Copy)]
pub enum Fault {
    None,
    Error(StepId),
    Panic(StepId),
}

pub struct FakeCatalog {
    pub ledger: Shared,
    pub fault: Fault,
}

struct FakeStep<'a> {
    id: StepId,
    adapter: &'a mut dyn DbAdapter,
    ledger: Shared,
    fault: Fault,
}

impl Step for FakeStep<'_> {
    fn id(&self) -> StepId {
        self.id
    }

    fn run(&mut self, empresas: &CompanyFilter) -> Result<(), StepError> {
        self.adapter.execute("SELECT 1")?;
        self.ledger.borrow_mut().ran.push((self.id, empresas.as_str().to_string()));
        match self.fault {
            Fault::Error(id) if id == self.id => Err(StepError::Failed(format!("{id} quebrou"))),
            Fault::Panic(id) if id == self.id => panic!("bug em {id}"),
            _ => Ok(()),
        }
    }
}

impl StepCatalog for FakeCatalog {
    fn create<'a>(&self, id: StepId, adapter: &'a mut dyn DbAdapter) -> Box<dyn Step + 'a> {
        Box::new(FakeStep { id,
                            adapter,
                            ledger: self.ledger.clone(),
                            fault: self.fault })
    }
}

pub fn request(step: &str, empresas: &str) -> ExecutionRequest {
    ExecutionRequest { step: step.to_string(),
                       empresas: CompanyFilter::new(empresas),
                       db: DbConfig::new("erp") }
}

pub fn invoke(logs: &LogContext, step: &str, empresas: &str, fault: Fault, refuse: bool) -> (Outcome, Shared) {
    let ledger = Shared::default();
    let catalog = FakeCatalog { ledger: ledger.clone(),
                                fault };
    let outcome = run(&request(step, empresas), logs, &catalog, |cfg| {
        assert_eq!(cfg.max_connections, 1);
        ledger.borrow_mut().pools_created += 1;
        Ok(FakePool { ledger: ledger.clone(),
                      refuse })
    });
    (outcome, ledger)
}
