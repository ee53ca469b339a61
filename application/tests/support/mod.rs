#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use error_stack::Report;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnLoanQuery, DependOnNotebookQuery, DependOnSanctionQuery, DependOnStudentQuery,
    LoanQuery, NotebookQuery, SanctionQuery, StudentQuery,
};
use kernel::interface::update::{
    DependOnLoanModifier, DependOnNotebookModifier, DependOnSanctionModifier,
    DependOnStudentModifier, LoanModifier, NotebookModifier, SanctionModifier, StudentModifier,
};
use kernel::prelude::entity::{
    BeginDate, FinishDate, IsAvailable, IsBlocked, Loan, LoanId, LoanState, Notebook,
    NotebookBrand, NotebookId, NotebookModel, NotebookSerialNumber, Sanction,
    SanctionDescription, SanctionId, Student, StudentCampus, StudentCareer, StudentDv,
    StudentEmail, StudentId, StudentLastname, StudentName, StudentPhone, StudentRut, Version,
};
use kernel::KernelError;

#[derive(Debug, Clone, Default)]
struct MemoryState {
    students: HashMap<i32, Student>,
    notebooks: HashMap<Uuid, Notebook>,
    loans: HashMap<Uuid, Loan>,
    sanctions: HashMap<Uuid, Sanction>,
}

/// Port implementation backed by shared in-process maps. A transaction
/// works on a snapshot and publishes it on commit, so dropped or failed
/// transactions leave the committed state untouched.
#[derive(Clone, Default)]
pub struct MemoryDatabase {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_student(&self, student: Student) {
        let mut state = self.state.lock().unwrap();
        state.students.insert(*student.rut().as_ref(), student);
    }

    pub fn seed_notebook(&self, notebook: Notebook) {
        let mut state = self.state.lock().unwrap();
        state.notebooks.insert(*notebook.id().as_ref(), notebook);
    }

    pub fn seed_sanction(&self, sanction: Sanction) {
        let mut state = self.state.lock().unwrap();
        state.sanctions.insert(*sanction.id().as_ref(), sanction);
    }

    pub fn committed_student(&self, rut: i32) -> Option<Student> {
        self.state.lock().unwrap().students.get(&rut).cloned()
    }

    pub fn committed_notebook(&self, id: &NotebookId) -> Option<Notebook> {
        self.state.lock().unwrap().notebooks.get(id.as_ref()).cloned()
    }

    pub fn committed_loans(&self) -> Vec<Loan> {
        self.state.lock().unwrap().loans.values().cloned().collect()
    }

    pub fn committed_sanctions(&self) -> Vec<Sanction> {
        self.state
            .lock()
            .unwrap()
            .sanctions
            .values()
            .cloned()
            .collect()
    }
}

pub struct MemoryTransaction {
    working: MemoryState,
    origin: Arc<Mutex<MemoryState>>,
}

#[async_trait::async_trait]
impl Transaction for MemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        *self.origin.lock().unwrap() = self.working;
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<MemoryTransaction> for MemoryDatabase {
    async fn transact(&self) -> error_stack::Result<MemoryTransaction, KernelError> {
        let working = self.state.lock().unwrap().clone();
        Ok(MemoryTransaction {
            working,
            origin: Arc::clone(&self.state),
        })
    }
}

pub struct MemoryRepository;

#[async_trait::async_trait]
impl StudentQuery<MemoryTransaction> for MemoryRepository {
    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &StudentId,
    ) -> error_stack::Result<Option<Student>, KernelError> {
        Ok(con
            .working
            .students
            .values()
            .find(|student| student.id() == id)
            .cloned())
    }

    async fn find_by_rut(
        &self,
        con: &mut MemoryTransaction,
        rut: &StudentRut,
    ) -> error_stack::Result<Option<Student>, KernelError> {
        Ok(con.working.students.get(rut.as_ref()).cloned())
    }

    async fn find_blocked(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<Student>, KernelError> {
        Ok(con
            .working
            .students
            .values()
            .filter(|student| *student.blocked().as_ref())
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl StudentModifier<MemoryTransaction> for MemoryRepository {
    async fn create(
        &self,
        con: &mut MemoryTransaction,
        student: &Student,
    ) -> error_stack::Result<(), KernelError> {
        con.working
            .students
            .insert(*student.rut().as_ref(), student.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        student: &Student,
    ) -> error_stack::Result<(), KernelError> {
        con.working
            .students
            .insert(*student.rut().as_ref(), student.clone());
        Ok(())
    }
}

#[async_trait::async_trait]
impl NotebookQuery<MemoryTransaction> for MemoryRepository {
    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &NotebookId,
    ) -> error_stack::Result<Option<Notebook>, KernelError> {
        Ok(con.working.notebooks.get(id.as_ref()).cloned())
    }

    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<Notebook>, KernelError> {
        Ok(con.working.notebooks.values().cloned().collect())
    }

    async fn find_available(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<Notebook>, KernelError> {
        Ok(con
            .working
            .notebooks
            .values()
            .filter(|notebook| *notebook.available().as_ref())
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl NotebookModifier<MemoryTransaction> for MemoryRepository {
    async fn create(
        &self,
        con: &mut MemoryTransaction,
        notebook: &Notebook,
    ) -> error_stack::Result<(), KernelError> {
        con.working
            .notebooks
            .insert(*notebook.id().as_ref(), notebook.clone());
        Ok(())
    }

    /*
     * The as-read version must match both this transaction's view and the
     * committed row, as the row lock would enforce in postgres.
     */
    async fn update(
        &self,
        con: &mut MemoryTransaction,
        notebook: &Notebook,
    ) -> error_stack::Result<(), KernelError> {
        let working_matches = con
            .working
            .notebooks
            .get(notebook.id().as_ref())
            .map(|stored| stored.version() == notebook.version())
            .unwrap_or(false);
        let committed_matches = match self
            .committed_version(con, notebook)
        {
            Some(version) => &version == notebook.version(),
            None => true,
        };
        if !(working_matches && committed_matches) {
            return Err(Report::new(KernelError::Concurrency).attach_printable(format!(
                "notebook {} was updated by someone else",
                notebook.id().as_ref()
            )));
        }

        let version = *notebook.version().as_ref() + 1;
        let next = notebook
            .clone()
            .reconstruct(|n| n.version = Version::new(version));
        con.working.notebooks.insert(*notebook.id().as_ref(), next);
        Ok(())
    }
}

impl MemoryRepository {
    fn committed_version(
        &self,
        con: &MemoryTransaction,
        notebook: &Notebook,
    ) -> Option<Version<Notebook>> {
        con.origin
            .lock()
            .unwrap()
            .notebooks
            .get(notebook.id().as_ref())
            .map(|stored| stored.version().clone())
    }
}

#[async_trait::async_trait]
impl LoanQuery<MemoryTransaction> for MemoryRepository {
    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &LoanId,
    ) -> error_stack::Result<Option<Loan>, KernelError> {
        Ok(con.working.loans.get(id.as_ref()).cloned())
    }

    async fn find_by_rut(
        &self,
        con: &mut MemoryTransaction,
        rut: &StudentRut,
    ) -> error_stack::Result<Vec<Loan>, KernelError> {
        Ok(loans_of(con, rut, |_| true))
    }

    async fn find_active_by_rut(
        &self,
        con: &mut MemoryTransaction,
        rut: &StudentRut,
    ) -> error_stack::Result<Vec<Loan>, KernelError> {
        Ok(loans_of(con, rut, |loan| {
            loan.state() == &LoanState::Active
        }))
    }

    async fn find_open_by_rut(
        &self,
        con: &mut MemoryTransaction,
        rut: &StudentRut,
    ) -> error_stack::Result<Vec<Loan>, KernelError> {
        Ok(loans_of(con, rut, |loan| {
            loan.state() != &LoanState::Finalized
        }))
    }

    async fn find_latest_active_by_rut(
        &self,
        con: &mut MemoryTransaction,
        rut: &StudentRut,
    ) -> error_stack::Result<Option<Loan>, KernelError> {
        Ok(loans_of(con, rut, |loan| loan.state() == &LoanState::Active)
            .into_iter()
            .next())
    }

    async fn find_by_state(
        &self,
        con: &mut MemoryTransaction,
        state: &LoanState,
    ) -> error_stack::Result<Vec<Loan>, KernelError> {
        let mut loans: Vec<Loan> = con
            .working
            .loans
            .values()
            .filter(|loan| loan.state() == state)
            .cloned()
            .collect();
        sort_latest_first(&mut loans);
        Ok(loans)
    }
}

fn loans_of(
    con: &MemoryTransaction,
    rut: &StudentRut,
    filter: impl Fn(&Loan) -> bool,
) -> Vec<Loan> {
    let mut loans: Vec<Loan> = con
        .working
        .loans
        .values()
        .filter(|loan| loan.student_rut() == rut && filter(loan))
        .cloned()
        .collect();
    sort_latest_first(&mut loans);
    loans
}

fn sort_latest_first(loans: &mut [Loan]) {
    loans.sort_by(|a, b| b.begin_date().as_ref().cmp(a.begin_date().as_ref()));
}

#[async_trait::async_trait]
impl LoanModifier<MemoryTransaction> for MemoryRepository {
    async fn create(
        &self,
        con: &mut MemoryTransaction,
        loan: &Loan,
    ) -> error_stack::Result<(), KernelError> {
        con.working.loans.insert(*loan.id().as_ref(), loan.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        loan: &Loan,
    ) -> error_stack::Result<(), KernelError> {
        con.working.loans.insert(*loan.id().as_ref(), loan.clone());
        Ok(())
    }
}

#[async_trait::async_trait]
impl SanctionQuery<MemoryTransaction> for MemoryRepository {
    async fn find_active_by_rut(
        &self,
        con: &mut MemoryTransaction,
        rut: &StudentRut,
        now: &OffsetDateTime,
    ) -> error_stack::Result<Vec<Sanction>, KernelError> {
        let mut sanctions: Vec<Sanction> = con
            .working
            .sanctions
            .values()
            .filter(|sanction| sanction.student_rut() == rut && sanction.finish_date().as_ref() > now)
            .cloned()
            .collect();
        sanctions.sort_by(|a, b| b.begin_date().as_ref().cmp(a.begin_date().as_ref()));
        Ok(sanctions)
    }
}

#[async_trait::async_trait]
impl SanctionModifier<MemoryTransaction> for MemoryRepository {
    async fn create(
        &self,
        con: &mut MemoryTransaction,
        sanction: &Sanction,
    ) -> error_stack::Result<(), KernelError> {
        con.working
            .sanctions
            .insert(*sanction.id().as_ref(), sanction.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        sanction: &Sanction,
    ) -> error_stack::Result<(), KernelError> {
        con.working
            .sanctions
            .insert(*sanction.id().as_ref(), sanction.clone());
        Ok(())
    }
}

impl DependOnStudentQuery<MemoryTransaction> for MemoryDatabase {
    type StudentQuery = MemoryRepository;
    fn student_query(&self) -> &Self::StudentQuery {
        &MemoryRepository
    }
}

impl DependOnStudentModifier<MemoryTransaction> for MemoryDatabase {
    type StudentModifier = MemoryRepository;
    fn student_modifier(&self) -> &Self::StudentModifier {
        &MemoryRepository
    }
}

impl DependOnNotebookQuery<MemoryTransaction> for MemoryDatabase {
    type NotebookQuery = MemoryRepository;
    fn notebook_query(&self) -> &Self::NotebookQuery {
        &MemoryRepository
    }
}

impl DependOnNotebookModifier<MemoryTransaction> for MemoryDatabase {
    type NotebookModifier = MemoryRepository;
    fn notebook_modifier(&self) -> &Self::NotebookModifier {
        &MemoryRepository
    }
}

impl DependOnLoanQuery<MemoryTransaction> for MemoryDatabase {
    type LoanQuery = MemoryRepository;
    fn loan_query(&self) -> &Self::LoanQuery {
        &MemoryRepository
    }
}

impl DependOnLoanModifier<MemoryTransaction> for MemoryDatabase {
    type LoanModifier = MemoryRepository;
    fn loan_modifier(&self) -> &Self::LoanModifier {
        &MemoryRepository
    }
}

impl DependOnSanctionQuery<MemoryTransaction> for MemoryDatabase {
    type SanctionQuery = MemoryRepository;
    fn sanction_query(&self) -> &Self::SanctionQuery {
        &MemoryRepository
    }
}

impl DependOnSanctionModifier<MemoryTransaction> for MemoryDatabase {
    type SanctionModifier = MemoryRepository;
    fn sanction_modifier(&self) -> &Self::SanctionModifier {
        &MemoryRepository
    }
}

pub fn enrolled_student(rut: i32) -> Student {
    Student::new(
        StudentId::new(Uuid::new_v4()),
        StudentRut::new(rut),
        StudentDv::new("K"),
        StudentName::new("Violeta"),
        StudentLastname::new("Parra"),
        StudentEmail::new("violeta@example.cl"),
        StudentPhone::new("912345678"),
        StudentCampus::new("San Joaquin"),
        StudentCareer::new("Informatica"),
        IsBlocked::new(false),
    )
}

pub fn blocked_student(rut: i32) -> Student {
    enrolled_student(rut).reconstruct(|s| s.blocked = IsBlocked::new(true))
}

pub fn available_notebook() -> Notebook {
    Notebook::new(
        NotebookId::new(Uuid::new_v4()),
        NotebookBrand::new("Lenovo"),
        NotebookModel::new("ThinkPad X260"),
        NotebookSerialNumber::new(Uuid::new_v4().to_string()),
        IsAvailable::new(true),
        Version::new(0),
    )
}

pub fn taken_notebook() -> Notebook {
    available_notebook().reconstruct(|n| n.available = IsAvailable::new(false))
}

pub fn sanction_finishing_at(rut: i32, finish_date: OffsetDateTime) -> Sanction {
    Sanction::new(
        SanctionId::new(Uuid::new_v4()),
        StudentRut::new(rut),
        None,
        SanctionDescription::new("Returned the notebook late"),
        BeginDate::new(OffsetDateTime::now_utc() - time::Duration::days(1)),
        FinishDate::new(finish_date),
    )
}
