use crate::database::Transaction;
use crate::entity::{Student, StudentId, StudentRut};
use crate::KernelError;

#[async_trait::async_trait]
pub trait StudentQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &StudentId,
    ) -> error_stack::Result<Option<Student>, KernelError>;

    async fn find_by_rut(
        &self,
        con: &mut Connection,
        rut: &StudentRut,
    ) -> error_stack::Result<Option<Student>, KernelError>;

    async fn find_blocked(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<Student>, KernelError>;
}

pub trait DependOnStudentQuery<Connection: Transaction>: Sync + Send + 'static {
    type StudentQuery: StudentQuery<Connection>;
    fn student_query(&self) -> &Self::StudentQuery;
}
