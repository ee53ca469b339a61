use crate::database::Transaction;
use crate::entity::Student;
use crate::KernelError;

#[async_trait::async_trait]
pub trait StudentModifier<Connection: Transaction>: Sync + Send + 'static {
    async fn create(
        &self,
        con: &mut Connection,
        student: &Student,
    ) -> error_stack::Result<(), KernelError>;

    async fn update(
        &self,
        con: &mut Connection,
        student: &Student,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnStudentModifier<Connection: Transaction>: Sync + Send + 'static {
    type StudentModifier: StudentModifier<Connection>;
    fn student_modifier(&self) -> &Self::StudentModifier;
}
