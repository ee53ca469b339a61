use crate::database::Transaction;
use crate::entity::Loan;
use crate::KernelError;

#[async_trait::async_trait]
pub trait LoanModifier<Connection: Transaction>: Sync + Send + 'static {
    async fn create(
        &self,
        con: &mut Connection,
        loan: &Loan,
    ) -> error_stack::Result<(), KernelError>;

    async fn update(
        &self,
        con: &mut Connection,
        loan: &Loan,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnLoanModifier<Connection: Transaction>: Sync + Send + 'static {
    type LoanModifier: LoanModifier<Connection>;
    fn loan_modifier(&self) -> &Self::LoanModifier;
}
