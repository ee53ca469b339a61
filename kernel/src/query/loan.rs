use crate::database::Transaction;
use crate::entity::{Loan, LoanId, LoanState, StudentRut};
use crate::KernelError;

#[async_trait::async_trait]
pub trait LoanQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &LoanId,
    ) -> error_stack::Result<Option<Loan>, KernelError>;

    async fn find_by_rut(
        &self,
        con: &mut Connection,
        rut: &StudentRut,
    ) -> error_stack::Result<Vec<Loan>, KernelError>;

    async fn find_active_by_rut(
        &self,
        con: &mut Connection,
        rut: &StudentRut,
    ) -> error_stack::Result<Vec<Loan>, KernelError>;

    /*
     * Loans still holding a notebook, whatever their stored state.
     */
    async fn find_open_by_rut(
        &self,
        con: &mut Connection,
        rut: &StudentRut,
    ) -> error_stack::Result<Vec<Loan>, KernelError>;

    async fn find_latest_active_by_rut(
        &self,
        con: &mut Connection,
        rut: &StudentRut,
    ) -> error_stack::Result<Option<Loan>, KernelError>;

    async fn find_by_state(
        &self,
        con: &mut Connection,
        state: &LoanState,
    ) -> error_stack::Result<Vec<Loan>, KernelError>;
}

pub trait DependOnLoanQuery<Connection: Transaction>: Sync + Send + 'static {
    type LoanQuery: LoanQuery<Connection>;
    fn loan_query(&self) -> &Self::LoanQuery;
}
