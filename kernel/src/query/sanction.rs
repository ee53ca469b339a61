use crate::database::Transaction;
use crate::entity::{Sanction, StudentRut};
use crate::KernelError;
use time::OffsetDateTime;

#[async_trait::async_trait]
pub trait SanctionQuery<Connection: Transaction>: Sync + Send + 'static {
    /*
     * Sanctions whose finish_date is still ahead of `now`.
     */
    async fn find_active_by_rut(
        &self,
        con: &mut Connection,
        rut: &StudentRut,
        now: &OffsetDateTime,
    ) -> error_stack::Result<Vec<Sanction>, KernelError>;
}

pub trait DependOnSanctionQuery<Connection: Transaction>: Sync + Send + 'static {
    type SanctionQuery: SanctionQuery<Connection>;
    fn sanction_query(&self) -> &Self::SanctionQuery;
}
