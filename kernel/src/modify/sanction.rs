use crate::database::Transaction;
use crate::entity::Sanction;
use crate::KernelError;

#[async_trait::async_trait]
pub trait SanctionModifier<Connection: Transaction>: Sync + Send + 'static {
    async fn create(
        &self,
        con: &mut Connection,
        sanction: &Sanction,
    ) -> error_stack::Result<(), KernelError>;

    async fn update(
        &self,
        con: &mut Connection,
        sanction: &Sanction,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnSanctionModifier<Connection: Transaction>: Sync + Send + 'static {
    type SanctionModifier: SanctionModifier<Connection>;
    fn sanction_modifier(&self) -> &Self::SanctionModifier;
}
