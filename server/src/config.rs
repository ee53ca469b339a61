use std::net::SocketAddr;

use error_stack::ResultExt;
use kernel::prelude::entity::LoanTerm;
use kernel::KernelError;

const BIND_ADDR: &str = "BIND_ADDR";
const ADMIN_TOKEN: &str = "ADMIN_TOKEN";
const LOAN_DUE_HOURS: &str = "LOAN_DUE_HOURS";

/*
 * Process configuration, read once at startup. Only ADMIN_TOKEN is
 * required; the bind address and the loan term have defaults.
 */
pub struct AppConfig {
    bind_addr: SocketAddr,
    admin_token: String,
    loan_term: LoanTerm,
}

impl AppConfig {
    pub fn load() -> error_stack::Result<Self, KernelError> {
        let bind_addr = match dotenvy::var(BIND_ADDR) {
            Ok(raw) => raw
                .parse::<SocketAddr>()
                .change_context_lazy(|| KernelError::Internal)
                .attach_printable_lazy(|| format!("{raw} is not a socket address"))?,
            Err(_) => SocketAddr::from(([0, 0, 0, 0], 8080)),
        };

        let admin_token = dotenvy::var(ADMIN_TOKEN)
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| format!("Environment variable {ADMIN_TOKEN} is not set"))?;

        let loan_term = match dotenvy::var(LOAN_DUE_HOURS) {
            Ok(raw) => {
                let hours = raw
                    .parse::<i64>()
                    .change_context_lazy(|| KernelError::Internal)
                    .attach_printable_lazy(|| format!("{raw} is not a number of hours"))?;
                LoanTerm::from_hours(hours)
            }
            Err(_) => LoanTerm::default(),
        };

        Ok(Self {
            bind_addr,
            admin_token,
            loan_term,
        })
    }

    pub fn bind_addr(&self) -> &SocketAddr {
        &self.bind_addr
    }

    pub fn admin_token(&self) -> &str {
        &self.admin_token
    }

    pub fn loan_term(&self) -> &LoanTerm {
        &self.loan_term
    }
}
