use time::Duration;

/*
 * How long a notebook may be out before the loan is shown as Pending.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanTerm(Duration);

impl LoanTerm {
    pub fn from_hours(hours: impl Into<i64>) -> Self {
        Self(Duration::hours(hours.into()))
    }
}

impl Default for LoanTerm {
    fn default() -> Self {
        Self::from_hours(2)
    }
}

impl From<Duration> for LoanTerm {
    fn from(term: Duration) -> Self {
        Self(term)
    }
}

impl AsRef<Duration> for LoanTerm {
    fn as_ref(&self) -> &Duration {
        &self.0
    }
}
