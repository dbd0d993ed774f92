//! Results of capacity negotiation and hide/extract operations.

/// Advisory number of payload bits a carrier can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityEstimate {
    pub bits: u64,
}

impl CapacityEstimate {
    pub fn new(bits: u64) -> Self {
        Self { bits }
    }

    /// Approximate number of one-byte characters.
    pub fn chars(&self) -> u64 {
        self.bits / 8
    }

    /// Advisory check only; submission is never blocked on it.
    pub fn fits(&self, payload: &str) -> bool {
        (payload.len() as u64).saturating_mul(8) <= self.bits
    }
}

/// Outcome of one request/response cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OperationOutcome<T> {
    /// The operation completed and its result was applied.
    Success(T),
    /// A precondition, the service or the transport failed.
    Failure(String),
    /// A newer request of the same family took over; the result was dropped.
    Superseded,
}

#[cfg(test)]
impl<T> OperationOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Failure message, if any.
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failure(msg) => Some(msg),
            _ => None,
        }
    }
}
