/// Conventional status values for the three-stage approval flow. Stored as
/// plain strings; only `complete` checks the current value, everything else
/// writes unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Approved,
    Completed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Approved => "approved",
            PaymentStatus::Completed => "completed",
        }
    }
}
