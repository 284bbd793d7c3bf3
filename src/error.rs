use crate::{common::ShareId, field::Fr};

#[derive(Debug)]
pub enum SSError {
    InvalidThresholdOrTotal(ShareId, ShareId),
    BelowThreshold(ShareId, ShareId),
    ShareVerificationFailed(ShareId, Fr),
    DuplicateShareId(ShareId),
    InvalidShareId(ShareId),
    NoShares,
    DoesNotSupportThreshold(ShareId, ShareId),
}
