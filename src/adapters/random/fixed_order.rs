//! No-op shuffler.

use crate::domain::foundation::UserId;
use crate::ports::ReviewerShuffler;

/// Leaves candidates in team roster order, so the first eligible members
/// are always picked.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedOrderShuffler;

impl ReviewerShuffler for FixedOrderShuffler {
    fn shuffle(&self, _candidates: &mut [UserId]) {}
}
