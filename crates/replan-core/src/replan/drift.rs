//! Drift detection: is any flexible block running late enough to replan?

use super::config::ReplanConfig;
use crate::schedule::{Block, TimeOfDay};

/// First incomplete flexible block, in list order, whose start precedes `now`
/// by more than the drift threshold. `now` is not rounded.
pub(crate) fn first_drifting<'a>(
    config: &ReplanConfig,
    blocks: &'a [Block],
    now: TimeOfDay,
) -> Option<&'a Block> {
    blocks.iter().filter(|b| b.is_flexible()).find(|b| {
        let late = i64::from(now.minutes()) - i64::from(b.start_minutes());
        late > i64::from(config.drift_threshold_minutes)
    })
}
