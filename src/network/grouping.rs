use crate::domain::{Panel, PanelGroup};
use crate::error::PlanError;

/// Split panels into consecutive groups of `chunk_size`.
///
/// The last group holds the remainder and may be shorter. No group is ever
/// empty, and an empty input yields no groups at all.
pub fn group_panels(
    panels: &[Panel],
    chunk_size: usize,
) -> Result<Vec<PanelGroup<'_>>, PlanError> {
    if chunk_size == 0 {
        return Err(PlanError::InvalidChunkSize(chunk_size));
    }
    Ok(panels.chunks(chunk_size).collect())
}
