//! Re-rendering of the source text with every leaf styled in place.

use super::decorate::decorate;
use super::style::StyleTable;
use crate::ast::Node;
use crate::error::Result;

/// Rebuild `source` with each leaf's span passed through [`decorate`].
///
/// `leaves` must be in source order, as produced by
/// [`flatten`](super::flatten). Positions are character offsets. Text between
/// leaves is copied verbatim. A leaf running to the end of the source is
/// flushed at the last character even if its nominal end lies beyond it.
pub fn highlight(source: &str, leaves: &[&Node], table: &dyn StyleTable) -> Result<String> {
    let count = source.chars().count();
    let last = count.saturating_sub(1);
    let mut out = String::with_capacity(source.len());
    let mut pending = String::new();
    let mut current = 0;

    for (pos, ch) in source.chars().enumerate() {
        // Leaves that ended before we reached them can never match.
        while let Some(leaf) = leaves.get(current)
            && leaf.position().end <= pos
        {
            log::warn!("skipping leaf {} {} ending before offset {pos}", leaf.kind(), leaf.position());
            current += 1;
        }

        if let Some(leaf) = leaves.get(current) {
            let range = leaf.position();
            if range.contains(pos) {
                pending.push(ch);
                if pos == last || pos + 1 == range.end {
                    out.push_str(&decorate(&pending, leaf, table)?);
                    pending.clear();
                    current += 1;
                }
                continue;
            }
        }
        // `pending` is only ever non-empty while `pos` is still inside the
        // current leaf, so an unflushed buffer cannot reach this point.
        out.push(ch);
    }

    log::trace!("highlighted {current} leaves over {count} chars");
    Ok(out)
}
