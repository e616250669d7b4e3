//! Canonical and long-form rendering.
//!
//! The canonical form compresses the best run of all-zero groups into `::`:
//! longest run wins, leftmost on ties, and a lone zero group never
//! compresses. The long form pads every group to 4 digits and compresses
//! nothing.

use crate::addr::Address;

/// A half-open run `[start, stop)` of all-zero groups.
///
/// Only runs of 2 or more groups qualify for compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroRun {
    pub start: usize,
    pub stop: usize,
}

impl ZeroRun {
    /// Number of groups in the run.
    pub fn len(&self) -> usize {
        self.stop - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }
}

/// Per-group hex strings, most-significant first.
pub(crate) fn group_strings(addr: &Address, padded: bool) -> Vec<String> {
    addr.groups()
        .iter()
        .map(|g| if padded { g.padded() } else { g.to_string() })
        .collect()
}

/// Find every qualifying zero run among `len` groups.
///
/// `is_zero` decides eligibility per group index; runs shorter than 2 are
/// dropped.
pub(crate) fn find_zero_runs<F>(len: usize, is_zero: F) -> Vec<ZeroRun>
where
    F: Fn(usize) -> bool,
{
    let mut runs = Vec::new();
    let mut open: Option<usize> = None;
    for i in 0..len {
        if is_zero(i) {
            open.get_or_insert(i);
        } else if let Some(start) = open.take() {
            if i - start >= 2 {
                runs.push(ZeroRun { start, stop: i });
            }
        }
    }
    if let Some(start) = open {
        if len - start >= 2 {
            runs.push(ZeroRun { start, stop: len });
        }
    }
    runs
}

/// The longest run; the leftmost wins ties.
pub(crate) fn best_zero_run(runs: &[ZeroRun]) -> Option<ZeroRun> {
    let mut best: Option<ZeroRun> = None;
    for run in runs {
        if best.map_or(true, |b| run.len() > b.len()) {
            best = Some(*run);
        }
    }
    best
}

/// Compress the best zero run among eligible groups into an empty field.
///
/// Joining the result with `:` produces the doubled `::`: a run touching
/// index 0 leaves an empty first field, a run touching index 8 leaves an
/// empty last field, and an interior run collapses to one empty field.
pub(crate) fn compress<F>(mut tokens: Vec<String>, is_zero: F) -> Vec<String>
where
    F: Fn(usize, &str) -> bool,
{
    let runs = find_zero_runs(tokens.len(), |i| is_zero(i, &tokens[i]));
    let Some(mut run) = best_zero_run(&runs) else {
        return tokens;
    };
    if run.start == 0 {
        tokens[0].clear();
        run.start = 1;
    }
    if run.stop == tokens.len() {
        let last = tokens.len() - 1;
        tokens[last].clear();
        run.stop = last;
    }
    tokens.splice(run.start..run.stop, [String::new()]);
    tokens
}

/// The canonical compressed string for an address.
pub(crate) fn canonical(addr: &Address) -> String {
    let tokens = group_strings(addr, false);
    compress(tokens, |_, token| token == "0").join(":")
}

/// The long-form string: 4 digits per group, no compression.
pub(crate) fn long(addr: &Address) -> String {
    group_strings(addr, true).join(":")
}
