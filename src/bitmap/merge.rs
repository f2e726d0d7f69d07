use crate::RleBitmap;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Which Boolean operation a merge pass computes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    Union,
    Intersection,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Zeros,
    Ones,
}

/// Progress through one input during a merge: the index of the current run
/// and how many of its bits are left to consume. The parity of the index is
/// the phase, even for zeros and odd for ones.
struct Cursor<'a> {
    runs: &'a [u64],
    idx: usize,
    remaining: u64,
}

impl<'a> Cursor<'a> {
    /// Positions a cursor on the first run holding bits. `None` when the
    /// input encodes no bits at all.
    fn new(runs: &'a [u64]) -> Option<Cursor<'a>> {
        let mut cursor = Cursor { runs, idx: 0, remaining: *runs.first()? };
        if cursor.remaining == 0 && !cursor.roll() {
            return None;
        }
        Some(cursor)
    }

    fn phase(&self) -> Phase {
        if self.idx % 2 == 0 {
            Phase::Zeros
        } else {
            Phase::Ones
        }
    }

    /// Steps to the next run holding bits, past any zero-length runs in
    /// between. Returns `false` once the input is exhausted.
    fn roll(&mut self) -> bool {
        debug_assert_eq!(self.remaining, 0);
        loop {
            self.idx += 1;
            match self.runs.get(self.idx) {
                Some(&run) if run > 0 => {
                    self.remaining = run;
                    return true;
                }
                Some(_) => continue,
                None => return false,
            }
        }
    }

    /// Consumes `amount` bits, rolling through as many runs as the debt
    /// requires. Returns `false` once the input is exhausted.
    fn advance_by(&mut self, mut amount: u64) -> bool {
        loop {
            if amount < self.remaining {
                self.remaining -= amount;
                return true;
            }
            amount -= self.remaining;
            self.remaining = 0;
            if !self.roll() {
                return false;
            }
            if amount == 0 {
                return true;
            }
        }
    }
}

/// Index of the cursor that governs the next output run: a cursor in the
/// dominant phase with the most bits left, otherwise the cursor with the
/// fewest bits left.
fn select(cursors: &[Cursor<'_>], dominant: Phase) -> usize {
    let mut best = 0;
    for (i, cursor) in cursors.iter().enumerate().skip(1) {
        let leader = &cursors[best];
        best = match (cursor.phase() == dominant, leader.phase() == dominant) {
            (true, false) => i,
            (false, true) => best,
            (true, true) if cursor.remaining > leader.remaining => i,
            (false, false) if cursor.remaining < leader.remaining => i,
            _ => best,
        };
    }
    best
}

/// Walks every input in lockstep and emits their union or intersection as a
/// fresh canonical bitmap.
///
/// Each step selects one cursor, emits that cursor's remaining bits as a run
/// of the cursor's phase, and advances every input past them. Union gives
/// ones runs priority and emits the longest one whole, while a zeros run is
/// only safe to emit up to the shortest one since another input may flip to
/// ones right after it. Intersection is the exact dual, and stops as soon as
/// any input runs out of bits: everything past it is zeros.
pub(crate) fn merge(inputs: &[&RleBitmap], op: Op) -> RleBitmap {
    if inputs.is_empty() {
        return RleBitmap::new();
    }

    let mut cursors: Vec<Cursor<'_>> = Vec::with_capacity(inputs.len());
    for input in inputs {
        match Cursor::new(input.runs()) {
            Some(cursor) => cursors.push(cursor),
            // an input encoding no bits is all zeros
            None if op == Op::Intersection => return RleBitmap::new(),
            None => {}
        }
    }

    let dominant = match op {
        Op::Union => Phase::Ones,
        Op::Intersection => Phase::Zeros,
    };

    let mut out = Vec::new();
    loop {
        let done = match op {
            Op::Union => cursors.is_empty(),
            Op::Intersection => cursors.len() < inputs.len(),
        };
        if done {
            break;
        }

        let selected = select(&cursors, dominant);
        let take = cursors[selected].remaining;
        match cursors[selected].phase() {
            Phase::Zeros => push_zeros(&mut out, take),
            Phase::Ones => push_ones(&mut out, take),
        }

        cursors.retain_mut(|cursor| cursor.advance_by(take));
    }

    strip_trailing_zeros(&mut out);
    RleBitmap { runs: out }
}

/// Appends a run of zeros, extending the trailing zeros run when there is
/// one. Zero-length runs are dropped.
pub(crate) fn push_zeros(out: &mut Vec<u64>, len: u64) {
    if len == 0 {
        return;
    }
    if out.len() % 2 == 1 {
        if let Some(last) = out.last_mut() {
            *last += len;
        }
    } else {
        out.push(len);
    }
}

/// Appends a run of ones, extending the trailing ones run when there is one.
/// A sequence always opens with its zeros run, so the first ones run gets a
/// zero-length run in front of it.
pub(crate) fn push_ones(out: &mut Vec<u64>, len: u64) {
    if len == 0 {
        return;
    }
    if out.is_empty() {
        out.push(0);
        out.push(len);
    } else if out.len() % 2 == 0 {
        if let Some(last) = out.last_mut() {
            *last += len;
        }
    } else {
        out.push(len);
    }
}

/// Drops the trailing zeros run; positions past the last encoded run are
/// zeros by convention.
pub(crate) fn strip_trailing_zeros(out: &mut Vec<u64>) {
    if out.len() % 2 == 1 {
        out.pop();
    }
}

/// Rewrites a run sequence into canonical form: interior zero-length runs
/// merge their neighbours, the trailing zeros run is dropped.
pub(crate) fn canonicalize(runs: &[u64]) -> Vec<u64> {
    let mut out = Vec::with_capacity(runs.len());
    for (idx, &run) in runs.iter().enumerate() {
        if idx % 2 == 0 {
            push_zeros(&mut out, run);
        } else {
            push_ones(&mut out, run);
        }
    }
    strip_trailing_zeros(&mut out);
    out
}
