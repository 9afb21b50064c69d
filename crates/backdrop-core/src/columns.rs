use crate::prng::Mulberry32;

/// Fisher-Yates shuffle driven by the shared generator.
pub fn shuffle<T: Clone>(items: &[T], rng: &mut Mulberry32) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.next_index(i + 1);
        out.swap(i, j);
    }
    out
}

/// Hands out one column per occupied row.
///
/// Columns come from a shuffled pool that is drained before it is refilled,
/// so every eligible column is used once per cycle. A pick that would repeat
/// the previous row's column takes the next pool entry instead, as long as
/// there is one.
#[derive(Clone, Debug)]
pub struct ColumnPicker {
    eligible: Vec<usize>,
    pool: Vec<usize>,
    prev: Option<usize>,
}

impl ColumnPicker {
    pub fn new(eligible: Vec<usize>) -> Self {
        Self {
            eligible,
            pool: Vec::new(),
            prev: None,
        }
    }

    /// Remaining entries in the current pool.
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// `None` only when there are no eligible columns.
    pub fn pick(&mut self, rng: &mut Mulberry32) -> Option<usize> {
        if self.pool.is_empty() {
            if self.eligible.is_empty() {
                return None;
            }
            self.pool = shuffle(&self.eligible, rng);
            log::trace!("column pool refilled: {:?}", self.pool);
        }
        let last = self.pool.len() - 1;
        let col = if self.prev == Some(self.pool[last]) && self.pool.len() > 1 {
            self.pool.remove(last - 1)
        } else {
            self.pool.pop()?
        };
        self.prev = Some(col);
        Some(col)
    }
}
