/// All orderings of a sequence.
///
/// Permutations come out in the order of fixing each position in turn as
/// the head and permuting the rest: `[A,B,C]` gives `ABC, ACB, BAC, BCA,
/// CAB, CBA`. Equal elements are not merged, so there are always `n!`
/// permutations.
///
/// Rather than recursing, the state is a code in the factorial number
/// system: `code[d]` picks which of the `n - d` remaining positions goes at
/// depth `d`. Incrementing the code like an odometer steps to the next
/// permutation, so stack use does not grow with the input.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    code: Vec<usize>,
    done: bool,
}

impl<T> Permutations<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        let done = items.is_empty();
        let code = vec![0; items.len()];
        Permutations { items, code, done }
    }

    fn step(&mut self) {
        let n = self.items.len();
        // the last digit can only ever be 0, so start one before it
        for depth in (0..n.saturating_sub(1)).rev() {
            if self.code[depth] + 1 < n - depth {
                self.code[depth] += 1;
                for digit in &mut self.code[depth + 1..] {
                    *digit = 0;
                }
                return;
            }
        }
        self.done = true;
    }

    fn remaining(&self) -> Option<usize> {
        if self.done {
            return Some(0);
        }
        let n = self.items.len();
        // rank of the current code plus one, counted from the end
        let mut rank: usize = 0;
        let mut total: usize = 1;
        for depth in (0..n).rev() {
            rank = rank.checked_add(self.code[depth].checked_mul(total)?)?;
            total = total.checked_mul(n - depth)?;
        }
        Some(total - rank)
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        let mut remaining = (0..self.items.len()).collect::<Vec<_>>();
        let permutation = self
            .code
            .iter()
            .map(|&choice| self.items[remaining.remove(choice)].clone())
            .collect();
        self.step();
        Some(permutation)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}
