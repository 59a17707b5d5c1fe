//! Lazy enumeration primitives shared by the expanders.
//!
//! The substitution expander needs "every non-empty subset of the eligible
//! positions, smallest subsets first", the date composer needs "every
//! ordering of a chosen subset", and both need the Cartesian product of a few
//! choice lists. These are provided here as plain iterators over indices so
//! that callers stay free of nested-loop bookkeeping.
//!
//! All iterators are finite and `Clone`; cloning a fresh iterator restarts the
//! enumeration.

/// Every `r`-element combination of `0..n`, in lexicographic order.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    first: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, r: usize) -> Self {
        Combinations {
            n,
            indices: (0..r).collect(),
            first: true,
            done: r > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.first {
            self.first = false;
            return Some(self.indices.clone());
        }

        let r = self.indices.len();
        // Rightmost position that can still move forward.
        let pivot = (0..r)
            .rev()
            .find(|&i| self.indices[i] != i + self.n - r);

        match pivot {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..r {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                Some(self.indices.clone())
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

/// Every non-empty subset of `0..n`, ordered by size (all singletons first,
/// then all pairs, and so on), each subset in ascending index order.
///
/// Yields `2^n - 1` subsets.
#[derive(Debug, Clone)]
pub struct NonEmptySubsets {
    n: usize,
    size: usize,
    current: Combinations,
}

impl NonEmptySubsets {
    pub fn new(n: usize) -> Self {
        NonEmptySubsets {
            n,
            size: 1,
            current: Combinations::new(n, 1),
        }
    }
}

impl Iterator for NonEmptySubsets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.size > self.n {
                return None;
            }
            if let Some(subset) = self.current.next() {
                return Some(subset);
            }
            self.size += 1;
            self.current = Combinations::new(self.n, self.size);
        }
    }
}

/// Every ordering of `0..k`, in lexicographic order. Yields `k!` permutations.
#[derive(Debug, Clone)]
pub struct Permutations {
    order: Vec<usize>,
    first: bool,
    done: bool,
}

impl Permutations {
    pub fn new(k: usize) -> Self {
        Permutations {
            order: (0..k).collect(),
            first: true,
            done: false,
        }
    }

    /// Orderings of an arbitrary slice, yielded as references into it.
    pub fn of<T>(items: &[T]) -> impl Iterator<Item = Vec<&T>> + '_ {
        Permutations::new(items.len()).map(move |order| order.iter().map(|&i| &items[i]).collect::<Vec<&T>>())
    }

    fn advance(&mut self) -> bool {
        let k = self.order.len();
        if k < 2 {
            return false;
        }

        let Some(i) = (0..k - 1).rev().find(|&i| self.order[i] < self.order[i + 1]) else {
            return false;
        };
        // A successor always exists to the right of the pivot.
        let j = (i + 1..k)
            .rev()
            .find(|&j| self.order[j] > self.order[i])
            .unwrap_or(i + 1);
        self.order.swap(i, j);
        self.order[i + 1..].reverse();
        true
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.first {
            self.first = false;
            return Some(self.order.clone());
        }
        if self.advance() {
            Some(self.order.clone())
        } else {
            self.done = true;
            None
        }
    }
}

/// Cartesian product of several choice lists, odometer style (the last list
/// varies fastest).
///
/// An empty list of pools yields a single empty combination; any empty pool
/// makes the whole product empty.
#[derive(Debug, Clone)]
pub struct CartesianProduct<'a, T> {
    pools: Vec<&'a [T]>,
    indices: Vec<usize>,
    done: bool,
}

impl<'a, T> CartesianProduct<'a, T> {
    pub fn new(pools: Vec<&'a [T]>) -> Self {
        let done = pools.iter().any(|pool| pool.is_empty());
        CartesianProduct {
            indices: vec![0; pools.len()],
            pools,
            done,
        }
    }
}

impl<'a, T> Iterator for CartesianProduct<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current = self
            .indices
            .iter()
            .zip(&self.pools)
            .map(|(&i, pool)| &pool[i])
            .collect();

        let mut position = self.indices.len();
        loop {
            if position == 0 {
                self.done = true;
                break;
            }
            position -= 1;
            self.indices[position] += 1;
            if self.indices[position] < self.pools[position].len() {
                break;
            }
            self.indices[position] = 0;
        }

        Some(current)
    }
}
