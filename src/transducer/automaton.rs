//! Non-deterministic query automaton.
//!
//! For a query `q`, a budget `k` and a set of [`EditOperations`], the
//! automaton accepts exactly the strings that can be turned into `q` by edit
//! operations of total cost at most `k`. States are [`Position`]s on a grid
//! of (query index × errors used), plus auxiliary states for the optional
//! operations.
//!
//! Transitions per grid state `(p, e)` with `c = q[p]`:
//!
//! | Operation     | Transition                                   | Condition          |
//! |---------------|----------------------------------------------|--------------------|
//! | Match         | `(p,e) --c--> (p+1,e)`                       | always             |
//! | Insertion     | `(p,e) --ANY--> (p,e+1)`                     | `e < k`            |
//! | Substitution  | `(p,e) --ANY--> (p+1,e+1)`                   | `e < k`            |
//! | Deletion      | `(p,e) --ε--> (p+1,e+1)`                     | `e < k`            |
//! | Merge         | `(p,e) --ANY--> (p+2,e+1)`                   | `e < k`, merge     |
//! | Split         | `(p,e) --ANY--> split(p,e) --ANY--> (p+1,e+1)` | `e < k`, split   |
//! | Transposition | `(p-1,e) --c--> trans(p,e) --q[p-1]--> (p+1,e+1)` | `e < k`, `p > 0` |
//! | Repetition    | `(p,e) --c--> rep[c](p+1,e)`, self loop on `c`, `ε` back to `(p+1,e)` | repetitions |
//!
//! The automaton is never determinized up front. [`QueryAutomaton::closure`]
//! and [`QueryAutomaton::step`] perform the subset construction one
//! frontier at a time, as the product search needs it.

use super::frontier::Frontier;
use super::{EditOperations, Marker, Position, Symbol};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

/// Outgoing transitions of one state, grouped by symbol kind.
#[derive(Debug, Clone, Default)]
struct Arcs {
    literal: SmallVec<[(char, Position); 4]>,
    any: SmallVec<[Position; 4]>,
    epsilon: SmallVec<[Position; 2]>,
}

impl Arcs {
    fn add(&mut self, symbol: Symbol, target: Position) {
        match symbol {
            Symbol::Char(c) => {
                if !self.literal.contains(&(c, target)) {
                    self.literal.push((c, target));
                }
            }
            Symbol::Any => {
                if !self.any.contains(&target) {
                    self.any.push(target);
                }
            }
            Symbol::Epsilon => {
                if !self.epsilon.contains(&target) {
                    self.epsilon.push(target);
                }
            }
        }
    }

    fn len(&self) -> usize {
        self.literal.len() + self.any.len() + self.epsilon.len()
    }
}

/// Query automaton for one query, budget and operation set.
///
/// Immutable once built. The initial state is `(0, 0)`; the accepting states
/// are the grid states `(len(query), e)` for every `e <= max_distance`.
///
/// # Example
///
/// ```rust
/// use levdict::transducer::{EditOperations, QueryAutomaton};
///
/// let automaton = QueryAutomaton::new("ab", 1, EditOperations::standard());
///
/// let mut frontier = automaton.initial_frontier();
/// for c in "axb".chars() {
///     frontier = automaton.step(&frontier, c);
/// }
/// assert_eq!(frontier.min_accepting_errors(&automaton), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct QueryAutomaton {
    query: Vec<char>,
    max_distance: usize,
    operations: EditOperations,
    arcs: FxHashMap<Position, Arcs>,
}

impl QueryAutomaton {
    /// Build the automaton for `query`.
    pub fn new(query: &str, max_distance: usize, operations: EditOperations) -> Self {
        let mut automaton = QueryAutomaton {
            query: query.chars().collect(),
            max_distance,
            operations,
            arcs: FxHashMap::default(),
        };
        automaton.build();

        trace!(
            "query automaton for {:?} (k={}, ops={}): {} states, {} transitions",
            query,
            max_distance,
            operations,
            automaton.arcs.len(),
            automaton.transition_count()
        );

        automaton
    }

    fn add_transition(&mut self, from: Position, symbol: Symbol, to: Position) {
        self.arcs.entry(from).or_default().add(symbol, to);
    }

    fn build(&mut self) {
        let n = self.query.len();
        let k = self.max_distance;
        let ops = self.operations;

        for p in 0..n {
            let character = self.query[p];
            let previous = if p > 0 { Some(self.query[p - 1]) } else { None };

            for e in 0..=k {
                let current = Position::new(p, e);

                // Match
                self.add_transition(current, Symbol::Char(character), Position::new(p + 1, e));

                if ops.repetitions {
                    let run = Position::repetition(character, p + 1, e);
                    // Enter the run on a matched character
                    self.add_transition(current, Symbol::Char(character), run);
                    // Extra copies in the dictionary term
                    self.add_transition(run, Symbol::Char(character), run);
                    // Extra copies in the query
                    if previous == Some(character) {
                        self.add_transition(
                            Position::repetition(character, p, e),
                            Symbol::Epsilon,
                            run,
                        );
                    }
                    // Leave the run
                    self.add_transition(run, Symbol::Epsilon, Position::new(p + 1, e));
                }

                if e < k {
                    // Insertion
                    self.add_transition(current, Symbol::Any, Position::new(p, e + 1));
                    // Substitution
                    self.add_transition(current, Symbol::Any, Position::new(p + 1, e + 1));
                    // Deletion
                    self.add_transition(current, Symbol::Epsilon, Position::new(p + 1, e + 1));

                    if ops.merge_split {
                        // Merge: one term character for two query characters
                        if p + 2 <= n {
                            self.add_transition(current, Symbol::Any, Position::new(p + 2, e + 1));
                        }
                        // Split: two term characters for one query character
                        let half = Position::split(p, e);
                        self.add_transition(current, Symbol::Any, half);
                        self.add_transition(half, Symbol::Any, Position::new(p + 1, e + 1));
                    }

                    if ops.transposition {
                        if let Some(previous) = previous {
                            let pending = Position::transposition(p, e);
                            self.add_transition(
                                Position::new(p - 1, e),
                                Symbol::Char(character),
                                pending,
                            );
                            self.add_transition(
                                pending,
                                Symbol::Char(previous),
                                Position::new(p + 1, e + 1),
                            );
                        }
                    }
                }
            }
        }

        // Trailing insertions after the whole query has been consumed
        for e in 0..k {
            self.add_transition(Position::new(n, e), Symbol::Any, Position::new(n, e + 1));
        }
    }

    /// The query as a character slice
    pub fn query(&self) -> &[char] {
        &self.query
    }

    /// The error budget this automaton was built for
    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// The operation set this automaton was built for
    pub fn operations(&self) -> EditOperations {
        self.operations
    }

    /// The initial states: `{(0, 0)}`
    pub fn initial_states(&self) -> [Position; 1] {
        [Position::new(0, 0)]
    }

    /// Check if a state is accepting
    #[inline]
    pub fn is_accepting(&self, position: &Position) -> bool {
        position.marker == Marker::Normal
            && position.term_index == self.query.len()
            && position.num_errors <= self.max_distance
    }

    /// All accepting states, in ascending error order
    pub fn accepting_states(&self) -> impl Iterator<Item = Position> + '_ {
        (0..=self.max_distance).map(move |e| Position::new(self.query.len(), e))
    }

    /// Targets of the transitions leaving `from` on exactly `symbol`.
    ///
    /// `Symbol::Any` yields only the wildcard transitions, and a character
    /// yields only the literal ones; [`step`](Self::step) combines both.
    pub fn targets(&self, from: &Position, symbol: Symbol) -> Vec<Position> {
        let Some(arcs) = self.arcs.get(from) else {
            return Vec::new();
        };
        match symbol {
            Symbol::Char(c) => arcs
                .literal
                .iter()
                .filter(|(label, _)| *label == c)
                .map(|(_, target)| *target)
                .collect(),
            Symbol::Any => arcs.any.to_vec(),
            Symbol::Epsilon => arcs.epsilon.to_vec(),
        }
    }

    /// Number of states with outgoing transitions
    pub fn state_count(&self) -> usize {
        self.arcs.len()
    }

    /// Total number of transitions
    pub fn transition_count(&self) -> usize {
        self.arcs.values().map(Arcs::len).sum()
    }

    /// Epsilon closure of a set of states.
    ///
    /// Terminates because epsilon transitions only move forward in the query
    /// (deletion) or leave a repetition run, so the epsilon graph is acyclic.
    pub fn closure<I>(&self, positions: I) -> Frontier
    where
        I: IntoIterator<Item = Position>,
    {
        let mut seen: FxHashSet<Position> = FxHashSet::default();
        let mut stack: Vec<Position> = Vec::new();

        for position in positions {
            if seen.insert(position) {
                stack.push(position);
            }
        }

        while let Some(position) = stack.pop() {
            if let Some(arcs) = self.arcs.get(&position) {
                for target in &arcs.epsilon {
                    if seen.insert(*target) {
                        stack.push(*target);
                    }
                }
            }
        }

        Frontier::from_positions(seen.into_iter().collect())
    }

    /// Closure of the initial states
    pub fn initial_frontier(&self) -> Frontier {
        self.closure(self.initial_states())
    }

    /// Frontier after reading the concrete character `input` from `frontier`.
    ///
    /// Follows literal transitions on `input` and every wildcard transition,
    /// then takes the epsilon closure. An empty result means the input has
    /// left the automaton's language for good.
    pub fn step(&self, frontier: &Frontier, input: char) -> Frontier {
        let mut next: SmallVec<[Position; 16]> = SmallVec::new();

        for position in frontier.iter() {
            if let Some(arcs) = self.arcs.get(position) {
                next.extend(
                    arcs.literal
                        .iter()
                        .filter(|(label, _)| *label == input)
                        .map(|(_, target)| *target),
                );
                next.extend(arcs.any.iter().copied());
            }
        }

        if next.is_empty() {
            return Frontier::new();
        }
        self.closure(next)
    }
}
