use std::fmt::Debug;
use std::hash::Hash;

/// An immutable directed edge record `(start, end, label)`.
///
/// Equality and hashing are structural over all three fields, so two records
/// built independently from the same values are the same edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<V, L> {
    start: V,
    end: V,
    label: Option<L>,
}

impl<V, L> Edge<V, L>
where
    V: Eq + Hash + Clone + Debug,
    L: Eq + Hash + Clone + Debug,
{
    /// Creates a new edge from `start` to `end`
    pub fn new(start: V, end: V, label: Option<L>) -> Self {
        Edge { start, end, label }
    }

    /// The node the edge leaves from
    pub fn start(&self) -> &V {
        &self.start
    }

    /// The node the edge arrives at
    pub fn end(&self) -> &V {
        &self.end
    }

    /// The edge label, absent on unlabelled graphs
    pub fn label(&self) -> Option<&L> {
        self.label.as_ref()
    }

    /// Returns the mirrored record `(end, start, label)`
    pub fn reversed(&self) -> Self {
        Edge {
            start: self.end.clone(),
            end: self.start.clone(),
            label: self.label.clone(),
        }
    }

    /// Consumes the edge, returning its parts
    pub fn into_parts(self) -> (V, V, Option<L>) {
        (self.start, self.end, self.label)
    }
}
