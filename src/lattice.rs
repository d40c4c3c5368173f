use itertools::Itertools;
use rand::{Rng, XorShiftRng};

use cells::{ALL_DIRECTIONS, Direction, NodeId, NodeIdOptionSmallVec, NodeIdSmallVec, Relations};
use node::GridNode;

/// Why a wiring assignment was rejected.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum WireError {
    InvalidNodeId,
    SelfReference,
}

/// An arena of lattice cells addressed by stable `NodeId` handles.
///
/// The lattice owns every node and the relation fields hold handles rather
/// than references, so a position swap can rewire up to six nodes (the two
/// principals plus up to four third parties) in one pass. A `&mut Lattice`
/// serialises all mutation of the lattice, which is the required granularity:
/// a swap transitively touches neighbours beyond the receiving node, so
/// per-node exclusion would not be enough.
///
/// The symmetry invariant - `a.right == b` implies `b.left == a`, likewise
/// for top/bottom - is established by the external grid-builder and preserved
/// by the swap operations. No operation validates it; `symmetry_violations`
/// exists for callers that want to check between calls.
#[derive(Debug, Clone)]
pub struct Lattice<T> {
    nodes: Vec<GridNode<T>>,
}

impl<T> Lattice<T> {
    pub fn new() -> Lattice<T> {
        Lattice { nodes: Vec::new() }
    }

    pub fn with_capacity(nodes_count: usize) -> Lattice<T> {
        Lattice { nodes: Vec::with_capacity(nodes_count) }
    }

    /// Adds a node and returns its handle.
    ///
    /// Handles are stable for the lattice's lifetime - nodes are never
    /// removed, only rewired, so a handle given out here never dangles.
    pub fn add_node(&mut self, node: GridNode<T>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&GridNode<T>> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut GridNode<T>> {
        self.nodes.get_mut(id.index())
    }

    #[inline]
    pub fn ids(&self) -> NodeIds {
        NodeIds {
            current: 0,
            nodes_count: self.nodes.len(),
        }
    }

    /// The neighbour in the given direction, None if that slot is empty or
    /// `id` is not in the lattice.
    #[inline]
    pub fn neighbour(&self, id: NodeId, direction: Direction) -> Option<NodeId> {
        self.node(id).and_then(|node| node.relations.get(direction))
    }

    /// The present neighbours of a node, in Top, Left, Bottom, Right order.
    pub fn neighbours(&self, id: NodeId) -> NodeIdSmallVec {
        self.node(id)
            .map_or(NodeIdSmallVec::new(), |node| node.relations.present())
    }

    pub fn neighbours_at_directions(&self,
                                    id: NodeId,
                                    directions: &[Direction])
                                    -> NodeIdOptionSmallVec {
        directions.iter()
                  .map(|&direction| self.neighbour(id, direction))
                  .collect()
    }

    /// Where `to` sits relative to `from`, scanning Top, Left, Bottom then
    /// Right. None when the two are not immediate neighbours. The comparison
    /// is handle identity, never kind or payload equality.
    pub fn direction_to(&self, from: NodeId, to: NodeId) -> Option<Direction> {
        self.node(from).and_then(|node| node.relations.direction_to(to))
    }

    /// True iff at least one present neighbour has the same tile kind.
    ///
    /// Two `TileKind::UNSET` cells count as the same kind, as the sentinel is
    /// an ordinary kind value to this query.
    pub fn has_same_kind_neighbour(&self, id: NodeId) -> bool {
        self.node(id).map_or(false, |node| {
            ALL_DIRECTIONS.iter().any(|&direction| {
                node.relations
                    .get(direction)
                    .and_then(|neighbour_id| self.node(neighbour_id))
                    .map_or(false, |neighbour| neighbour.kind == node.kind)
            })
        })
    }

    /// The same-kind neighbours themselves, in scan order - the cells a
    /// match rule built on top of this lattice would inspect first.
    pub fn matching_neighbours(&self, id: NodeId) -> NodeIdSmallVec {
        match self.node(id) {
            Some(node) => {
                ALL_DIRECTIONS.iter()
                              .filter_map(|&direction| node.relations.get(direction))
                              .filter(|&neighbour_id| {
                                  self.node(neighbour_id)
                                      .map_or(false, |neighbour| neighbour.kind == node.kind)
                              })
                              .collect()
            }
            None => NodeIdSmallVec::new(),
        }
    }

    /// Single-sided relation assignment for the external grid-builder.
    ///
    /// Does not touch the target's back relation - establishing the symmetry
    /// invariant is the builder's job. Rejects handles outside the lattice
    /// and the self-reference the data model forbids.
    pub fn set_neighbour(&mut self,
                         id: NodeId,
                         direction: Direction,
                         neighbour: Option<NodeId>)
                         -> Result<(), WireError> {
        if neighbour == Some(id) {
            return Err(WireError::SelfReference);
        }
        if let Some(neighbour_id) = neighbour {
            if !self.contains(neighbour_id) {
                return Err(WireError::InvalidNodeId);
            }
        }
        match self.node_mut(id) {
            Some(node) => {
                node.relations.set(direction, neighbour);
                Ok(())
            }
            None => Err(WireError::InvalidNodeId),
        }
    }

    /// Uniformly random node handle, None on an empty lattice.
    pub fn random_node(&self, rng: &mut XorShiftRng) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(NodeId::new(rng.gen::<usize>() % self.nodes.len()))
        }
    }

    /// Logically exchanges this node's grid position with the neighbour in
    /// the given direction: afterwards the neighbour occupies `id`'s former
    /// slot and `id` occupies the neighbour's, and every third party that
    /// referred to either principal refers to the correct one post-swap.
    ///
    /// Returns false and mutates nothing when there is no neighbour at
    /// `direction` or `id` is not in the lattice - a normal outcome the
    /// caller is expected to check, not an error.
    pub fn swap_with_neighbour(&mut self, id: NodeId, direction: Direction) -> bool {
        let original = match self.relations(id) {
            Some(relations) => relations,
            None => return false,
        };
        let substitute = match original.get(direction) {
            Some(neighbour_id) => neighbour_id,
            None => return false,
        };
        // Snapshot before any mutation: these fields are overwritten below
        // but still needed to compute `id`'s new relations.
        let displaced = match self.relations(substitute) {
            Some(relations) => relations,
            None => return false,
        };

        // The substitute's other neighbours end up next to `id`.
        for &other_direction in ALL_DIRECTIONS.iter() {
            if other_direction == direction.opposite() {
                continue; // that relation is `id` itself
            }
            if let Some(third_party) = displaced.get(other_direction) {
                self.redirect(third_party, other_direction.opposite(), id);
            }
        }
        // This node's other neighbours end up next to the substitute.
        for &other_direction in ALL_DIRECTIONS.iter() {
            if other_direction == direction {
                continue; // that relation is the substitute itself
            }
            if let Some(third_party) = original.get(other_direction) {
                self.redirect(third_party, other_direction.opposite(), substitute);
            }
        }

        // The substitute takes over this node's slot: all of `id`'s old
        // relations, except that the slot `id` moved to now holds `id`.
        let mut substitute_relations = original;
        substitute_relations.set(direction, Some(id));
        // And `id` takes over the substitute's slot, from the snapshot.
        let mut own_relations = displaced;
        own_relations.set(direction.opposite(), Some(substitute));

        self.nodes[substitute.index()].relations = substitute_relations;
        self.nodes[id.index()].relations = own_relations;

        true
    }

    /// Exchanges the entire relation sets of two nodes that need not be
    /// adjacent, fixing up the third parties that referred to either one.
    ///
    /// Returns false and mutates nothing when either handle is not in the
    /// lattice. Swapping a node with itself is a successful no-op. Immediate
    /// neighbours are handed to `swap_with_neighbour`: the generic redirect
    /// passes below assume the principals are absent from each other's
    /// relation sets, and only the directional algorithm patches the shared
    /// edge correctly.
    pub fn swap_nodes(&mut self, id: NodeId, other: NodeId) -> bool {
        let original = match self.relations(id) {
            Some(relations) => relations,
            None => return false,
        };
        let displaced = match self.relations(other) {
            Some(relations) => relations,
            None => return false,
        };

        if id == other {
            return true;
        }
        if let Some(direction) = original.direction_to(other) {
            return self.swap_with_neighbour(id, direction);
        }

        for &direction in ALL_DIRECTIONS.iter() {
            if let Some(third_party) = displaced.get(direction) {
                self.redirect(third_party, direction.opposite(), id);
            }
        }
        for &direction in ALL_DIRECTIONS.iter() {
            if let Some(third_party) = original.get(direction) {
                self.redirect(third_party, direction.opposite(), other);
            }
        }

        self.nodes[other.index()].relations = original;
        self.nodes[id.index()].relations = displaced;

        true
    }

    /// Every one-sided relation in the lattice as `(node, direction)` pairs:
    /// the neighbour at that direction whose opposite relation does not point
    /// back. Empty iff the symmetry invariant holds.
    pub fn symmetry_violations(&self) -> Vec<(NodeId, Direction)> {
        self.ids()
            .cartesian_product(ALL_DIRECTIONS.iter().cloned())
            .filter(|&(id, direction)| {
                match self.neighbour(id, direction) {
                    Some(neighbour_id) => {
                        self.neighbour(neighbour_id, direction.opposite()) != Some(id)
                    }
                    None => false,
                }
            })
            .collect()
    }

    #[inline]
    fn relations(&self, id: NodeId) -> Option<Relations> {
        self.node(id).map(|node| node.relations)
    }

    // Point a third party's relation at the principal moving into that slot.
    // Unconditional under the symmetry invariant: the opposite relation of
    // `third_party` referred to the node being moved out.
    #[inline]
    fn redirect(&mut self, third_party: NodeId, direction: Direction, to: NodeId) {
        if let Some(node) = self.nodes.get_mut(third_party.index()) {
            node.relations.set(direction, Some(to));
        }
    }
}

/// Iterator over every node handle of a lattice.
#[derive(Debug, Copy, Clone)]
pub struct NodeIds {
    current: usize,
    nodes_count: usize,
}

impl Iterator for NodeIds {
    type Item = NodeId;
    fn next(&mut self) -> Option<NodeId> {
        if self.current < self.nodes_count {
            let id = NodeId::new(self.current);
            self.current += 1;
            Some(id)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.nodes_count - self.current;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}
impl ExactSizeIterator for NodeIds {} // default impl using size_hint()
