use cells::{Direction, NodeId, Relations};
use units::TileKind;

/// A single cell of a 2-D lattice: a tile kind, an optional caller supplied
/// payload and up to four directional neighbour relations.
///
/// The node does not own its neighbours - every node lives in a `Lattice` and
/// the relations are handles into it. Initial wiring is the grid-builder's
/// job (assign `relations` directly or go through `Lattice::set_neighbour`);
/// after construction the relations change only through the swap operations.
#[derive(Debug, Clone)]
pub struct GridNode<T> {
    pub kind: TileKind,
    pub payload: Option<T>,
    pub relations: Relations,
}

impl<T> GridNode<T> {
    /// A node with no kind assigned (`TileKind::UNSET`) and no payload.
    pub fn new() -> GridNode<T> {
        GridNode {
            kind: TileKind::UNSET,
            payload: None,
            relations: Relations::default(),
        }
    }

    pub fn with_kind(kind: TileKind) -> GridNode<T> {
        GridNode {
            kind: kind,
            payload: None,
            relations: Relations::default(),
        }
    }

    pub fn with_payload(kind: TileKind, payload: T) -> GridNode<T> {
        GridNode {
            kind: kind,
            payload: Some(payload),
            relations: Relations::default(),
        }
    }

    /// The relation for the given direction, if a neighbour is present there.
    #[inline]
    pub fn neighbour(&self, direction: Direction) -> Option<NodeId> {
        self.relations.get(direction)
    }

    /// Where `other` sits relative to this node, scanning Top, Left, Bottom
    /// then Right. None when `other` is not an immediate neighbour.
    #[inline]
    pub fn direction_to(&self, other: NodeId) -> Option<Direction> {
        self.relations.direction_to(other)
    }
}
