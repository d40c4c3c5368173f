use smallvec::SmallVec;

/// The four relative positions at which a lattice cell can hold a neighbour.
///
/// "No neighbour there" is `Option::None` at the query site, so matching on a
/// `Direction` is always exhaustive - adding a direction will not compile until
/// every relation accessor and swap branch handles it.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Direction {
    Top,
    Left,
    Bottom,
    Right,
}

/// Fixed scan order for all neighbour queries: Top, Left, Bottom, Right.
pub const ALL_DIRECTIONS: [Direction; 4] =
    [Direction::Top, Direction::Left, Direction::Bottom, Direction::Right];

impl Direction {
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Left => Direction::Right,
            Direction::Bottom => Direction::Top,
            Direction::Right => Direction::Left,
        }
    }
}

/// Stable handle to a node owned by a `Lattice`.
///
/// Two handles refer to the same node exactly when they are equal, which is
/// what adjacency queries compare - never the node's kind or payload.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn new(index: usize) -> NodeId {
        NodeId(index)
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

pub type NodeIdSmallVec = SmallVec<[NodeId; 4]>;
pub type NodeIdOptionSmallVec = SmallVec<[Option<NodeId>; 4]>;

/// A cell's four directional neighbour relations.
///
/// `Copy` so the swap algorithms can snapshot a node's relations before
/// overwriting them - the new value of one field depends on the old value of
/// another node's field.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Default)]
pub struct Relations {
    pub top: Option<NodeId>,
    pub left: Option<NodeId>,
    pub bottom: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl Relations {
    #[inline]
    pub fn get(&self, direction: Direction) -> Option<NodeId> {
        match direction {
            Direction::Top => self.top,
            Direction::Left => self.left,
            Direction::Bottom => self.bottom,
            Direction::Right => self.right,
        }
    }

    #[inline]
    pub fn set(&mut self, direction: Direction, neighbour: Option<NodeId>) {
        match direction {
            Direction::Top => self.top = neighbour,
            Direction::Left => self.left = neighbour,
            Direction::Bottom => self.bottom = neighbour,
            Direction::Right => self.right = neighbour,
        }
    }

    /// Direction of the first relation referring to `other`, scanning in
    /// `ALL_DIRECTIONS` order. None when `other` is not an immediate neighbour.
    pub fn direction_to(&self, other: NodeId) -> Option<Direction> {
        ALL_DIRECTIONS.iter()
                      .cloned()
                      .find(|&direction| self.get(direction) == Some(other))
    }

    /// The present neighbours, in scan order.
    pub fn present(&self) -> NodeIdSmallVec {
        ALL_DIRECTIONS.iter()
                      .filter_map(|&direction| self.get(direction))
                      .collect()
    }
}
