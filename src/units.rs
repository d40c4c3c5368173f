#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct TileKind(pub i32);

impl TileKind {
    /// Sentinel kind of a cell that has not been assigned a tile yet.
    pub const UNSET: TileKind = TileKind(-1);

    #[inline]
    pub fn is_unset(&self) -> bool {
        *self == TileKind::UNSET
    }
}
