use super::face::FaceId;

slotmap::new_key_type! {
    /// Unique identifier for a solid in the topology store.
    pub struct SolidId;
}

/// Data associated with a topological solid.
///
/// A solid owns an ordered list of its bounding faces. The order is fixed
/// at construction; traversals see faces in this order, which makes
/// detection deterministic for a given solid.
#[derive(Debug, Clone)]
pub struct SolidData {
    /// The faces bounding this solid, in construction order.
    pub faces: Vec<FaceId>,
}

impl SolidData {
    /// Creates a solid from its bounding faces.
    #[must_use]
    pub fn new(faces: Vec<FaceId>) -> Self {
        Self { faces }
    }
}
