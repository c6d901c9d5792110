//! Crow's-foot arrow heads inferred from foreign key constraints.

use erdraw_core::{
    draw::{ArrowHead, ArrowStyle},
    semantic::ForeignKey,
};

/// `(start, end)` heads indexed by `[unique][not_null]`.
///
/// The start sits on the referencing table, the end on the referenced one.
const CARDINALITY: [[(ArrowHead, ArrowHead); 2]; 2] = [
    [
        (ArrowHead::ZeroToMany, ArrowHead::ZeroToOne),
        (ArrowHead::ZeroToMany, ArrowHead::MandatoryOne),
    ],
    [
        (ArrowHead::ZeroToOne, ArrowHead::ZeroToOne),
        (ArrowHead::ZeroToOne, ArrowHead::MandatoryOne),
    ],
];

/// Arrow style for a foreign key with the given constraints.
///
/// Only the end head is filled.
pub fn cardinality_arrows(unique: bool, not_null: bool) -> ArrowStyle {
    let (start, end) = CARDINALITY[usize::from(unique)][usize::from(not_null)];
    ArrowStyle::new(start, false, end, true)
}

/// Arrow style for `foreign_key`.
pub fn foreign_key_arrows(foreign_key: &ForeignKey) -> ArrowStyle {
    cardinality_arrows(foreign_key.unique(), foreign_key.not_null())
}
