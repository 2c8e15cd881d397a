use grove_geom::{Coord, Dir};
use proptest::prelude::*;

fn arb_coord() -> impl Strategy<Value = Coord> {
    (-1_000_000i32..1_000_000, -4096i32..4096, -1_000_000i32..1_000_000)
        .prop_map(|(x, y, z)| Coord::new(x, y, z))
}

fn arb_dir() -> impl Strategy<Value = Dir> {
    prop::sample::select(Dir::ALL.to_vec())
}

proptest! {
    #[test]
    fn coord_add_commutative(a in arb_coord(), b in arb_coord()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn offset_then_opposite_is_identity(c in arb_coord(), d in arb_dir()) {
        prop_assert_eq!(c.offset(d).offset(d.opposite()), c);
    }

    #[test]
    fn checked_offset_agrees_with_offset_in_range(c in arb_coord(), d in arb_dir()) {
        prop_assert_eq!(c.checked_offset(d), Some(c.offset(d)));
    }

    #[test]
    fn opposite_is_involution(d in arb_dir()) {
        prop_assert_eq!(d.opposite().opposite(), d);
        prop_assert_eq!(d.delta() + d.opposite().delta(), Coord::ZERO);
    }

    // Every cell of a chunk maps back to that chunk's key.
    #[test]
    fn chunk_key_contains_cell(c in arb_coord(), s in 1i32..64) {
        let (cx, cy, cz) = c.chunk_key(s, s, s);
        prop_assert!(cx * s <= c.x && c.x < (cx + 1) * s);
        prop_assert!(cy * s <= c.y && c.y < (cy + 1) * s);
        prop_assert!(cz * s <= c.z && c.z < (cz + 1) * s);
    }
}
