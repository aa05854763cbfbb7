//! Unit tests for cg-core primitives.

#[cfg(test)]
mod cell {
    use crate::Cell;

    #[test]
    fn glyph_roundtrip() {
        for c in [Cell::Road, Cell::Building, Cell::EmergencyService, Cell::Intersection] {
            assert_eq!(Cell::from_glyph(c.glyph()), Some(c));
        }
        assert_eq!(Cell::from_glyph('?'), None);
    }

    #[test]
    fn road_predicates() {
        assert!(Cell::Road.is_road());
        assert!(!Cell::Intersection.is_road());
        assert!(Cell::Intersection.is_intersection());
    }
}

#[cfg(test)]
mod coord {
    use crate::Coord;

    #[test]
    fn manhattan_symmetric() {
        let a = Coord::new(1, 2);
        let b = Coord::new(4, -1);
        assert_eq!(a.manhattan(b), 6);
        assert_eq!(b.manhattan(a), 6);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn row_parity() {
        assert!(Coord::new(3, 0).on_even_row());
        assert!(!Coord::new(3, 5).on_even_row());
    }

    #[test]
    fn display() {
        assert_eq!(Coord::new(2, 7).to_string(), "(2, 7)");
    }
}

#[cfg(test)]
mod heading {
    use crate::{Coord, Heading, SearchNode};

    #[test]
    fn deltas_are_unit_steps() {
        for h in Heading::ALL {
            let (dx, dy) = h.delta();
            assert_eq!(dx.abs() + dy.abs(), 1, "{h} is not a unit step");
        }
        assert_eq!(Heading::None.delta(), (0, 0));
    }

    #[test]
    fn step_updates_heading() {
        let n = SearchNode::start(Coord::new(3, 3));
        assert_eq!(n.heading, Heading::None);
        let up = n.step(Heading::Up);
        assert_eq!(up.pos, Coord::new(3, 2));
        assert_eq!(up.heading, Heading::Up);
    }

    #[test]
    fn same_cell_different_heading_is_distinct() {
        let p = Coord::new(2, 2);
        assert_ne!(
            SearchNode::new(p, Heading::Left),
            SearchNode::new(p, Heading::Right)
        );
    }
}

#[cfg(test)]
mod rng {
    use crate::RunRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RunRng::new(42);
        let mut b = RunRng::new(42);
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..1_000_000u32), b.gen_range(0..1_000_000u32));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = RunRng::new(1);
        let mut b = RunRng::new(2);
        let sa: Vec<u32> = (0..8).map(|_| a.gen_range(0..u32::MAX)).collect();
        let sb: Vec<u32> = (0..8).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(sa, sb);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = RunRng::new(7);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        // Out-of-range probabilities are clamped, not a panic.
        assert!(rng.gen_bool(2.5));
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = RunRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn child_streams_are_independent() {
        let mut root = RunRng::new(99);
        let mut c1 = root.child(1);
        let mut c2 = root.child(2);
        let a: Vec<u32> = (0..8).map(|_| c1.gen_range(0..u32::MAX)).collect();
        let b: Vec<u32> = (0..8).map(|_| c2.gen_range(0..u32::MAX)).collect();
        assert_ne!(a, b);
    }
}
