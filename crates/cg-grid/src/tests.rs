//! Unit tests for cg-grid.
//!
//! Fixtures are written as ASCII art (`.` road, `B` building, `E` emergency
//! service, `+` intersection) so the one-way street layout is visible in
//! the test itself.

#[cfg(test)]
mod helpers {
    use crate::Grid;

    /// 7×7 bordered grid: one building at (2, 2), one service at (2, 4),
    /// no interior intersections.
    pub fn small_city() -> Grid {
        Grid::from_ascii(
            "
            +++++++
            +.....+
            +.B...+
            +.....+
            +.E...+
            +.....+
            +++++++
            ",
        )
        .unwrap()
    }
}

#[cfg(test)]
mod grid {
    use cg_core::{Cell, Coord};

    use crate::Grid;

    #[test]
    fn ascii_roundtrip() {
        let g = super::helpers::small_city();
        assert_eq!(g.width(), 7);
        assert_eq!(g.height(), 7);
        assert_eq!(g[Coord::new(2, 2)], Cell::Building);
        assert_eq!(g[Coord::new(2, 4)], Cell::EmergencyService);
        let reparsed = Grid::from_ascii(&g.to_string()).unwrap();
        assert_eq!(reparsed, g);
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        assert!(Grid::from_ascii("+++\n++").is_err());
    }

    #[test]
    fn parse_rejects_unknown_glyphs() {
        assert!(Grid::from_ascii("+x+").is_err());
        assert!(Grid::from_ascii("").is_err());
    }

    #[test]
    fn margin_detection() {
        let g = super::helpers::small_city();
        assert!(g.is_margin(Coord::new(0, 3)));
        assert!(g.is_margin(Coord::new(6, 3)));
        assert!(g.is_margin(Coord::new(3, 0)));
        assert!(g.is_margin(Coord::new(3, 6)));
        assert!(!g.is_margin(Coord::new(1, 1)));
    }

    #[test]
    fn bounds_checks() {
        let g = super::helpers::small_city();
        assert!(g.in_bounds(Coord::new(0, 0)));
        assert!(g.in_bounds(Coord::new(6, 6)));
        assert!(!g.in_bounds(Coord::new(-1, 0)));
        assert!(!g.in_bounds(Coord::new(7, 0)));
        assert_eq!(g.get(Coord::new(7, 7)), None);
    }

    #[test]
    fn scans_find_entities() {
        let g = super::helpers::small_city();
        assert_eq!(g.buildings(), vec![Coord::new(2, 2)]);
        assert_eq!(g.services(), vec![Coord::new(2, 4)]);
        assert!(g.interior_intersections().is_empty());
    }
}

#[cfg(test)]
mod generate {
    use cg_core::{Cell, RunRng};

    use crate::{generate_border_grid, seed_intersections};

    #[test]
    fn bordered_dimensions_and_margin() {
        let mut rng = RunRng::new(42);
        let g = generate_border_grid(15, 15, 7, 4, &mut rng).unwrap();
        assert_eq!(g.width(), 17);
        assert_eq!(g.height(), 17);
        for pos in g.coords() {
            if g.is_margin(pos) {
                assert_eq!(g[pos], Cell::Intersection, "margin cell {pos} not an intersection");
            }
        }
    }

    #[test]
    fn entity_counts_and_rows() {
        let mut rng = RunRng::new(7);
        let g = generate_border_grid(15, 15, 7, 4, &mut rng).unwrap();
        let buildings = g.buildings();
        let services = g.services();
        assert_eq!(buildings.len(), 7);
        assert_eq!(services.len(), 4);
        // Inner odd rows land on even rows of the bordered grid, and never
        // on the margin.
        for pos in buildings.iter().chain(&services) {
            assert!(pos.on_even_row(), "entity {pos} not on an even row");
            assert!(!g.is_margin(*pos));
        }
    }

    #[test]
    fn too_many_entities_is_config_error() {
        let mut rng = RunRng::new(0);
        // Inner 3×3 has a single odd row: 3 slots.
        assert!(generate_border_grid(3, 3, 3, 1, &mut rng).is_err());
        // No room left for roads at all.
        assert!(generate_border_grid(2, 2, 3, 1, &mut rng).is_err());
    }

    #[test]
    fn seeding_hits_every_open_column() {
        let mut rng = RunRng::new(11);
        let mut g = generate_border_grid(5, 5, 1, 1, &mut rng).unwrap();
        seed_intersections(&mut g, &mut rng);
        // Border columns have no road cells; each of the 5 inner columns
        // gains exactly one intersection.
        assert_eq!(g.interior_intersections().len(), 5);
        assert_eq!(g.buildings().len(), 1);
        assert_eq!(g.services().len(), 1);
    }
}

#[cfg(test)]
mod moves {
    use cg_core::{Coord, Heading, SearchNode};

    use crate::{Grid, neighbors};

    #[test]
    fn start_heading_goes_vertical_only() {
        let g = super::helpers::small_city();
        let out = neighbors(&g, SearchNode::start(Coord::new(2, 2)));
        assert_eq!(
            out,
            vec![
                SearchNode::new(Coord::new(2, 1), Heading::Up),
                SearchNode::new(Coord::new(2, 3), Heading::Down),
            ]
        );
    }

    #[test]
    fn even_row_continues_vertical_crossing() {
        let g = super::helpers::small_city();
        // Road cell on even row, entered going down: must keep going down.
        let out = neighbors(&g, SearchNode::new(Coord::new(3, 2), Heading::Down));
        assert_eq!(out, vec![SearchNode::new(Coord::new(3, 3), Heading::Down)]);
    }

    #[test]
    fn odd_row_is_one_way() {
        let g = super::helpers::small_city();
        // Entered from above (heading down) → committed leftward.
        let down = neighbors(&g, SearchNode::new(Coord::new(3, 3), Heading::Down));
        assert_eq!(down, vec![SearchNode::new(Coord::new(2, 3), Heading::Left)]);
        // Entered from below (heading up) → committed rightward.
        let up = neighbors(&g, SearchNode::new(Coord::new(3, 3), Heading::Up));
        assert_eq!(up, vec![SearchNode::new(Coord::new(4, 3), Heading::Right)]);
        // Already moving left keeps moving left.
        let left = neighbors(&g, SearchNode::new(Coord::new(3, 3), Heading::Left));
        assert_eq!(left, vec![SearchNode::new(Coord::new(2, 3), Heading::Left)]);
    }

    #[test]
    fn intersections_permit_all_turns() {
        let g = Grid::from_ascii(
            "
            +++++
            +...+
            +.+.+
            +...+
            +++++
            ",
        )
        .unwrap();
        let out = neighbors(&g, SearchNode::new(Coord::new(2, 2), Heading::Right));
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn corner_intersection_clips_to_bounds() {
        let g = super::helpers::small_city();
        let out = neighbors(&g, SearchNode::new(Coord::new(0, 0), Heading::Right));
        assert_eq!(
            out,
            vec![
                SearchNode::new(Coord::new(0, 1), Heading::Down),
                SearchNode::new(Coord::new(1, 0), Heading::Right),
            ]
        );
    }

    #[test]
    fn never_leaves_the_lattice() {
        let g = super::helpers::small_city();
        let headings = [Heading::None, Heading::Up, Heading::Down, Heading::Left, Heading::Right];
        for pos in g.coords() {
            for h in headings {
                for n in neighbors(&g, SearchNode::new(pos, h)) {
                    assert!(g.in_bounds(n.pos), "{pos}@{h} produced out-of-bounds {}", n.pos);
                }
            }
        }
    }
}

#[cfg(test)]
mod mutate {
    use cg_core::RunRng;

    use crate::{generate_border_grid, generate_neighbor, normalize_intersections, seed_intersections, Grid};

    #[test]
    fn preserves_entities_and_hits_target_count() {
        let mut rng = RunRng::new(5);
        let mut g = generate_border_grid(9, 9, 3, 2, &mut rng).unwrap();
        seed_intersections(&mut g, &mut rng);
        let buildings = g.buildings();
        let services = g.services();

        for _ in 0..20 {
            let next = generate_neighbor(&g, &mut rng);
            assert_eq!(next.buildings(), buildings);
            assert_eq!(next.services(), services);
            assert_eq!(next.interior_intersections().len(), next.target_intersections());
            // Margin ring untouched.
            for pos in next.coords() {
                if next.is_margin(pos) {
                    assert!(next[pos].is_intersection());
                }
            }
            g = next;
        }
    }

    #[test]
    fn parent_grid_is_untouched() {
        let mut rng = RunRng::new(6);
        let mut g = generate_border_grid(9, 9, 3, 2, &mut rng).unwrap();
        seed_intersections(&mut g, &mut rng);
        let snapshot = g.clone();
        let _ = generate_neighbor(&g, &mut rng);
        assert_eq!(g, snapshot);
    }

    #[test]
    fn normalize_adds_when_below_target() {
        let mut rng = RunRng::new(1);
        // 7 rows → target 8, but the grid starts with no interior
        // intersections at all.
        let mut g = Grid::from_ascii(
            "
            +++++++
            +.....+
            +.....+
            +.....+
            +.....+
            +.....+
            +++++++
            ",
        )
        .unwrap();
        normalize_intersections(&mut g, &mut rng);
        assert_eq!(g.interior_intersections().len(), 8);
    }

    #[test]
    fn normalize_removes_when_above_target() {
        let mut rng = RunRng::new(2);
        let mut g = Grid::from_ascii(
            "
            +++++++
            +++++++
            +++++++
            +++++++
            +++++++
            +++++++
            +++++++
            ",
        )
        .unwrap();
        normalize_intersections(&mut g, &mut rng);
        assert_eq!(g.interior_intersections().len(), 8);
    }
}
