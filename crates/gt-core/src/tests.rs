//! Unit tests for gt-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, TeamId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(TeamId::INVALID.0, u8::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }

    #[test]
    fn teams_oppose_only_when_distinct_and_valid() {
        assert!(TeamId(0).opposes(TeamId(1)));
        assert!(!TeamId(0).opposes(TeamId(0)));
        assert!(!TeamId(0).opposes(TeamId::INVALID));
    }
}

#[cfg(test)]
mod cell {
    use crate::{Cell, GridDims};

    #[test]
    fn key_packs_col_low_row_high() {
        let c = Cell::new(3, 5);
        assert_eq!(c.key(), 3 | (5 << 16));
        assert_eq!(Cell::from_key(c.key()), c);
    }

    #[test]
    fn chebyshev_and_adjacency() {
        let c = Cell::new(2, 2);
        assert_eq!(c.chebyshev(Cell::new(4, 3)), 2);
        assert!(c.is_adjacent(Cell::new(3, 3)));
        assert!(c.is_adjacent(Cell::new(2, 1)));
        assert!(!c.is_adjacent(c), "a cell is not adjacent to itself");
        assert!(!c.is_adjacent(Cell::new(4, 2)));
    }

    #[test]
    fn neighbors_fixed_order() {
        let n: Vec<_> = Cell::new(1, 1).neighbors().collect();
        assert_eq!(n.len(), 8);
        assert_eq!(n[0], Cell::new(0, 0));
        assert_eq!(n[3], Cell::new(0, 1));
        assert_eq!(n[7], Cell::new(2, 2));
    }

    #[test]
    fn ring_one_matches_neighbors() {
        let c = Cell::new(4, 4);
        let ring: Vec<_> = c.ring(1).collect();
        let nbrs: Vec<_> = c.neighbors().collect();
        assert_eq!(ring, nbrs);
    }

    #[test]
    fn ring_sizes_and_distances() {
        let c = Cell::new(0, 0);
        assert_eq!(c.ring(0).collect::<Vec<_>>(), vec![c]);
        for r in 1..=3u32 {
            let ring: Vec<_> = c.ring(r).collect();
            assert_eq!(ring.len(), 8 * r as usize);
            assert!(ring.iter().all(|&x| x.chebyshev(c) == r));
        }
    }

    #[test]
    fn dims_contains_and_index() {
        let d = GridDims::new(8, 6);
        assert!(d.contains(Cell::new(0, 0)));
        assert!(d.contains(Cell::new(7, 5)));
        assert!(!d.contains(Cell::new(8, 0)));
        assert!(!d.contains(Cell::new(0, -1)));
        assert!(!d.contains(Cell::NONE));
        assert_eq!(d.index_of(Cell::new(2, 1)), Some(10));
        assert_eq!(d.cell_at(10), Cell::new(2, 1));
        assert_eq!(d.index_of(Cell::new(9, 9)), None);
    }
}

#[cfg(test)]
mod geo {
    use crate::WorldPos;

    #[test]
    fn distance_and_step() {
        let a = WorldPos::new(0.0, 0.0, 0.0);
        let b = WorldPos::new(3.0, 0.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        let mid = a.step_toward(b, 2.5);
        assert!((mid.x - 1.5).abs() < 1e-6);
        assert!((mid.z - 2.0).abs() < 1e-6);
    }

    #[test]
    fn yaw_faces_target() {
        let a = WorldPos::default();
        let plus_z = a.yaw_toward(WorldPos::new(0.0, 0.0, 1.0)).unwrap();
        assert!(plus_z.abs() < 1e-6);
        let plus_x = a.yaw_toward(WorldPos::new(1.0, 0.0, 0.0)).unwrap();
        assert!((plus_x - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!(a.yaw_toward(a).is_none());
    }
}

#[cfg(test)]
mod time {
    use crate::{Frame, FrameClock};

    #[test]
    fn frame_arithmetic() {
        let f = Frame(10);
        assert_eq!(f + 5, Frame(15));
        assert_eq!(f.offset(3), Frame(13));
        assert_eq!(Frame(15) - Frame(10), 5u64);
    }

    #[test]
    fn every_interval() {
        assert!(Frame(0).is_every(15));
        assert!(Frame(30).is_every(15));
        assert!(!Frame(31).is_every(15));
        assert!(!Frame(0).is_every(0));
    }

    #[test]
    fn clock_accumulates_positive_dt_only() {
        let mut clock = FrameClock::new();
        clock.advance(0.5);
        clock.advance(-1.0);
        clock.advance(f32::NAN);
        assert_eq!(clock.current_frame, Frame(3));
        assert!((clock.elapsed_secs - 0.5).abs() < 1e-9);
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn default_is_valid_eight_by_eight() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.board.dims().cell_count(), 64);
        assert_eq!(cfg.planner.max_ring_radius, 3);
        assert_eq!(cfg.planner.max_attempts, 3);
    }

    #[test]
    fn rejects_degenerate_boards() {
        let mut cfg = SimConfig::default();
        cfg.board.columns = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = SimConfig::default();
        cfg.board.cell_size = 0.0;
        assert!(cfg.validate().is_err());

        let mut cfg = SimConfig::default();
        cfg.plan_interval_frames = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_alternate_search_beyond_three() {
        let mut cfg = SimConfig::default();
        cfg.planner.max_ring_radius = 6;
        assert!(cfg.validate().is_err());

        let mut cfg = SimConfig::default();
        cfg.planner.max_attempts = 4;
        assert!(cfg.validate().is_err());

        let mut cfg = SimConfig::default();
        cfg.planner.max_ring_radius = 1;
        cfg.planner.max_attempts = 2;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn alternate_bounds_are_clamped() {
        let planner = crate::PlannerConfig { max_ring_radius: 6, max_attempts: 9 };
        assert_eq!(planner.ring_radius(), 3);
        assert_eq!(planner.attempts(), 3);

        let planner = crate::PlannerConfig { max_ring_radius: 2, max_attempts: 1 };
        assert_eq!(planner.ring_radius(), 2);
        assert_eq!(planner.attempts(), 1);
    }
}

#[cfg(test)]
mod rng {
    use crate::{GridDims, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..1000);
            let b: u32 = r2.gen_range(0..1000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn cells_stay_on_board() {
        let dims = GridDims::new(8, 5);
        let mut rng = SimRng::new(7);
        for _ in 0..500 {
            assert!(dims.contains(rng.cell_in(dims)));
        }
    }

    #[test]
    fn row_band_cells_stay_in_band() {
        let dims = GridDims::new(8, 8);
        let mut rng = SimRng::new(3);
        for _ in 0..500 {
            let c = rng.cell_in_rows(dims, 5..8);
            assert!(dims.contains(c));
            assert!((5..8).contains(&c.row));
        }
    }

    #[test]
    fn children_are_deterministic_and_distinct() {
        let mut p1 = SimRng::new(99);
        let mut p2 = SimRng::new(99);
        let mut blue1 = p1.child(0);
        let mut red1  = p1.child(1);
        let mut blue2 = p2.child(0);
        let mut red2  = p2.child(1);

        let draw = |r: &mut SimRng| (0..16).map(|_| r.gen_range(0..1_000_000u32)).collect::<Vec<_>>();
        let (b1, r1) = (draw(&mut blue1), draw(&mut red1));
        assert_eq!(b1, draw(&mut blue2));
        assert_eq!(r1, draw(&mut red2));
        assert_ne!(b1, r1);
    }
}
