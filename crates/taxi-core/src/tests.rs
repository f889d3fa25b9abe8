//! Unit tests for taxi-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ClientId, PlaceId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(AgentId::try_from(3usize).unwrap(), id);
    }

    #[test]
    fn place_id_rejects_overflow() {
        assert!(PlaceId::try_from(300usize).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(ClientId(7).to_string(), "ClientId(7)");
    }
}

#[cfg(test)]
mod coords {
    use crate::{Coords, PlaceId, TaxiError};

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Coords::new(5, 0), Err(TaxiError::OutOfBounds { x: 5, y: 0 }));
        assert_eq!(Coords::new(0, -1), Err(TaxiError::OutOfBounds { x: 0, y: -1 }));
        assert!(Coords::new(4, 4).is_ok());
    }

    #[test]
    fn place_id_is_row_major() {
        let c = Coords::new(4, 3).unwrap();
        assert_eq!(c.place_id(), PlaceId(23));
        assert_eq!(Coords::from_place_id(PlaceId(23)).unwrap(), c);
        assert!(Coords::from_place_id(PlaceId(25)).is_err());
    }

    #[test]
    fn offset_stays_on_grid() {
        let corner = Coords::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, 0), Some(Coords::new(1, 0).unwrap()));
    }

    #[test]
    fn distances() {
        let a = Coords::new(0, 0).unwrap();
        let b = Coords::new(3, 4).unwrap();
        assert_eq!(a.distance_sq(b), 25);
        assert!((a.distance(b) - 5.0).abs() < 1e-9);
        assert_eq!(a.chebyshev(b), 4);
        assert_eq!(a.manhattan(b), 7);
    }

    #[test]
    fn display() {
        assert_eq!(Coords::new(1, 2).unwrap().to_string(), "[1,2]");
    }
}

#[cfg(test)]
mod team {
    use crate::{AgentKey, PlaceState, TaxiError, Team};

    #[test]
    fn agent_names() {
        assert_eq!(AgentKey::new(Team::Rooster, 0).to_string(), "R0");
        assert_eq!(AgentKey::new(Team::Donkey, 12).to_string(), "D12");
    }

    #[test]
    fn identity_uses_team_and_id() {
        let r0 = AgentKey::new(Team::Rooster, 0);
        let d0 = AgentKey::new(Team::Donkey, 0);
        let r1 = AgentKey::new(Team::Rooster, 1);
        assert_ne!(r0, d0);
        assert!(r0.opposes(d0));
        assert!(r0.is_teammate(r1));
        assert!(!r0.is_teammate(r0));
    }

    #[test]
    fn team_parse() {
        assert_eq!("R".parse::<Team>().unwrap(), Team::Rooster);
        assert_eq!("D".parse::<Team>().unwrap(), Team::Donkey);
        assert!(matches!("X".parse::<Team>(), Err(TaxiError::UnknownName { what: "team", .. })));
        assert_eq!(Team::Rooster.opponent(), Team::Donkey);
    }

    #[test]
    fn state_chars() {
        for c in ['R', 'G', 'B', 'Y', '-'] {
            assert_eq!(PlaceState::try_from(c).unwrap().as_char(), c);
        }
        assert_eq!(PlaceState::try_from('Q'), Err(TaxiError::InvalidState('Q')));
        assert!(PlaceState::Red.is_town());
        assert!(!PlaceState::Empty.is_town());
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick, MAX_CLIENTS};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(4).to_string(), "T4");
    }

    #[test]
    fn default_config() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.max_clients, MAX_CLIENTS);
        assert_eq!(cfg.end_tick(), Tick(cfg.total_ticks));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..=100);
            let b: u32 = r2.gen_range(0..=100);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut rng = SimRng::new(7);
        let mut v = vec![0, 1, 2, 3];
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
    }
}
