//! Engine integration tests.
//!
//! These tests exercise the public engine surface the way a session
//! holder or renderer would use it.

use rubik_engine::core::FACE_ORDER;
use rubik_engine::{index, Color, CubeEngine, CubeError, EngineConfig, Face, Facelets, SOLVED};

// =============================================================================
// Group Identities
// =============================================================================

/// Four clockwise quarter turns of any face are the identity.
#[test]
fn test_quarter_turn_four_times() {
    for face in FACE_ORDER {
        let mut cube = CubeEngine::new();
        cube.apply_move_sequence(&format!("{0} {0} {0} {0}", face));
        assert!(cube.is_solved(), "{}^4 should be solved", face);
        assert_eq!(cube.history_len(), 4);
    }
}

/// Two half turns of any face are the identity.
#[test]
fn test_half_turn_twice() {
    for face in FACE_ORDER {
        let cube = CubeEngine::with_sequence(&format!("{0}2 {0}2", face));
        assert!(cube.is_solved(), "({}2)^2 should be solved", face);
    }
}

/// A move and its prime cancel in either order.
#[test]
fn test_move_then_prime() {
    for face in FACE_ORDER {
        let forward = CubeEngine::with_sequence(&format!("{0} {0}'", face));
        let backward = CubeEngine::with_sequence(&format!("{0}' {0}", face));
        assert!(forward.is_solved());
        assert!(backward.is_solved());
    }
}

/// A single quarter turn or half turn never leaves the cube solved.
#[test]
fn test_single_moves_unsolve() {
    for face in FACE_ORDER {
        for suffix in ["", "'", "2"] {
            let cube = CubeEngine::with_sequence(&format!("{}{}", face, suffix));
            assert!(!cube.is_solved());
        }
    }
}

/// (R U R' U') has order 6.
#[test]
fn test_sexy_move_order_six() {
    let mut cube = CubeEngine::new();
    for i in 1..=6 {
        cube.apply_move_sequence("R U R' U'");
        assert_eq!(cube.is_solved(), i == 6, "after {} repetitions", i);
    }
}

/// Not every sequence of all six faces cancels.
#[test]
fn test_all_faces_sequence_is_not_identity() {
    let cube = CubeEngine::with_sequence("F B U D L R F B U D L R");
    assert!(!cube.is_solved());
}

// =============================================================================
// History and Reset
// =============================================================================

/// History records exactly the tokens applied.
#[test]
fn test_history_roundtrip() {
    let mut cube = CubeEngine::new();
    cube.apply_move_sequence("R U R' U' F2 B'");
    assert_eq!(cube.history_tokens(), ["R", "U", "R'", "U'", "F2", "B'"]);
}

/// History accumulates across calls in call order.
#[test]
fn test_history_appends() {
    let mut cube = CubeEngine::with_sequence("L");
    cube.apply_move_sequence("D2");
    cube.apply_move_sequence("B'");
    assert_eq!(cube.history_tokens(), ["L", "D2", "B'"]);
}

/// Reset after any mutation restores empty history and solved state.
#[test]
fn test_reset_after_mutations() {
    let mut cube = CubeEngine::with_sequence("R U F");
    cube.reset();
    assert!(cube.is_solved());
    assert_eq!(cube.history_len(), 0);

    cube.scramble(15);
    cube.reset();
    assert!(cube.is_solved());
    assert!(cube.move_history().is_empty());

    cube.reset();
    assert!(cube.is_solved());
}

/// Garbage is dropped without touching the history.
#[test]
fn test_malformed_tokens_are_dropped() {
    let mut cube = CubeEngine::new();

    assert_eq!(cube.apply_move_sequence("r u x y z"), 0);
    assert!(cube.is_solved());

    assert_eq!(cube.apply_move_sequence("R Rw M U"), 2);
    assert_eq!(cube.history_tokens(), ["R", "U"]);
}

/// Moves written without spaces form one token and apply nothing.
#[test]
fn test_unspaced_sequence_applies_nothing() {
    let mut cube = CubeEngine::new();
    assert_eq!(cube.apply_move_sequence("RUR'U'"), 0);
    assert!(cube.is_solved());
    assert!(cube.move_history().is_empty());
}

// =============================================================================
// Determinism
// =============================================================================

/// Engines built from the same sequence agree.
#[test]
fn test_same_sequence_same_state() {
    let a = CubeEngine::with_sequence("R U2 D' B D'");
    let b = CubeEngine::with_sequence("R U2 D' B D'");
    assert_eq!(a.current_state(), b.current_state());
    assert_eq!(a.is_solved(), b.is_solved());
}

/// The cached state always equals a full replay.
#[test]
fn test_cache_matches_replay() {
    let mut cube = CubeEngine::new();
    cube.apply_move_sequence("R U R' U' F2 B' L D2");
    assert!(cube.is_consistent());
    cube.scramble(30);
    assert!(cube.is_consistent());
    cube.reset();
    assert!(cube.is_consistent());
}

// =============================================================================
// Sticker Queries
// =============================================================================

/// R carries the front column to the top and the bottom column to the front.
#[test]
fn test_stickers_after_r() {
    let mut cube = CubeEngine::new();
    cube.apply_move_sequence("R");

    for position in [3, 6, 9] {
        assert_eq!(cube.sticker_at(Face::U, position).unwrap(), Color::Blue);
        assert_eq!(cube.sticker_at(Face::F, position).unwrap(), Color::White);
    }
    for position in [1, 4, 7] {
        assert_eq!(cube.sticker_at(Face::U, position).unwrap(), Color::Yellow);
        assert_eq!(cube.sticker_at(Face::F, position).unwrap(), Color::Blue);
    }
}

/// The sticker accessor agrees with indexing the raw array.
#[test]
fn test_sticker_matches_raw_array() {
    let cube = CubeEngine::with_sequence("F R U' L2");
    let state = cube.current_state();
    for face in FACE_ORDER {
        for position in 1..=9 {
            let slot = index(face, position).unwrap();
            assert_eq!(cube.sticker_at(face, position).unwrap(), state[slot]);
        }
    }
}

/// Bad positions fail loudly instead of aliasing another slot.
#[test]
fn test_sticker_bad_position() {
    let cube = CubeEngine::new();
    assert_eq!(cube.sticker_at(Face::F, 0), Err(CubeError::InvalidPosition(0)));
    assert_eq!(cube.sticker_at(Face::F, 12), Err(CubeError::InvalidPosition(12)));
    assert_eq!("Q".parse::<Face>(), Err(CubeError::InvalidFace('Q')));
}

/// Every move preserves nine stickers of each color.
#[test]
fn test_color_counts_preserved() {
    let cube = CubeEngine::with_sequence("R U F D L B R' U' F' D' L' B' R2 U2");
    let state = cube.current_state();
    for color in Color::ALL {
        let count = state.as_array().iter().filter(|&&c| c == color).count();
        assert_eq!(count, 9);
    }
    assert!(Facelets::from_slice(state.as_array()).is_ok());
}

// =============================================================================
// Scrambles
// =============================================================================

/// Scramble length is exactly what was asked for.
#[test]
fn test_scramble_history_length() {
    let mut cube = CubeEngine::new();
    for n in [0, 1, 5, 25, 60] {
        cube.scramble(n);
        assert_eq!(cube.history_len(), n);
    }
}

/// A scramble replaces any earlier history.
#[test]
fn test_scramble_clears_first() {
    let mut cube = CubeEngine::with_sequence("R R R");
    cube.scramble(4);
    assert_eq!(cube.history_len(), 4);
}

/// Scrambles leave the cube unsolved.
#[test]
fn test_scramble_unsolves() {
    let mut cube = CubeEngine::new();
    for _ in 0..20 {
        cube.scramble(20);
        assert!(!cube.is_solved());
        assert_ne!(cube.current_state(), SOLVED);
    }
}

/// A single scrambled move is never solved either.
#[test]
fn test_scramble_one_move() {
    let mut cube = CubeEngine::new();
    for _ in 0..20 {
        cube.scramble(1);
        assert!(!cube.is_solved());
    }
}

/// Same seed, same scramble; different seed, different scramble.
#[test]
fn test_scramble_seeded() {
    let mut a = CubeEngine::with_config(EngineConfig::default().with_seed(5));
    let mut b = CubeEngine::with_config(EngineConfig::default().with_seed(5));
    let mut c = CubeEngine::with_config(EngineConfig::default().with_seed(6));

    a.scramble(25);
    b.scramble(25);
    c.scramble(25);

    assert_eq!(a.history_tokens(), b.history_tokens());
    assert_eq!(a.current_state(), b.current_state());
    assert_ne!(a.history_tokens(), c.history_tokens());
}

/// Engines built with the default config scramble differently.
#[test]
fn test_default_engines_scramble_differently() {
    let mut a = CubeEngine::new();
    let mut b = CubeEngine::new();
    a.scramble(25);
    b.scramble(25);
    assert_ne!(a.history_tokens(), b.history_tokens());
}

/// Consecutive scramble moves never share an axis.
#[test]
fn test_scramble_axis_constraint() {
    let mut cube = CubeEngine::with_config(EngineConfig::default().with_entropy_seed());
    for _ in 0..20 {
        cube.scramble(40);
        let moves: Vec<_> = cube.move_history().into_iter().collect();
        assert!(rubik_engine::engine::is_axis_alternating(&moves));
    }
}

// =============================================================================
// Snapshots
// =============================================================================

/// A snapshot restored from bytes continues where the original left off.
#[test]
fn test_snapshot_bytes_restore() {
    let mut original = CubeEngine::with_config(EngineConfig::default().with_seed(11));
    original.scramble(12);
    original.apply_move_sequence("R U");

    let bytes = original.snapshot().to_bytes().unwrap();
    let snapshot = rubik_engine::CubeSnapshot::from_bytes(&bytes).unwrap();
    let mut restored = CubeEngine::from_snapshot(&snapshot);

    assert_eq!(restored.current_state(), original.current_state());
    assert_eq!(restored.history_tokens(), original.history_tokens());

    original.scramble(8);
    restored.scramble(8);
    assert_eq!(restored.history_tokens(), original.history_tokens());
}

/// A custom starting array round-trips through its letter form.
#[test]
fn test_facelets_letters_restore() {
    let scrambled = CubeEngine::with_sequence("D L' B2").current_state();
    let letters = scrambled.to_letters();

    let parsed: Facelets = letters.parse().unwrap();
    let mut cube = CubeEngine::from_facelets(parsed);
    cube.apply_move_sequence("B2 L D'");
    assert!(cube.is_solved());
}
