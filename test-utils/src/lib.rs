//! Shared fixtures for carton tests.

use std::io::Write;

use carton::{CartonFactory, CartonOptions, Dimensions};
use proptest::prelude::*;
use tempfile::NamedTempFile;

/// An isolated factory plus helpers that check its counters.
///
/// Every test gets its own id sequence and instance count, so tests can run
/// in parallel without seeing each other's cartons.
pub struct TestContext {
    pub factory: CartonFactory,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            factory: CartonFactory::default(),
        }
    }

    pub fn with_options(options: CartonOptions) -> Self {
        Self {
            factory: CartonFactory::new(options).expect("test options must be valid"),
        }
    }

    /// Panics when cartons from this factory are still alive.
    pub fn assert_no_leaks(&self) {
        assert_eq!(
            self.factory.live_instances(),
            0,
            "cartons still alive at end of test"
        );
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes `contents` to a temp file with the given extension (`"json"`,
/// `"yaml"`, ...). The file is deleted when the handle drops.
pub fn config_file(extension: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("carton-")
        .suffix(&format!(".{}", extension))
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes())
        .expect("write temp config");
    file
}

// ============================================================================
// Strategies
// ============================================================================

const MAX_SIDE: i32 = 1000;

/// Dimensions with every side in `1..=1000`.
pub fn valid_dimensions() -> impl Strategy<Value = Dimensions> {
    (1..=MAX_SIDE, 1..=MAX_SIDE, 1..=MAX_SIDE)
        .prop_map(|(length, width, height)| Dimensions::new(length, width, height))
}

/// Dimensions with at least one side `<= 0`.
pub fn invalid_dimensions() -> impl Strategy<Value = Dimensions> {
    (valid_dimensions(), 0..3usize, -MAX_SIDE..=0).prop_map(|(mut d, side, bad)| {
        match side {
            0 => d.set_length(bad),
            1 => d.set_width(bad),
            _ => d.set_height(bad),
        }
        d
    })
}

/// An item whose footprint fits `size`. Height may exceed it.
pub fn item_fitting(size: Dimensions) -> impl Strategy<Value = Dimensions> {
    (
        1..=size.length(),
        1..=size.width(),
        1..=size.height().saturating_mul(2),
    )
        .prop_map(|(length, width, height)| Dimensions::new(length, width, height))
}

/// A carton size, an optional item that fits it, and whether the carton is
/// open. Closed cartons only get items they can close over.
pub fn carton_layout() -> impl Strategy<Value = (Dimensions, Option<Dimensions>, bool)> {
    (valid_dimensions(), any::<bool>()).prop_flat_map(|(size, is_open)| {
        let item = proptest::option::of(item_fitting(size)).prop_map(move |item| {
            item.map(|mut item| {
                if !is_open {
                    item.set_height(item.height().min(size.height()));
                }
                item
            })
        });
        (Just(size), item, Just(is_open))
    })
}
