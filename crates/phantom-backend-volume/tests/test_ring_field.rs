//! Ring field tests.
//!
//! Covers the draw order contract, ring coverage, the shrinking radius, and
//! strict wood type alternation.

use std::collections::HashSet;

use phantom_backend_volume::{generate_ring_field, RandomStream, RingFieldGenerator};
use phantom_spec::{GenerationParameters, WoodBand, WoodType};
use pretty_assertions::assert_eq;

// ============================================================================
// Helpers
// ============================================================================

/// Stream that records each draw and returns scripted values.
struct ScriptedStream {
    draws: Vec<String>,
    pivot: [u32; 2],
    start_early: bool,
}

impl ScriptedStream {
    fn new(pivot: [u32; 2], start_early: bool) -> Self {
        Self {
            draws: Vec::new(),
            pivot,
            start_early,
        }
    }
}

impl RandomStream for ScriptedStream {
    fn below(&mut self, bound: u32) -> u32 {
        let axis = if self.draws.is_empty() { 0 } else { 1 };
        self.draws.push(format!("below({})", bound));
        self.pivot[axis]
    }

    fn inclusive(&mut self, min: u32, max: u32) -> u32 {
        self.draws.push(format!("inclusive({}, {})", min, max));
        max
    }

    fn coin(&mut self) -> bool {
        self.draws.push("coin".to_string());
        self.start_early
    }
}

fn band(width: [u32; 2], gray: [u32; 2]) -> WoodBand {
    WoodBand {
        width_range: width,
        gray_range: gray,
    }
}

// ============================================================================
// Draw Order
// ============================================================================

/// Pivot x, pivot y, start flag, then (width, color) per ring.
#[test]
fn test_draw_order_contract() {
    let generator = RingFieldGenerator::new(band([4, 5], [180, 190]), band([2, 3], [40, 50]));
    let mut stream = ScriptedStream::new([1, 2], true);
    let field = generator.generate_with(&mut stream, 6, 4).unwrap();

    // radius 10 -> 5 (early, width 5) -> 2 (late, width 3) -> -3 (early, width 5)
    assert_eq!(
        stream.draws,
        vec![
            "below(6)",
            "below(4)",
            "coin",
            "inclusive(4, 5)",
            "inclusive(180, 190)",
            "inclusive(2, 3)",
            "inclusive(40, 50)",
            "inclusive(4, 5)",
            "inclusive(180, 190)",
        ]
    );
    assert_eq!(field.pivot, [1, 2]);
    assert_eq!(
        field.rings.iter().map(|r| r.radius).collect::<Vec<_>>(),
        vec![10, 5, 2]
    );
}

#[test]
fn test_scripted_field_colors() {
    let generator = RingFieldGenerator::new(band([4, 5], [180, 190]), band([2, 3], [40, 50]));
    let mut stream = ScriptedStream::new([1, 2], true);
    let field = generator.generate_with(&mut stream, 6, 4).unwrap();

    // Innermost ring (radius 2, early, color 190) covers the pivot.
    assert_eq!(field.image.get_pixel(1, 2)[0], 190);
    // Distance sqrt(8) from the pivot: outside radius 2, inside radius 5.
    assert_eq!(field.image.get_pixel(3, 0)[0], 50);
    // Distance sqrt(17): the radius 5 ring is the smallest reaching it.
    assert_eq!(field.image.get_pixel(5, 3)[0], 50);
}

#[test]
fn test_late_start_uses_late_band_first() {
    let generator = RingFieldGenerator::new(band([4, 5], [180, 190]), band([2, 3], [40, 50]));
    let mut stream = ScriptedStream::new([0, 0], false);
    let field = generator.generate_with(&mut stream, 3, 3).unwrap();

    assert_eq!(stream.draws[3], "inclusive(2, 3)");
    assert_eq!(field.rings[0].wood, WoodType::Late);
}

// ============================================================================
// Structural Properties
// ============================================================================

#[test]
fn test_every_pixel_is_painted_with_a_drawn_color() {
    let params = GenerationParameters::default();
    for seed in [0u32, 1, 42, 9999] {
        let field = RingFieldGenerator::from_params(&params)
            .generate(seed, 120, 80)
            .unwrap();
        let drawn: HashSet<u8> = field.rings.iter().map(|r| r.color).collect();

        for pixel in field.image.pixels() {
            assert_ne!(pixel[0], 0, "seed {} left an unpainted pixel", seed);
            assert!(drawn.contains(&pixel[0]));
        }
    }
}

#[test]
fn test_radius_strictly_decreases_and_loop_is_bounded() {
    let params = GenerationParameters::default();
    let field = RingFieldGenerator::from_params(&params)
        .generate(7, 200, 150)
        .unwrap();

    let initial = field.initial_radius();
    assert_eq!(initial, 350);
    for pair in field.rings.windows(2) {
        assert!(pair[1].radius < pair[0].radius);
        assert_eq!(pair[1].radius, pair[0].radius - pair[0].width);
    }
    let last = field.rings.last().unwrap();
    assert!(last.width >= last.radius, "loop must stop once radius <= 0");

    let min_width = params.min_ring_width();
    let bound = (initial + min_width - 1) / min_width;
    assert!(field.rings.len() as u32 <= bound);
}

#[test]
fn test_wood_type_alternates_every_ring() {
    let field = RingFieldGenerator::from_params(&GenerationParameters::default())
        .generate(11, 60, 60)
        .unwrap();
    for pair in field.rings.windows(2) {
        assert_eq!(pair[1].wood, pair[0].wood.flip());
    }
}

#[test]
fn test_ring_draws_respect_band_ranges() {
    let early = band([2, 3], [210, 220]);
    let late = band([5, 8], [10, 30]);
    let field = generate_ring_field(5, 90, 70, early, late).unwrap();

    for ring in &field.rings {
        let b = if ring.wood == WoodType::Early { early } else { late };
        assert!((b.width_range[0]..=b.width_range[1]).contains(&ring.width));
        assert!((b.gray_range[0]..=b.gray_range[1]).contains(&(ring.color as u32)));
    }
}

#[test]
fn test_same_seed_same_field() {
    let params = GenerationParameters::default();
    let generator = RingFieldGenerator::from_params(&params);
    let a = generator.generate(123, 100, 70).unwrap();
    let b = generator.generate(123, 100, 70).unwrap();
    assert_eq!(a.pivot, b.pivot);
    assert_eq!(a.rings, b.rings);
    assert_eq!(a.image, b.image);

    let c = generator.generate(124, 100, 70).unwrap();
    assert_ne!(a.image, c.image);
}

#[test]
fn test_pivot_within_canvas() {
    let generator = RingFieldGenerator::from_params(&GenerationParameters::default());
    for seed in 0..50 {
        let field = generator.generate(seed, 17, 9).unwrap();
        assert!(field.pivot[0] < 17);
        assert!(field.pivot[1] < 9);
    }
}
