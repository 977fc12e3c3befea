//! Price selection semantics.

use rop_core::Baselines;
use rop_solver::GridSettings;

/// Resolves the requested price the way a bounded slider would: default
/// to the reference price, clamp to the grid bounds, step by whole units.
///
/// Total over any input: if the bounds bracket no whole unit (a sub-unit
/// reference price, say), the unrounded clamped value is kept rather than
/// stepping outside the bounds.
pub fn slider_price(requested: Option<f64>, baselines: &Baselines, grid: &GridSettings) -> f64 {
    let (lo, hi) = grid.bounds(baselines.reference_price);
    let bounded = requested
        .unwrap_or(baselines.reference_price)
        .max(lo)
        .min(hi);
    let (step_lo, step_hi) = (lo.ceil(), hi.floor());
    if step_lo <= step_hi {
        bounded.round().clamp(step_lo, step_hi)
    } else {
        bounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[fixture]
    fn baselines() -> Baselines {
        Baselines::new(500.0, 1000.0).unwrap()
    }

    #[rstest]
    fn defaults_to_the_reference_price(baselines: Baselines) {
        assert_eq!(
            slider_price(None, &baselines, &GridSettings::default()),
            500.0
        );
    }

    #[rstest]
    fn rounds_to_whole_units(baselines: Baselines) {
        assert_eq!(
            slider_price(Some(512.4), &baselines, &GridSettings::default()),
            512.0
        );
    }

    #[rstest]
    #[case(100.0, 350.0)]
    #[case(9000.0, 650.0)]
    fn clamps_to_the_grid_bounds(baselines: Baselines, #[case] requested: f64, #[case] expected: f64) {
        assert_eq!(
            slider_price(Some(requested), &baselines, &GridSettings::default()),
            expected
        );
    }

    #[rstest]
    fn subunit_reference_price_skips_whole_unit_stepping() {
        // Bounds [0.35, 0.65] contain no whole unit; the clamped value
        // must come back as-is instead of panicking or escaping the
        // bounds.
        let baselines = Baselines::new(0.5, 1000.0).unwrap();
        let grid = GridSettings::default();
        assert_eq!(slider_price(None, &baselines, &grid), 0.5);
        assert_eq!(slider_price(Some(0.4), &baselines, &grid), 0.4);
        assert_eq!(slider_price(Some(100.0), &baselines, &grid), 0.65);
    }

    #[rstest]
    fn inverted_bounds_still_resolve(baselines: Baselines) {
        // An inverted grid is rejected up front by `validate`, but price
        // resolution must stay total regardless of call order.
        let inverted = GridSettings {
            lower_fraction: 1.3,
            upper_fraction: 0.7,
            samples: 200,
        };
        let price = slider_price(Some(500.0), &baselines, &inverted);
        assert!(price.is_finite());
    }
}
