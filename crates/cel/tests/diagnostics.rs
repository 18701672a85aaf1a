//! Integration tests for the line-ratio diagnostics

use nebtools_atomic::{
    Atom, CollisionStrengths, EnergyLevel, EnergyLevels, OmijRecord, TransitionProbabilities,
};
use nebtools_cel::{
    density, emissivity_ratio, line_emissivity, populations, temperature, Error, LineSelection,
};

use rstest::{fixture, rstest};

/// Shared temperature axis for the synthetic Ω tables
const TEMPERATURE_NODES: [f64; 4] = [1000.0, 5000.0, 10000.0, 20000.0];

fn build_atom(
    levels: &[(f64, f64)],
    omegas: &[(usize, usize, f64)],
    rates: Vec<Vec<f64>>,
) -> Atom {
    let ladder = EnergyLevels {
        levels: levels
            .iter()
            .map(|&(energy, j)| EnergyLevel { energy, j })
            .collect(),
    }
    .validated()
    .unwrap();

    let mut records = vec![OmijRecord {
        level1: 0,
        level2: 0,
        strength: TEMPERATURE_NODES.to_vec(),
    }];
    records.extend(omegas.iter().map(|&(lower, upper, omega)| OmijRecord {
        level1: lower,
        level2: upper,
        strength: vec![omega; TEMPERATURE_NODES.len()],
    }));
    let collisions = CollisionStrengths::from_records(records, 0).unwrap();

    let radiative = TransitionProbabilities { rates }.validated().unwrap();

    Atom::new("x", "i", ladder, collisions, radiative).unwrap()
}

/// Widely spaced upper levels make the 3→1 over 2→1 ratio a steep,
/// monotone function of temperature through the Boltzmann factor
#[fixture]
fn temperature_sensitive() -> Atom {
    build_atom(
        &[(0.0, 1.5), (15000.0, 1.5), (40000.0, 2.5)],
        &[(1, 2, 1.0), (1, 3, 0.8), (2, 3, 0.3)],
        vec![
            vec![0.0, 0.0, 0.0],
            vec![1.0e-3, 0.0, 0.0],
            vec![1.0e-2, 5.0e-4, 0.0],
        ],
    )
}

/// A near-degenerate doublet whose members bracket the search window with
/// very different critical densities, so the 2→1 over 3→1 ratio falls
/// monotonically with density
#[fixture]
fn density_sensitive() -> Atom {
    build_atom(
        &[(0.0, 1.5), (15000.0, 1.5), (15100.0, 2.5)],
        &[(1, 2, 1.0), (1, 3, 1.0), (2, 3, 0.5)],
        vec![
            vec![0.0, 0.0, 0.0],
            vec![2.0e-5, 0.0, 0.0],
            vec![1.0e-2, 0.0, 0.0],
        ],
    )
}

#[rstest]
#[case(7500.0)]
#[case(12000.0)]
#[case(18000.0)]
fn temperature_round_trips_through_the_forward_model(
    temperature_sensitive: Atom,
    #[case] target: f64,
) {
    let ne = 1000.0;
    let numerator = LineSelection::parse("1,3/");
    let denominator = LineSelection::parse("1,2/");

    let n = populations(&temperature_sensitive, target, ne).unwrap();
    let observed = emissivity_ratio(&temperature_sensitive, &n, &numerator, &denominator).unwrap();

    let te = temperature(&temperature_sensitive, observed, ne, &numerator, &denominator).unwrap();

    // nine passes over the 15000 K window resolve to under a kelvin
    assert!((te - target).abs() < 2.0);
}

#[rstest]
#[case(2500.0)]
#[case(20000.0)]
#[case(80000.0)]
fn density_round_trips_through_the_forward_model(density_sensitive: Atom, #[case] target: f64) {
    let te = 10000.0;
    let numerator = LineSelection::parse("1,2/");
    let denominator = LineSelection::parse("1,3/");

    let n = populations(&density_sensitive, te, target).unwrap();
    let observed = emissivity_ratio(&density_sensitive, &n, &numerator, &denominator).unwrap();

    let ne = density(&density_sensitive, observed, te, &numerator, &denominator).unwrap();

    // nine passes over the 100000 cm^-3 window resolve to a few cm^-3
    assert!((ne - target).abs() < 12.0);
}

#[rstest]
fn single_pair_selections_reduce_to_plain_ratios(temperature_sensitive: Atom) {
    let n = populations(&temperature_sensitive, 10000.0, 1000.0).unwrap();

    let ratio = emissivity_ratio(
        &temperature_sensitive,
        &n,
        &LineSelection::parse("1,2/"),
        &LineSelection::parse("1,3/"),
    )
    .unwrap();

    let single = line_emissivity(&temperature_sensitive, &n, 0, 1).unwrap()
        / line_emissivity(&temperature_sensitive, &n, 0, 2).unwrap();

    assert!((ratio / single - 1.0).abs() < 1e-14);
}

#[rstest]
fn ratio_below_the_window_resolves_to_the_window_edge(temperature_sensitive: Atom) {
    let ne = 1000.0;
    let numerator = LineSelection::parse("1,3/");
    let denominator = LineSelection::parse("1,2/");

    // the modeled ratio grows with temperature, so half the 5000 K value
    // corresponds to a plasma below the window
    let n = populations(&temperature_sensitive, 5000.0, ne).unwrap();
    let observed =
        emissivity_ratio(&temperature_sensitive, &n, &numerator, &denominator).unwrap() * 0.5;

    let te = temperature(&temperature_sensitive, observed, ne, &numerator, &denominator).unwrap();
    assert!((te - 5000.0).abs() < 1e-9);
}

#[rstest]
fn ratio_above_the_window_walks_past_the_far_edge(temperature_sensitive: Atom) {
    let ne = 1000.0;
    let numerator = LineSelection::parse("1,3/");
    let denominator = LineSelection::parse("1,2/");

    let n = populations(&temperature_sensitive, 20000.0, ne).unwrap();
    let observed =
        emissivity_ratio(&temperature_sensitive, &n, &numerator, &denominator).unwrap() * 2.0;

    // no bracket exists; the anchor drifts monotonically beyond the window
    // top instead of failing
    let te = temperature(&temperature_sensitive, observed, ne, &numerator, &denominator).unwrap();
    assert!(te >= 20000.0);
}

#[rstest]
fn unresolvably_low_densities_land_on_the_evaluation_floor(density_sensitive: Atom) {
    let te = 10000.0;
    let numerator = LineSelection::parse("1,2/");
    let denominator = LineSelection::parse("1,3/");

    // the modeled ratio falls with density, so anything above the value at
    // the floor corresponds to a density below it
    let n = populations(&density_sensitive, te, 1.0).unwrap();
    let observed =
        emissivity_ratio(&density_sensitive, &n, &numerator, &denominator).unwrap() * 1.05;

    let ne = density(&density_sensitive, observed, te, &numerator, &denominator).unwrap();
    assert_eq!(ne, 1.0);
}

#[rstest]
fn invalid_inputs_are_rejected(temperature_sensitive: Atom) {
    let numerator = LineSelection::parse("1,3/");
    let denominator = LineSelection::parse("1,2/");

    assert!(matches!(
        temperature(&temperature_sensitive, -1.0, 1000.0, &numerator, &denominator),
        Err(Error::InvalidRatio(_))
    ));
    assert!(matches!(
        temperature(&temperature_sensitive, 2.0, 0.0, &numerator, &denominator),
        Err(Error::InvalidDensity(_))
    ));
    assert!(matches!(
        density(&temperature_sensitive, 2.0, -100.0, &numerator, &denominator),
        Err(Error::InvalidTemperature(_))
    ));
    assert!(matches!(
        temperature(
            &temperature_sensitive,
            2.0,
            1000.0,
            &LineSelection::parse("1,6/"),
            &denominator
        ),
        Err(Error::LevelOutOfRange { level: 6, count: 3 })
    ));
    assert!(matches!(
        temperature(
            &temperature_sensitive,
            2.0,
            1000.0,
            &LineSelection::parse("/"),
            &denominator
        ),
        Err(Error::EmptySelection)
    ));
}
