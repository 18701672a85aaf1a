//! Integration tests for the JSON store readers and record validation

use nebtools_atomic::{
    read_aeff_collection, read_aeff_he_i_pfsd12, read_aeff_ppb91, read_aeff_sh95, read_aij,
    read_branching, read_levels, read_omij, Atom, EnergyLevels, Error,
};

use rstest::rstest;

#[rstest]
fn reads_the_sulfur_ladder() {
    let levels = read_levels("./data/levels.json", "S", "II", 5).unwrap();

    assert_eq!(levels.len(), 5);
    assert_eq!(levels.energy(0), 0.0);
    // the 2D 5/2 term carries g = 2J + 1 = 6
    assert_eq!(levels.weight(2), 6.0);
}

#[rstest]
fn requesting_more_levels_than_stored_is_an_error() {
    assert!(matches!(
        read_levels("./data/levels.json", "s", "ii", 6),
        Err(Error::TooFewLevels {
            requested: 6,
            found: 5
        })
    ));
}

#[rstest]
fn missing_ions_are_reported_with_their_key() {
    assert!(matches!(
        read_levels("./data/levels.json", "o", "iii", 3),
        Err(Error::IonNotFound { .. })
    ));
}

#[rstest]
fn unordered_ladders_are_rejected() {
    assert!(matches!(
        read_levels("./data/levels.json", "x", "i", 3),
        Err(Error::UnorderedLevels { .. })
    ));
}

#[rstest]
fn omij_pulls_out_the_shared_axis() {
    let omij = read_omij("./data/omij.json", "s", "ii").unwrap();

    assert_eq!(omij.temperatures.len(), 6);
    assert_eq!(omij.irats, 0);
    assert_eq!(omij.transitions.len(), 10);

    // stored 1-based pairs become zero-based in the typed view
    assert_eq!(omij.transitions[0].lower, 0);
    assert_eq!(omij.transitions[0].upper, 1);
    assert_eq!(omij.max_level(), 4);
}

#[rstest]
fn ragged_strength_rows_are_rejected() {
    assert!(matches!(
        read_omij("./data/omij.json", "x", "i"),
        Err(Error::RaggedStrengths {
            expected: 3,
            found: 2,
            ..
        })
    ));
}

#[rstest]
fn aij_reads_the_dense_matrix() {
    let aij = read_aij("./data/aij.json", "s", "ii").unwrap();

    assert_eq!(aij.level_count(), 5);
    assert_eq!(aij.a(4, 0), 0.225);
    assert_eq!(aij.a(0, 4), 0.0);
}

#[rstest]
fn negative_rates_are_rejected() {
    assert!(matches!(
        read_aij("./data/aij.json", "x", "i"),
        Err(Error::NegativeRate { upper: 2, lower: 1 })
    ));
}

#[rstest]
fn atom_bundles_cross_validate() {
    let levels = read_levels("./data/levels.json", "s", "ii", 5).unwrap();
    let omij = read_omij("./data/omij.json", "s", "ii").unwrap();
    let aij = read_aij("./data/aij.json", "s", "ii").unwrap();

    let atom = Atom::new("S", "II", levels.clone(), omij.clone(), aij).unwrap();
    assert_eq!(atom.level_count(), 5);
    assert_eq!(atom.key(), "s_ii");

    // an A matrix of the wrong dimension is caught
    let small_aij = read_aij("./data/aij.json", "y", "i").unwrap();
    assert!(matches!(
        Atom::new("s", "ii", levels, omij.clone(), small_aij),
        Err(Error::InconsistentPayload { .. })
    ));

    // an Omega table referencing levels beyond the ladder is caught
    let truncated = EnergyLevels {
        levels: read_levels("./data/levels.json", "s", "ii", 5)
            .unwrap()
            .levels[..3]
            .to_vec(),
    }
    .validated()
    .unwrap();
    let aij3 = read_aij("./data/aij.json", "y", "i").unwrap();
    assert!(matches!(
        Atom::new("s", "ii", truncated, omij, aij3),
        Err(Error::LevelBeyondModel { count: 3, .. })
    ));
}

#[rstest]
fn sh95_grids_read_for_hydrogen_and_helium() {
    let hbeta = read_aeff_sh95("./data/aeff_sh95.json", "h", "i").unwrap();
    assert_eq!(hbeta.wavelength, 4861.33);
    assert_eq!(hbeta.values.len(), 3);
    assert_eq!(hbeta.values[0].len(), 4);

    let he_ii = read_aeff_sh95("./data/aeff_sh95.json", "he", "ii").unwrap();
    assert_eq!(he_ii.wavelength, 4685.68);
}

#[rstest]
fn porter_he_i_grids_read_per_line() {
    let he_i = read_aeff_he_i_pfsd12("./data/aeff_hei.json", "he", "i").unwrap();

    assert_eq!(he_i.line_count(), 3);
    assert_eq!(he_i.wavelengths[1], 4471.5);
    assert_eq!(he_i.values[1].len(), 3);
}

#[rstest]
fn ppb91_rows_default_their_branching_to_unity() {
    let ciii = read_aeff_ppb91("./data/aeff_ppb91.json", "c", "iii").unwrap();
    assert_eq!(ciii.len(), 3);
    assert_eq!(ciii[0].br, 0.332);

    // the N III row publishes no branching ratio
    let niii = read_aeff_ppb91("./data/aeff_ppb91.json", "n", "iii").unwrap();
    assert_eq!(niii[0].br, 1.0);
}

#[rstest]
fn collection_rows_and_companion_branching_read_together() {
    let cii = read_aeff_collection("./data/aeff_collection.json", "c", "ii").unwrap();
    assert_eq!(cii.len(), 3);

    let branching = read_branching("./data/branching.json", "n", "ii").unwrap();
    assert_eq!(branching.lookup(5679.56, 0.01), Some(0.332));
    assert_eq!(branching.lookup(4000.0, 0.01), None);
}
