//! Integration tests for the gridded recombination coefficients

use nebtools_atomic::{AeffGrid, AeffHeI};
use nebtools_rl::{abund_he_i_rl, abund_he_ii_rl, emiss_hbeta, emiss_he_i, emiss_he_ii, Error};

use rstest::{fixture, rstest};

fn relative(value: f64, expected: f64) -> f64 {
    (value / expected - 1.0).abs()
}

/// Flat Hβ grid at the classic case-B value, exact under interpolation
#[fixture]
fn hbeta_grid() -> AeffGrid {
    AeffGrid {
        temperatures: vec![5000.0, 10000.0, 20000.0],
        densities: vec![100.0, 1000.0, 10000.0, 100000.0],
        values: vec![vec![3.03e-14; 4]; 3],
        wavelength: 4861.33,
    }
    .validated()
    .unwrap()
}

/// Grid sampling α = (2 + 3x + 4y + 0.5xy)·10⁻¹⁴ at x = log T, y = log N,
/// which bilinear interpolation on the log axes must reproduce exactly
#[fixture]
fn bilinear_grid() -> AeffGrid {
    AeffGrid {
        temperatures: vec![5000.0, 10000.0, 20000.0, 40000.0],
        densities: vec![100.0, 1000.0, 10000.0, 100000.0],
        values: vec![
            vec![
                2.4795880017344075e-13,
                3.0645365019512083e-13,
                3.6494850021680096e-13,
                4.2344335023848103e-13,
            ],
            vec![2.6e-13, 3.2e-13, 3.8e-13, 4.4e-13],
            vec![
                2.7204119982655926e-13,
                3.3354634980487917e-13,
                3.950514997831991e-13,
                4.56556649761519e-13,
            ],
            vec![
                2.840823996531185e-13,
                3.470926996097583e-13,
                4.1010299956639813e-13,
                4.73113299523038e-13,
            ],
        ],
        wavelength: 4861.33,
    }
    .validated()
    .unwrap()
}

#[fixture]
fn he_ii_grid() -> AeffGrid {
    AeffGrid {
        temperatures: vec![5000.0, 10000.0, 20000.0],
        densities: vec![100.0, 10000.0, 1000000.0],
        values: vec![vec![1.66e-13; 3]; 3],
        wavelength: 4685.68,
    }
    .validated()
    .unwrap()
}

/// Ten-line table in published order, 4471.50 Å at index 10
#[fixture]
fn he_i_grids() -> AeffHeI {
    let mut values = vec![vec![vec![2.66e-14; 3]; 3]; 10];
    // first line carries a distinct value to pin the index mapping
    values[0] = vec![vec![1.0e-14; 3]; 3];

    AeffHeI {
        temperatures: vec![5000.0, 10000.0, 20000.0],
        densities: vec![100.0, 10000.0, 1000000.0],
        wavelengths: vec![
            4026.20, 4120.82, 4387.93, 4437.55, 4471.47, 4713.17, 4921.93, 5015.68, 5047.74,
            4471.50,
        ],
        values,
    }
    .validated()
    .unwrap()
}

#[rstest]
fn hbeta_on_a_flat_grid_is_the_tabulated_value(hbeta_grid: AeffGrid) {
    let eps = emiss_hbeta(&hbeta_grid, 10000.0, 5000.0).unwrap();
    assert!(relative(eps, 1.2381242212122996e-25) < 1e-12);
}

#[rstest]
fn interpolation_reproduces_a_bilinear_surface(bilinear_grid: AeffGrid) {
    let eps = emiss_hbeta(&bilinear_grid, 7000.0, 3000.0).unwrap();
    assert!(relative(eps, 1.3945738919972478e-24) < 1e-10);
}

#[rstest]
fn extrapolation_extends_the_edge_intervals(bilinear_grid: AeffGrid) {
    // both axes out of range; the extension of a bilinear surface in the
    // log axes is the surface itself
    let eps = emiss_hbeta(&bilinear_grid, 60000.0, 500000.0).unwrap();
    assert!(relative(eps, 2.155300659800045e-24) < 1e-10);
}

#[rstest]
fn he_ii_uses_its_own_wavelength(he_ii_grid: AeffGrid) {
    let eps = emiss_he_ii(&he_ii_grid, 10000.0, 5000.0).unwrap();
    assert!(relative(eps, 7.037398700353082e-25) < 1e-12);
}

#[rstest]
fn he_i_line_index_is_one_based(he_i_grids: AeffHeI) {
    // published index 10 maps to the last row of the ten-line table
    let eps = emiss_he_i(&he_i_grids, 10000.0, 5000.0, 10).unwrap();
    assert!(relative(eps, 1.1816941781273277e-25) < 1e-12);

    // index 1 picks the first row with its own coefficient
    let eps = emiss_he_i(&he_i_grids, 10000.0, 5000.0, 1).unwrap();
    assert!(relative(eps, 4.9337978323712254e-26) < 1e-12);
}

#[rstest]
#[case(0)]
#[case(11)]
fn he_i_rejects_indices_outside_the_table(he_i_grids: AeffHeI, #[case] line: usize) {
    assert!(matches!(
        emiss_he_i(&he_i_grids, 10000.0, 5000.0, line),
        Err(Error::LineIndexOutOfRange { count: 10, .. })
    ));
}

#[rstest]
fn helium_abundances_anchor_to_hbeta(
    hbeta_grid: AeffGrid,
    he_i_grids: AeffHeI,
    he_ii_grid: AeffGrid,
) {
    let he_plus = abund_he_i_rl(&hbeta_grid, &he_i_grids, 10000.0, 5000.0, 10, 2.104).unwrap();
    assert!(relative(he_plus, 0.022044733820716075) < 1e-12);

    let he_double = abund_he_ii_rl(&hbeta_grid, &he_ii_grid, 10000.0, 5000.0, 17.5).unwrap();
    assert!(relative(he_double, 0.030788612090612625) < 1e-12);
}

#[rstest]
fn non_positive_plasma_conditions_are_rejected(hbeta_grid: AeffGrid) {
    assert!(matches!(
        emiss_hbeta(&hbeta_grid, 0.0, 5000.0),
        Err(Error::InvalidTemperature(_))
    ));
    assert!(matches!(
        emiss_hbeta(&hbeta_grid, 10000.0, -1.0),
        Err(Error::InvalidDensity(_))
    ));
}
