//! Readers for the JSON atomic-data store
//!
//! Each dataset kind lives in its own store file, keyed by lower-case
//! `<element>_<ion>`. The store path is always an explicit argument; there
//! is no process-wide data directory.

use crate::collision::{CollisionStrengths, OmijRecord};
use crate::error::{Error, Result};
use crate::level::EnergyLevels;
use crate::recomb::{AeffGrid, AeffHeI, BranchingRatios, RecombLine};
use crate::transition::TransitionProbabilities;

use nebtools_utils::f;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Store key for an ion, e.g. `("S", "II") -> "s_ii"`
pub fn store_key(element: &str, ion: &str) -> String {
    f!(
        "{}_{}",
        element.trim().to_lowercase(),
        ion.trim().to_lowercase()
    )
}

/// Pull one ion's record out of a store file
fn lookup<T, P>(path: P, element: &str, ion: &str) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path: &Path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let store: serde_json::Value = serde_json::from_reader(reader)?;

    let key = store_key(element, ion);
    let record = store.get(&key).ok_or_else(|| Error::IonNotFound {
        key: key.clone(),
        path: path.display().to_string(),
    })?;

    Ok(serde_json::from_value(record.clone())?)
}

/// Read the energy-level ladder for an ion
///
/// The ladder must carry at least `level_count` rows; validation also
/// requires strictly ascending energies.
///
/// ```rust, no_run
/// # use nebtools_atomic::read_levels;
/// let levels = read_levels("data/levels.json", "s", "ii", 5).unwrap();
/// assert!(levels.len() >= 5);
/// ```
pub fn read_levels<P: AsRef<Path>>(
    path: P,
    element: &str,
    ion: &str,
    level_count: usize,
) -> Result<EnergyLevels> {
    let levels: EnergyLevels = lookup(path, element, ion)?;
    let levels = levels.validated()?;

    if levels.len() < level_count {
        return Err(Error::TooFewLevels {
            requested: level_count,
            found: levels.len(),
        });
    }
    Ok(levels)
}

#[derive(Deserialize)]
struct OmijPayload {
    #[serde(default)]
    irats: i32,
    records: Vec<OmijRecord>,
}

/// Read the collision-strength table for an ion
///
/// The stored record sequence starts with the temperature axis (see
/// [OmijRecord]); the result is the typed table with zero-based transition
/// indices and the shared axis pulled out.
pub fn read_omij<P: AsRef<Path>>(path: P, element: &str, ion: &str) -> Result<CollisionStrengths> {
    let payload: OmijPayload = lookup(path, element, ion)?;
    CollisionStrengths::from_records(payload.records, payload.irats)
}

/// Read the dense transition-probability matrix for an ion
pub fn read_aij<P: AsRef<Path>>(
    path: P,
    element: &str,
    ion: &str,
) -> Result<TransitionProbabilities> {
    let rates: TransitionProbabilities = lookup(path, element, ion)?;
    rates.validated()
}

/// Read a gridded α_eff record of the SH95 family (Hβ, He II)
pub fn read_aeff_sh95<P: AsRef<Path>>(path: P, element: &str, ion: &str) -> Result<AeffGrid> {
    let grid: AeffGrid = lookup(path, element, ion)?;
    grid.validated()
}

/// Read the Porter et al. He I per-line α_eff grids
pub fn read_aeff_he_i_pfsd12<P: AsRef<Path>>(
    path: P,
    element: &str,
    ion: &str,
) -> Result<AeffHeI> {
    let grids: AeffHeI = lookup(path, element, ion)?;
    grids.validated()
}

#[derive(Deserialize)]
struct FitPayload {
    lines: Vec<RecombLine>,
}

/// Read the PPB91 analytic-fit rows for an ion (C III, N III)
pub fn read_aeff_ppb91<P: AsRef<Path>>(
    path: P,
    element: &str,
    ion: &str,
) -> Result<Vec<RecombLine>> {
    let payload: FitPayload = lookup(path, element, ion)?;
    Ok(payload.lines)
}

/// Read the Davey-collection analytic-fit rows (C II, N II, O II, Ne II)
pub fn read_aeff_collection<P: AsRef<Path>>(
    path: P,
    element: &str,
    ion: &str,
) -> Result<Vec<RecombLine>> {
    let payload: FitPayload = lookup(path, element, ion)?;
    Ok(payload.lines)
}

/// Read the companion branching-ratio table for a collection ion
pub fn read_branching<P: AsRef<Path>>(
    path: P,
    element: &str,
    ion: &str,
) -> Result<BranchingRatios> {
    lookup(path, element, ion)
}
