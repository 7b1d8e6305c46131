//! Straus's method with precomputation for fixed bases.

use core::borrow::Borrow;

use curve::{NafLookupTable, Projective, ScalarField};
use tracing::{debug, trace};

use crate::config::MsmConfig;
use crate::constants::{DEFAULT_DYNAMIC_NAF_WIDTH, DEFAULT_STATIC_NAF_WIDTH};
use crate::errors::MsmError;
use crate::straus::{check_lengths, highest_nonzero_digit, naf_tables};
use crate::traits::{VartimePrecomputedMultiscalarMul, VartimePrecomputedSubsetMultiscalarMul};

fn static_tables<I>(static_points: I, width: usize) -> Vec<NafLookupTable>
where
    I: IntoIterator,
    I::Item: Borrow<Projective>,
{
    let tables: Vec<NafLookupTable> = static_points
        .into_iter()
        .map(|p| NafLookupTable::new(p.borrow(), width))
        .collect();
    debug!(points = tables.len(), naf_width = width, "precomputed static lookup tables");
    tables
}

/// Precomputed width-`w` NAF tables for a fixed set of points, combined with
/// per-call tables for dynamic points in a single doubling chain.
#[derive(Clone, Debug)]
pub struct VartimePrecomputedStraus {
    static_lookup_tables: Vec<NafLookupTable>,
    static_naf_width: usize,
    dynamic_naf_width: usize,
}

impl VartimePrecomputedMultiscalarMul for VartimePrecomputedStraus {
    type Point = Projective;

    fn new<I>(static_points: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<Projective>,
    {
        Self {
            static_lookup_tables: static_tables(static_points, DEFAULT_STATIC_NAF_WIDTH),
            static_naf_width: DEFAULT_STATIC_NAF_WIDTH,
            dynamic_naf_width: DEFAULT_DYNAMIC_NAF_WIDTH,
        }
    }

    fn with_config<I>(static_points: I, config: &MsmConfig) -> Result<Self, MsmError>
    where
        I: IntoIterator,
        I::Item: Borrow<Projective>,
    {
        config.validate()?;
        Ok(Self {
            static_lookup_tables: static_tables(static_points, config.static_naf_width),
            static_naf_width: config.static_naf_width,
            dynamic_naf_width: config.dynamic_naf_width,
        })
    }

    fn len(&self) -> usize {
        self.static_lookup_tables.len()
    }

    fn optional_mixed_multiscalar_mul<I, J, K>(
        &self,
        static_scalars: I,
        dynamic_scalars: J,
        dynamic_points: K,
    ) -> Result<Projective, MsmError>
    where
        I: IntoIterator,
        I::Item: Borrow<ScalarField>,
        J: IntoIterator,
        J::Item: Borrow<ScalarField>,
        K: IntoIterator<Item = Option<Projective>>,
    {
        // Static digits use the full width of the precomputed tables
        let static_nafs: Vec<[i8; 256]> = static_scalars
            .into_iter()
            .map(|c| c.borrow().non_adjacent_form(self.static_naf_width))
            .collect();
        let dynamic_nafs: Vec<[i8; 256]> = dynamic_scalars
            .into_iter()
            .map(|c| c.borrow().non_adjacent_form(self.dynamic_naf_width))
            .collect();

        let dynamic_lookup_tables = naf_tables(dynamic_points, self.dynamic_naf_width)?;

        check_lengths(static_nafs.len(), self.static_lookup_tables.len())?;
        check_lengths(dynamic_nafs.len(), dynamic_lookup_tables.len())?;

        let top = match highest_nonzero_digit(static_nafs.iter().chain(dynamic_nafs.iter())) {
            Some(top) => top,
            None => return Ok(Projective::INFINITY),
        };
        trace!(
            static_terms = static_nafs.len(),
            dynamic_terms = dynamic_nafs.len(),
            top,
            "precomputed straus"
        );

        let mut s = Projective::INFINITY;
        for j in (0..=top).rev() {
            s = s.double();

            for (naf, table) in dynamic_nafs.iter().zip(dynamic_lookup_tables.iter()) {
                s = table.apply_digit(s, naf[j]);
            }

            for (naf, table) in static_nafs.iter().zip(self.static_lookup_tables.iter()) {
                s = table.apply_digit(s, naf[j]);
            }
        }

        Ok(s)
    }
}

/// Precomputed tables for a fixed set of points where each call uses only
/// some of them, addressed by position.
#[derive(Clone, Debug)]
pub struct VartimePrecomputedSubsetStraus {
    static_lookup_tables: Vec<NafLookupTable>,
    static_naf_width: usize,
}

impl VartimePrecomputedSubsetMultiscalarMul for VartimePrecomputedSubsetStraus {
    type Point = Projective;

    fn new<I>(static_points: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<Projective>,
    {
        Self {
            static_lookup_tables: static_tables(static_points, DEFAULT_STATIC_NAF_WIDTH),
            static_naf_width: DEFAULT_STATIC_NAF_WIDTH,
        }
    }

    fn with_config<I>(static_points: I, config: &MsmConfig) -> Result<Self, MsmError>
    where
        I: IntoIterator,
        I::Item: Borrow<Projective>,
    {
        config.validate()?;
        Ok(Self {
            static_lookup_tables: static_tables(static_points, config.static_naf_width),
            static_naf_width: config.static_naf_width,
        })
    }

    fn len(&self) -> usize {
        self.static_lookup_tables.len()
    }

    fn vartime_subset_multiscalar_mul<I, S>(&self, static_scalars: I) -> Result<Projective, MsmError>
    where
        I: IntoIterator<Item = (usize, S)>,
        S: Borrow<ScalarField>,
    {
        let len = self.static_lookup_tables.len();

        let mut positions = Vec::new();
        let mut nafs = Vec::new();
        for (index, scalar) in static_scalars {
            if index >= len {
                return Err(MsmError::IndexOutOfRange { index, len });
            }
            positions.push(index);
            nafs.push(scalar.borrow().non_adjacent_form(self.static_naf_width));
        }

        let top = match highest_nonzero_digit(&nafs) {
            Some(top) => top,
            None => return Ok(Projective::INFINITY),
        };
        trace!(terms = nafs.len(), top, "precomputed subset straus");

        let mut s = Projective::INFINITY;
        for j in (0..=top).rev() {
            s = s.double();

            for (&position, naf) in positions.iter().zip(nafs.iter()) {
                s = self.static_lookup_tables[position].apply_digit(s, naf[j]);
            }
        }

        Ok(s)
    }
}
