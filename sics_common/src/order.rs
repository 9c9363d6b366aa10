//! Caller-facing vertex order selection.
//!
//! Static-order variants accept either an explicit permutation of the
//! pattern vertices or one of two named heuristics; dynamic-MRV variants
//! accept neither. Parsing and shape validation live here so both the CLI
//! and the library surface reject malformed orders before any search work.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SicsError;

/// Named static ordering heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderHeuristic {
    /// `DEG`: degree descending, ties by ascending vertex index.
    DegreeDescending,
    /// `GCF`: greatest constraint first — after the highest-degree vertex,
    /// repeatedly take the unplaced vertex with the most edges into the
    /// ordered prefix (ties by higher degree, then ascending index).
    GreatestConstraintFirst,
}

impl OrderHeuristic {
    /// The benchmark-suite token for this heuristic.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::DegreeDescending => "DEG",
            Self::GreatestConstraintFirst => "GCF",
        }
    }
}

impl FromStr for OrderHeuristic {
    type Err = SicsError;

    fn from_str(s: &str) -> Result<Self, SicsError> {
        match s {
            "DEG" => Ok(Self::DegreeDescending),
            "GCF" => Ok(Self::GreatestConstraintFirst),
            other => Err(SicsError::UnknownHeuristic(other.to_string())),
        }
    }
}

/// A caller-supplied static vertex order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VertexOrder {
    /// An explicit permutation of the pattern vertex indices.
    Explicit(Vec<usize>),
    /// A named heuristic resolved against the pattern graph at search start.
    Heuristic(OrderHeuristic),
}

impl VertexOrder {
    /// Validate an explicit permutation against the pattern size.
    ///
    /// Heuristic orders always pass; they are resolved later.
    pub fn validate(&self, pattern_size: usize) -> Result<(), SicsError> {
        let VertexOrder::Explicit(perm) = self else {
            return Ok(());
        };
        let mut seen = vec![false; pattern_size];
        if perm.len() != pattern_size {
            return Err(SicsError::InvalidOrder {
                expected: pattern_size,
            });
        }
        for &v in perm {
            if v >= pattern_size || seen[v] {
                return Err(SicsError::InvalidOrder {
                    expected: pattern_size,
                });
            }
            seen[v] = true;
        }
        Ok(())
    }
}

impl FromStr for VertexOrder {
    type Err = SicsError;

    /// Parse a heuristic token, or a comma-separated explicit permutation.
    fn from_str(s: &str) -> Result<Self, SicsError> {
        if let Ok(heuristic) = s.parse::<OrderHeuristic>() {
            return Ok(Self::Heuristic(heuristic));
        }
        let indices = s
            .split(',')
            .map(|part| part.trim().parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| SicsError::UnknownHeuristic(s.to_string()))?;
        Ok(Self::Explicit(indices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for h in [
            OrderHeuristic::DegreeDescending,
            OrderHeuristic::GreatestConstraintFirst,
        ] {
            assert_eq!(h.token().parse::<OrderHeuristic>().unwrap(), h);
        }
        assert!("MRV".parse::<OrderHeuristic>().is_err());
    }

    #[test]
    fn explicit_orders_parse_and_validate() {
        let order: VertexOrder = "2, 0, 1".parse().unwrap();
        assert_eq!(order, VertexOrder::Explicit(vec![2, 0, 1]));
        assert!(order.validate(3).is_ok());
        assert!(order.validate(4).is_err());

        let dup: VertexOrder = "0,0,1".parse().unwrap();
        assert!(dup.validate(3).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!("DEG,GCF".parse::<VertexOrder>().is_err());
        assert!("".parse::<VertexOrder>().is_err());
    }
}
