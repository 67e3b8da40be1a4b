//! Evaluation strategy for computing a generation.
//!
//! Every strategy produces identical results; they only differ in how the
//! rows of the next generation are scheduled across threads.

/// Grids at or above this many cells are stepped in parallel under [`Algorithm::Auto`]
pub const PARALLEL_THRESHOLD: usize = 100 * 100;

/// How [`super::Grid::step`] spreads work over rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Serial for small grids, rayon row-parallel for large ones
    #[default]
    Auto,
    /// Row by row on the calling thread
    Serial,
    /// Rows distributed with rayon
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Auto, Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for logs and the benchmark table
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Auto => "Auto",
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Whether a grid with `cell_count` cells should use rayon
    pub fn is_parallel(&self, cell_count: usize) -> bool {
        match self {
            Algorithm::Auto => cell_count >= PARALLEL_THRESHOLD,
            Algorithm::Serial => false,
            Algorithm::Parallel => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_auto() {
        assert_eq!(Algorithm::default(), Algorithm::Auto);
    }

    #[test]
    fn test_auto_switches_on_threshold() {
        assert!(!Algorithm::Auto.is_parallel(PARALLEL_THRESHOLD - 1));
        assert!(Algorithm::Auto.is_parallel(PARALLEL_THRESHOLD));
        assert!(!Algorithm::Serial.is_parallel(usize::MAX));
        assert!(Algorithm::Parallel.is_parallel(0));
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
