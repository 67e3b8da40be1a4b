/// Raw value stored for a single cell.
/// Kept as an integer so the board can grow extra states later;
/// anything nonzero counts as alive.
pub type CellValue = i32;

pub const DEAD: CellValue = 0;
pub const ALIVE: CellValue = 1;

/// Check if a cell value counts as alive
#[inline]
pub const fn is_alive(value: CellValue) -> bool {
    value != DEAD
}

/// Flip a binary cell. Values other than 0/1 are not normalized.
#[inline]
pub const fn toggle(value: CellValue) -> CellValue {
    ALIVE - value
}

/// Pure function to compute the next value based on Conway's rules (B3/S23):
/// 1. Dead cell with exactly 3 live neighbors is born
/// 2. Live cell with fewer than 2 or more than 3 neighbors dies
/// 3. Everything else keeps its current value
#[inline]
pub const fn evolve(value: CellValue, neighbors: u8) -> CellValue {
    match (is_alive(value), neighbors) {
        (false, 3) => ALIVE,
        (true, 0 | 1) => DEAD,
        (true, n) if n > 3 => DEAD,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(evolve(ALIVE, 0), DEAD);
        assert_eq!(evolve(ALIVE, 1), DEAD);
    }

    #[test]
    fn test_survival() {
        assert_eq!(evolve(ALIVE, 2), ALIVE);
        assert_eq!(evolve(ALIVE, 3), ALIVE);
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert_eq!(evolve(ALIVE, n), DEAD);
        }
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(evolve(DEAD, 3), ALIVE);
    }

    #[test]
    fn test_dead_stays_dead() {
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(evolve(DEAD, n), DEAD);
        }
    }

    #[test]
    fn test_multi_state_values_survive_unchanged() {
        assert!(is_alive(2));
        assert!(is_alive(-1));
        assert_eq!(evolve(2, 2), 2);
        assert_eq!(evolve(2, 4), DEAD);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(toggle(DEAD), ALIVE);
        assert_eq!(toggle(ALIVE), DEAD);
    }
}
