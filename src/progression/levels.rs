//! XP grant resolution against a level table.

use super::types::LevelRow;

/// Result of granting XP: the settled level, the new lifetime XP total,
/// and every level row crossed by this grant (possibly several).
#[derive(Debug, Clone)]
pub struct XpOutcome<'a, T> {
    pub new_level: u32,
    /// Lifetime XP. Always `current_xp + amount` - XP is never lost.
    pub new_xp: u64,
    /// Rows crossed by this grant, in ascending order.
    pub crossed: Vec<&'a T>,
}

impl<T> XpOutcome<'_, T> {
    /// True if the grant advanced at least one level.
    pub fn leveled_up(&self) -> bool {
        !self.crossed.is_empty()
    }
}

/// Grants `amount` XP and walks the table forward, crossing as many level
/// thresholds as the new total reaches. A single large grant can advance
/// several levels at once; the walk stops at the last defined row or the
/// first threshold the total does not meet.
pub fn apply_xp<T: LevelRow>(
    current_level: u32,
    current_xp: u64,
    amount: u64,
    table: &[T],
) -> XpOutcome<'_, T> {
    let new_xp = current_xp + amount;
    let mut new_level = current_level;
    let mut crossed = Vec::new();

    for row in table {
        if row.level() <= new_level {
            continue;
        }
        if new_xp < row.total_xp_required() {
            break;
        }
        new_level = row.level();
        crossed.push(row);
    }

    XpOutcome {
        new_level,
        new_xp,
        crossed,
    }
}

/// XP remaining until the next defined level, or `None` at the top of the
/// table.
pub fn xp_to_next_level<T: LevelRow>(current_level: u32, current_xp: u64, table: &[T]) -> Option<u64> {
    table
        .iter()
        .find(|row| row.level() > current_level)
        .map(|row| row.total_xp_required().saturating_sub(current_xp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::data::player_levels;

    #[test]
    fn test_no_level_up_below_threshold() {
        let table = player_levels();
        let out = apply_xp(1, 0, 99, &table);
        assert_eq!(out.new_level, 1);
        assert_eq!(out.new_xp, 99);
        assert!(!out.leveled_up());
    }

    #[test]
    fn test_single_level_up_at_exact_threshold() {
        let table = player_levels();
        let out = apply_xp(1, 0, 100, &table);
        assert_eq!(out.new_level, 2);
        assert_eq!(out.crossed.len(), 1);
        assert_eq!(out.crossed[0].level, 2);
    }

    #[test]
    fn test_multi_level_jump_records_all_crossed_rows() {
        let table = player_levels();
        // 350 total XP crosses both level 2 (100) and level 3 (350).
        let out = apply_xp(1, 0, 350, &table);
        assert_eq!(out.new_level, 3);
        assert_eq!(
            out.crossed.iter().map(|r| r.level).collect::<Vec<_>>(),
            vec![2, 3]
        );
    }

    #[test]
    fn test_xp_is_conserved() {
        let table = player_levels();
        let out = apply_xp(4, 800, 12_345, &table);
        assert_eq!(out.new_xp, 800 + 12_345);
    }

    #[test]
    fn test_top_of_table_banks_xp() {
        let table = player_levels();
        let out = apply_xp(30, 400_000, 1_000_000, &table);
        assert_eq!(out.new_level, 30);
        assert_eq!(out.new_xp, 1_400_000);
        assert!(out.crossed.is_empty());
    }

    #[test]
    fn test_zero_amount_is_a_no_op() {
        let table = player_levels();
        let out = apply_xp(5, 1500, 0, &table);
        assert_eq!(out.new_level, 5);
        assert_eq!(out.new_xp, 1500);
        assert!(!out.leveled_up());
    }

    #[test]
    fn test_sparse_rows_advance_to_milestone() {
        let table = player_levels();
        // From level 10 straight past the level 15 milestone.
        let out = apply_xp(10, 13_400, 26_600, &table);
        assert_eq!(out.new_level, 15);
        assert_eq!(out.crossed.len(), 1);
    }

    #[test]
    fn test_xp_to_next_level() {
        let table = player_levels();
        assert_eq!(xp_to_next_level(1, 40, &table), Some(60));
        assert_eq!(xp_to_next_level(30, 400_000, &table), None);
    }
}
