//! Time budget for one move.

/// Milliseconds to spend on the next move, from the two clocks.
///
/// A third of the clock lead (clamped into [-500, 3000]) is added to a
/// base allocation of 1/25 of the own clock, but never less than a
/// second. Being ahead on time buys deeper thought; being behind sheds
/// it, but only down to half a second.
#[must_use]
pub fn time_per_move(my_ms: i64, opp_ms: i64) -> u64 {
    let lead = ((my_ms - opp_ms) / 3).clamp(-500, 3000);
    let base = (my_ms / 25).max(1000);
    (lead + base).max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_is_one_second_base() {
        assert_eq!(time_per_move(0, 0), 1000);
        assert_eq!(time_per_move(10_000, 10_000), 1000);
    }

    #[test]
    fn test_lead_is_clamped() {
        // Far ahead: lead caps at 3000
        assert_eq!(time_per_move(600_000, 0), 600_000 / 25 + 3000);
        // Far behind: lead bottoms out at -500
        assert_eq!(time_per_move(10_000, 600_000), 1000 - 500);
    }

    #[test]
    fn test_long_clock_scales() {
        // 5 minutes each: 300000/25 = 12000, no lead
        assert_eq!(time_per_move(300_000, 300_000), 12_000);
    }

    #[test]
    fn test_small_lead_counts() {
        // 3 seconds ahead adds a second
        assert_eq!(time_per_move(33_000, 30_000), 33_000 / 25 + 1000);
    }
}
