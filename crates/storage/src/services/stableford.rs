use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::score::HoleStrokes;
use crate::models::{HoleInfo, HoleScore};

const HOLES_IN_ROUND: u32 = 18;

/// Handicap strokes received on a hole.
///
/// One stroke per hole for every full eighteen in the handicap, plus one more on
/// the holes whose stroke index is within the remainder. No clamping happens
/// here: negative or oversized handicaps run through the same arithmetic, with
/// `floor` for the quotient and a truncating remainder.
pub fn strokes_received(handicap: Decimal, stroke_index: u8) -> Decimal {
    let round = Decimal::from(HOLES_IN_ROUND);
    let base = (handicap / round).floor();
    let remainder = handicap % round;

    if Decimal::from(stroke_index) <= remainder {
        base + Decimal::ONE
    } else {
        base
    }
}

/// Gross strokes less strokes received, floored at zero.
///
/// A negative handicap adds strokes; past `u32::MAX` the result saturates.
pub fn net_strokes(strokes: u32, received: Decimal) -> u32 {
    (Decimal::from(strokes) - received)
        .max(Decimal::ZERO)
        .to_u32()
        .unwrap_or(u32::MAX)
}

/// Points for a net score against par.
pub fn points_for(net: u32, par: u8) -> u32 {
    match i64::from(net) - i64::from(par) {
        i64::MIN..=-3 => 5,
        -2 => 4,
        -1 => 3,
        0 => 2,
        1 => 1,
        _ => 0,
    }
}

/// Scores a single hole. Returns `None` when no strokes have been entered
/// (zero or negative).
pub fn score_hole(handicap: Decimal, hole: &HoleInfo, strokes: i32) -> Option<HoleScore> {
    if strokes <= 0 {
        return None;
    }
    let strokes = strokes as u32;
    let net = net_strokes(strokes, strokes_received(handicap, hole.stroke_index));

    Some(HoleScore {
        hole_number: hole.hole_number,
        strokes,
        net_strokes: net,
        stableford_points: points_for(net, hole.par),
    })
}

/// Stableford points for a hole, zero when nothing has been entered.
pub fn stableford_points(handicap: Decimal, hole: &HoleInfo, strokes: i32) -> u32 {
    score_hole(handicap, hole, strokes).map_or(0, |h| h.stableford_points)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct RoundTotals {
    pub total_strokes: u32,
    pub total_net_strokes: u32,
    pub total_stableford_points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ScoredRound {
    /// Only the holes with strokes entered, in course order.
    pub holes: Vec<HoleScore>,
    pub totals: RoundTotals,
}

/// Scores whatever has been entered for a side. Partial input is fine; holes
/// without strokes contribute nothing to the totals.
pub fn score_round(handicap: Decimal, holes: &[HoleInfo], entries: &[HoleStrokes]) -> ScoredRound {
    let scored: Vec<HoleScore> = holes
        .iter()
        .filter_map(|hole| {
            let strokes = strokes_for(entries, hole.hole_number)?;
            score_hole(handicap, hole, strokes)
        })
        .collect();

    let totals = scored.iter().fold(RoundTotals::default(), |mut acc, h| {
        acc.total_strokes = acc.total_strokes.saturating_add(h.strokes);
        acc.total_net_strokes = acc.total_net_strokes.saturating_add(h.net_strokes);
        acc.total_stableford_points += h.stableford_points;
        acc
    });

    tracing::debug!(
        holes = scored.len(),
        points = totals.total_stableford_points,
        "Scored round"
    );

    ScoredRound {
        holes: scored,
        totals,
    }
}

/// True when every hole of the side has a positive stroke count.
pub fn is_round_complete(holes: &[HoleInfo], entries: &[HoleStrokes]) -> bool {
    holes
        .iter()
        .all(|hole| strokes_for(entries, hole.hole_number).is_some_and(|s| s > 0))
}

fn strokes_for(entries: &[HoleStrokes], hole_number: u8) -> Option<i32> {
    entries
        .iter()
        .find(|e| e.hole_number == hole_number)
        .map(|e| e.strokes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseSide, Yardage};
    use proptest::prelude::*;

    fn hole(stroke_index: u8, par: u8) -> HoleInfo {
        HoleInfo {
            hole_number: 1,
            par,
            stroke_index,
            yardage: Yardage {
                white: 300,
                yellow: 290,
                red: 250,
            },
        }
    }

    fn entries(strokes: &[(u8, i32)]) -> Vec<HoleStrokes> {
        strokes
            .iter()
            .map(|&(hole_number, strokes)| HoleStrokes {
                hole_number,
                strokes,
            })
            .collect()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_par_with_one_stroke_received() {
        // 18.4 gives one stroke everywhere, and the 0.4 remainder reaches no hole
        let result = score_hole(dec("18.4"), &hole(1, 4), 5).unwrap();
        assert_eq!(result.net_strokes, 4);
        assert_eq!(result.stableford_points, 2);
    }

    #[test]
    fn test_net_birdie_on_par_three() {
        let result = score_hole(dec("22.1"), &hole(15, 3), 3).unwrap();
        assert_eq!(result.net_strokes, 2);
        assert_eq!(result.stableford_points, 3);
    }

    #[test]
    fn test_extra_stroke_on_hardest_holes() {
        assert_eq!(strokes_received(dec("22.1"), 4), dec("2"));
        assert_eq!(strokes_received(dec("22.1"), 5), dec("1"));
        assert_eq!(strokes_received(dec("5"), 5), dec("1"));
        assert_eq!(strokes_received(dec("5"), 6), dec("0"));
        assert_eq!(strokes_received(Decimal::ZERO, 1), dec("0"));
        assert_eq!(strokes_received(dec("36"), 18), dec("2"));
    }

    #[test]
    fn test_out_of_range_handicap_is_not_clamped() {
        assert_eq!(strokes_received(dec("60"), 6), dec("4"));
        assert_eq!(strokes_received(dec("60"), 7), dec("3"));
        // -2 / 18 floors to -1, remainder -2 reaches no hole
        assert_eq!(strokes_received(dec("-2"), 1), dec("-1"));
        let result = score_hole(dec("-2"), &hole(1, 4), 4).unwrap();
        assert_eq!(result.net_strokes, 5);
        assert_eq!(result.stableford_points, 1);
    }

    #[test]
    fn test_extreme_handicaps_keep_their_strokes() {
        let huge = strokes_received(Decimal::MAX, 1);
        assert!(huge > Decimal::from(i64::MAX));
        let result = score_hole(Decimal::MAX, &hole(1, 4), 5).unwrap();
        assert_eq!(result.net_strokes, 0);
        assert_eq!(result.stableford_points, 5);

        let result = score_hole(Decimal::MIN, &hole(1, 4), 5).unwrap();
        assert_eq!(result.net_strokes, u32::MAX);
        assert_eq!(result.stableford_points, 0);
    }

    #[test]
    fn test_round_totals_saturate() {
        let holes = CourseSide::Front9.holes();
        let input: Vec<(u8, i32)> = (1..=9).map(|n| (n, i32::MAX)).collect();
        let round = score_round(Decimal::ZERO, holes, &entries(&input));

        assert_eq!(round.holes.len(), 9);
        assert_eq!(round.totals.total_strokes, u32::MAX);
        assert_eq!(round.totals.total_net_strokes, u32::MAX);
        assert_eq!(round.totals.total_stableford_points, 0);
    }

    #[test]
    fn test_points_table() {
        assert_eq!(points_for(1, 5), 5);
        assert_eq!(points_for(1, 4), 5);
        assert_eq!(points_for(2, 4), 4);
        assert_eq!(points_for(3, 4), 3);
        assert_eq!(points_for(4, 4), 2);
        assert_eq!(points_for(5, 4), 1);
        assert_eq!(points_for(6, 4), 0);
        assert_eq!(points_for(12, 4), 0);
    }

    #[test]
    fn test_net_score_floors_at_zero() {
        assert_eq!(net_strokes(1, dec("3")), 0);
        assert_eq!(score_hole(dec("54"), &hole(1, 3), 1).unwrap().net_strokes, 0);
    }

    #[test]
    fn test_unentered_holes_score_nothing() {
        assert!(score_hole(dec("10"), &hole(1, 4), 0).is_none());
        assert!(score_hole(dec("10"), &hole(1, 4), -3).is_none());
        assert_eq!(stableford_points(dec("10"), &hole(1, 4), 0), 0);
    }

    #[test]
    fn test_partial_round_totals() {
        let holes = CourseSide::Front9.holes();
        // hole 1: par 4 SI 7, hole 2: par 3 SI 15, hole 4: par 4 SI 1
        let round = score_round(dec("9"), holes, &entries(&[(1, 5), (2, 0), (4, 6)]));

        assert_eq!(round.holes.len(), 2);
        assert_eq!(round.holes[0].hole_number, 1);
        assert_eq!(round.holes[1].hole_number, 4);
        assert_eq!(round.totals.total_strokes, 11);
        // one stroke received on both
        assert_eq!(round.totals.total_net_strokes, 9);
        assert_eq!(round.totals.total_stableford_points, 2 + 1);
    }

    #[test]
    fn test_entries_for_other_side_are_ignored() {
        let round = score_round(dec("9"), CourseSide::Back9.holes(), &entries(&[(1, 5)]));
        assert!(round.holes.is_empty());
        assert_eq!(round.totals, RoundTotals::default());
    }

    #[test]
    fn test_round_completeness() {
        let holes = CourseSide::Back9.holes();
        let mut all: Vec<(u8, i32)> = (10..=18).map(|n| (n, 4)).collect();
        assert!(is_round_complete(holes, &entries(&all)));

        all[3].1 = 0;
        assert!(!is_round_complete(holes, &entries(&all)));

        all.remove(3);
        assert!(!is_round_complete(holes, &entries(&all)));
    }

    fn handicap_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..=540).prop_map(|tenths| Decimal::new(tenths, 1))
    }

    proptest! {
        #[test]
        fn prop_net_score_never_negative(
            handicap in handicap_strategy(),
            stroke_index in 1u8..=18,
            strokes in 0i32..=15,
        ) {
            let net = net_strokes(strokes.max(0) as u32, strokes_received(handicap, stroke_index));
            prop_assert!(net <= strokes as u32);
        }

        #[test]
        fn prop_points_never_increase_with_strokes(
            handicap in handicap_strategy(),
            stroke_index in 1u8..=18,
            par in 3u8..=5,
            strokes in 1i32..=14,
        ) {
            let h = hole(stroke_index, par);
            prop_assert!(
                stableford_points(handicap, &h, strokes) >= stableford_points(handicap, &h, strokes + 1)
            );
        }

        #[test]
        fn prop_totals_sum_entered_holes_only(
            handicap in handicap_strategy(),
            strokes in proptest::collection::vec(0i32..=10, 9),
        ) {
            let holes = CourseSide::Front9.holes();
            let input: Vec<HoleStrokes> = holes
                .iter()
                .zip(&strokes)
                .map(|(h, &s)| HoleStrokes { hole_number: h.hole_number, strokes: s })
                .collect();
            let round = score_round(handicap, holes, &input);

            let expected_points: u32 = holes
                .iter()
                .zip(&strokes)
                .filter(|(_, s)| **s > 0)
                .map(|(h, &s)| stableford_points(handicap, h, s))
                .sum();
            let expected_strokes: u32 = strokes.iter().filter(|s| **s > 0).map(|&s| s as u32).sum();

            prop_assert_eq!(round.totals.total_stableford_points, expected_points);
            prop_assert_eq!(round.totals.total_strokes, expected_strokes);
            prop_assert_eq!(round.holes.len(), strokes.iter().filter(|s| **s > 0).count());
        }
    }
}
