//! Port/starboard weight distribution.

use std::fmt;

use serde::Serialize;

use super::resolved_assignments;
use crate::boat::athlete::Roster;
use crate::boat::layout::BoatLayout;
use crate::boat::lineup::Lineup;
use crate::boat::seat::Side;

/// Percentage-point band around 50/50 that still counts as balanced.
pub const BALANCE_TOLERANCE_PCT: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BalanceStatus {
    Balanced,
    PortHeavy,
    StarboardHeavy,
}

impl BalanceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            BalanceStatus::Balanced => "Balanced",
            BalanceStatus::PortHeavy => "Port heavy",
            BalanceStatus::StarboardHeavy => "Starboard heavy",
        }
    }

    /// Classifies a port-minus-starboard percentage difference.
    pub fn from_diff(diff: f64) -> BalanceStatus {
        if diff > BALANCE_TOLERANCE_PCT {
            BalanceStatus::PortHeavy
        } else if diff < -BALANCE_TOLERANCE_PCT {
            BalanceStatus::StarboardHeavy
        } else {
            BalanceStatus::Balanced
        }
    }
}

impl fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Side weights and the port/starboard split as percentages.
///
/// Center seats count toward `center_weight` only; ratios are over port +
/// starboard and default to 50/50 when that sum is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeftRightDistribution {
    pub port_weight: f64,
    pub starboard_weight: f64,
    pub center_weight: f64,
    pub port_ratio: f64,
    pub starboard_ratio: f64,
    pub diff: f64,
    pub status: BalanceStatus,
}

impl LeftRightDistribution {
    pub fn total_weight(&self) -> f64 {
        self.port_weight + self.starboard_weight + self.center_weight
    }
}

pub fn compute_left_right_distribution(
    layout: &BoatLayout,
    roster: &Roster,
    lineup: &Lineup,
) -> LeftRightDistribution {
    let mut port_weight = 0.0;
    let mut starboard_weight = 0.0;
    let mut center_weight = 0.0;
    for (seat, athlete) in resolved_assignments(layout, roster, lineup) {
        let w = athlete.effective_weight();
        match seat.resolved_side() {
            Side::Port => port_weight += w,
            Side::Starboard => starboard_weight += w,
            Side::Center => center_weight += w,
        }
    }

    let lr_total = port_weight + starboard_weight;
    let (port_ratio, starboard_ratio) = if lr_total == 0.0 {
        (50.0, 50.0)
    } else {
        let port_ratio = port_weight / lr_total * 100.0;
        (port_ratio, 100.0 - port_ratio)
    };
    let diff = port_ratio - starboard_ratio;

    LeftRightDistribution {
        port_weight,
        starboard_weight,
        center_weight,
        port_ratio,
        starboard_ratio,
        diff,
        status: BalanceStatus::from_diff(diff),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boat::athlete::Athlete;
    use crate::boat::layout::{generate_layout, LayoutParams};
    use crate::boat::lineup::Assignment;
    use crate::boat::seat::Seat;

    fn roster() -> Roster {
        Roster::new(vec![
            Athlete::new("a", "A", 70.0),
            Athlete::new("b", "B", 80.0),
            Athlete::new("c", "C", 72.0),
            Athlete::new("d", "D", 55.0),
        ])
    }

    fn lineup(pairs: &[(&str, &str)]) -> Lineup {
        Lineup {
            boat_layout_id: "test".to_string(),
            assignments: pairs.iter().map(|(s, a)| Assignment::new(*s, *a)).collect(),
        }
    }

    #[test]
    fn empty_boat_is_balanced_fifty_fifty() {
        let layout = generate_layout(&LayoutParams::standard());
        let dist = compute_left_right_distribution(&layout, &roster(), &Lineup::empty("x"));
        assert_eq!(dist.port_ratio, 50.0);
        assert_eq!(dist.starboard_ratio, 50.0);
        assert_eq!(dist.status, BalanceStatus::Balanced);
        assert_eq!(dist.total_weight(), 0.0);
    }

    #[test]
    fn center_only_boat_is_balanced() {
        let layout = generate_layout(&LayoutParams::standard());
        let dist = compute_left_right_distribution(
            &layout,
            &roster(),
            &lineup(&[("drummer", "d"), ("steer", "b")]),
        );
        assert_eq!(dist.center_weight, 135.0);
        assert_eq!(dist.status, BalanceStatus::Balanced);
    }

    #[test]
    fn within_tolerance_is_balanced() {
        let layout = generate_layout(&LayoutParams::standard());
        // 72 vs 70: 50.7% / 49.3%, diff 1.4
        let dist = compute_left_right_distribution(
            &layout,
            &roster(),
            &lineup(&[("port-0", "c"), ("starboard-0", "a")]),
        );
        assert_eq!(dist.status, BalanceStatus::Balanced);
    }

    #[test]
    fn starboard_heavy() {
        let layout = generate_layout(&LayoutParams::standard());
        let dist = compute_left_right_distribution(
            &layout,
            &roster(),
            &lineup(&[("port-0", "a"), ("starboard-0", "b")]),
        );
        assert!((dist.port_ratio - 700.0 / 15.0).abs() < 1e-9);
        assert!(dist.diff < -BALANCE_TOLERANCE_PCT);
        assert_eq!(dist.status, BalanceStatus::StarboardHeavy);
        assert_eq!(dist.status.to_string(), "Starboard heavy");
    }

    #[test]
    fn missing_side_falls_back_to_id() {
        let seat = |id: &str, x: f64| Seat {
            id: id.to_string(),
            side: None,
            x,
        };
        let layout = BoatLayout {
            id: "legacy".to_string(),
            seats: vec![seat("left1", -1.0), seat("right1", -1.0), seat("cox", 2.0)],
        };
        let dist = compute_left_right_distribution(
            &layout,
            &roster(),
            &lineup(&[("left1", "b"), ("right1", "a"), ("cox", "d")]),
        );
        assert_eq!(dist.port_weight, 80.0);
        assert_eq!(dist.starboard_weight, 70.0);
        assert_eq!(dist.center_weight, 55.0);
        assert_eq!(dist.status, BalanceStatus::PortHeavy);
    }

    #[test]
    fn status_band_edges() {
        assert_eq!(BalanceStatus::from_diff(3.0), BalanceStatus::Balanced);
        assert_eq!(BalanceStatus::from_diff(-3.0), BalanceStatus::Balanced);
        assert_eq!(BalanceStatus::from_diff(3.01), BalanceStatus::PortHeavy);
        assert_eq!(BalanceStatus::from_diff(-3.01), BalanceStatus::StarboardHeavy);
    }
}
