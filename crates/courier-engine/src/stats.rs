//! Session-level delivery accounting.

use courier_core::PlannerConfig;
use courier_route::RoutePlan;

/// Running totals across every confirmed delivery trip in one session.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DeliveryStats {
    pub packages_delivered: usize,
    pub distance_traveled:  f64,
    pub reward_earned:      f64,
}

impl DeliveryStats {
    /// Fold one confirmed trip into the totals.
    pub fn record(&mut self, plan: &RoutePlan) {
        self.packages_delivered += plan.package_count();
        self.distance_traveled += plan.total_distance;
        self.reward_earned += plan.total_reward;
    }

    /// Session profit under the configured weights.
    pub fn net_profit(&self, config: &PlannerConfig) -> f64 {
        self.reward_earned * config.reward_weight
            - self.distance_traveled * config.distance_weight
    }
}

impl std::fmt::Display for DeliveryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} delivered, distance {:.2}, reward {:.2}",
            self.packages_delivered, self.distance_traveled, self.reward_earned
        )
    }
}
