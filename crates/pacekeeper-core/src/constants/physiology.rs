// ABOUTME: Physiological model coefficients for VDOT, economy, load and recovery estimation
// ABOUTME: Includes the documented fail-open defaults used when run data is insufficient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacekeeper Contributors

//! Physiological constants based on running science conventions.
//!
//! References:
//! - Daniels, J. (2013). "Daniels' Running Formula" (3rd ed.). Human Kinetics.
//! - Gabbett, T.J. (2016). The training-injury prevention paradox. BJSM 50(5).

/// Daniels oxygen-cost and percent-max regression
pub mod vdot {
    /// Constant term of the oxygen cost regression
    pub const VO2_INTERCEPT: f64 = -4.60;
    /// Linear velocity coefficient (v in m/min)
    pub const VO2_LINEAR: f64 = 0.182_258;
    /// Quadratic velocity coefficient (v in m/min)
    pub const VO2_QUADRATIC: f64 = 0.000_104;

    /// Baseline sustainable fraction of VO2max
    pub const PERCENT_MAX_BASE: f64 = 0.8;
    /// First exponential term amplitude
    pub const PERCENT_MAX_A: f64 = 0.189_439_3;
    /// First exponential term rate (per minute)
    pub const PERCENT_MAX_A_RATE: f64 = -0.012_778;
    /// Second exponential term amplitude
    pub const PERCENT_MAX_B: f64 = 0.298_955_8;
    /// Second exponential term rate (per minute)
    pub const PERCENT_MAX_B_RATE: f64 = -0.193_260_5;

    /// Lowest VDOT accepted by pace derivation
    pub const MIN_SUPPORTED: f64 = 30.0;
    /// Highest VDOT accepted by pace derivation
    pub const MAX_SUPPORTED: f64 = 85.0;

    /// Conservative novice estimate when no run qualifies
    pub const DEFAULT: f64 = 35.0;

    /// Effort level at or above which a run counts as race effort
    pub const RACE_EFFORT: u8 = 9;
    /// Minimum distance for a training run to estimate VDOT (km)
    pub const MIN_DISTANCE_KM: f64 = 3.0;
    /// Number of fastest runs considered when no race effort exists
    pub const FASTEST_RUN_SAMPLE: usize = 3;
}

/// Two-point critical speed model
pub mod critical_speed {
    /// Minimum time-trial effort level
    pub const TIME_TRIAL_EFFORT: u8 = 8;
    /// Minimum time-trial distance (km)
    pub const MIN_DISTANCE_KM: f64 = 3.0;
    /// Default critical speed (km/h)
    pub const DEFAULT_KMH: f64 = 10.0;
}

/// Heart-rate-reserve running economy approximation
pub mod economy {
    /// Resting heart rate assumed by the approximation
    pub const ASSUMED_RESTING_HR: f64 = 60.0;
    /// Maximum heart rate assumed by the approximation
    pub const ASSUMED_MAX_HR: f64 = 190.0;
    /// VO2 at full heart rate reserve (ml/kg/min)
    pub const VO2_AT_FULL_RESERVE: f64 = 50.0;
    /// Minimum run duration (minutes)
    pub const MIN_DURATION_MINUTES: f64 = 20.0;
    /// Maximum effort level for a sub-threshold run
    pub const MAX_EFFORT: u8 = 6;
    /// Default economy (ml/kg/km)
    pub const DEFAULT: f64 = 200.0;
}

/// Lactate threshold derivation
pub mod threshold {
    /// Fraction of VDOT used for threshold velocity
    pub const VDOT_FRACTION: f64 = 0.88;
    /// Divisor converting scaled VDOT to velocity (km/h)
    pub const VDOT_DIVISOR: f64 = 3.5;
}

/// Exponentially weighted training load
pub mod training_load {
    /// Acute time constant in samples
    pub const ACUTE_TIME_CONSTANT: f64 = 7.0;
    /// Chronic time constant in samples
    pub const CHRONIC_TIME_CONSTANT: f64 = 28.0;
    /// Samples back used for the trend comparison
    pub const TREND_LOOKBACK: usize = 7;
    /// Relative change that counts as a trend
    pub const TREND_THRESHOLD: f64 = 0.10;
    /// Ratio below which load is considered low
    pub const LOW_RATIO: f64 = 0.8;
    /// Ratio above which load is considered high
    pub const HIGH_RATIO: f64 = 1.3;
    /// Ratio above which load is considered very high
    pub const VERY_HIGH_RATIO: f64 = 1.5;
}

/// Additive injury risk model
pub mod injury_risk {
    /// Contribution when the load ratio is optimal
    pub const RATIO_OPTIMAL: f64 = 10.0;
    /// Contribution when the load ratio is low
    pub const RATIO_LOW: f64 = 20.0;
    /// Contribution when the load ratio is high
    pub const RATIO_HIGH: f64 = 25.0;
    /// Contribution when the load ratio is very high
    pub const RATIO_VERY_HIGH: f64 = 40.0;
    /// Weekly mileage increase contributions (>5%, >10%, >20%)
    pub const MILEAGE_SMALL: f64 = 10.0;
    /// Contribution for >10% increase
    pub const MILEAGE_MEDIUM: f64 = 20.0;
    /// Contribution for >20% increase
    pub const MILEAGE_LARGE: f64 = 30.0;
    /// Weight applied to the recovery deficit
    pub const RECOVERY_DEFICIT_WEIGHT: f64 = 0.3;
}

/// Recovery score heuristics
pub mod recovery {
    /// Starting score before adjustments
    pub const BASELINE: f64 = 70.0;
    /// Penalty per hard run in the trailing week
    pub const HARD_RUN_PENALTY: f64 = 5.0;
    /// Effort level at or above which a run is hard
    pub const HARD_EFFORT: u8 = 7;
    /// Trailing window in days
    pub const WINDOW_DAYS: i64 = 7;
    /// HRV (ms) above which recovery improves
    pub const GOOD_HRV_MS: f64 = 50.0;
    /// Resting heart rate below which recovery improves
    pub const GOOD_RESTING_HR: u32 = 60;
    /// Adjustment applied per biometric signal
    pub const BIOMETRIC_ADJUSTMENT: f64 = 10.0;
}

/// Weekly pattern analysis
pub mod weekly {
    /// Distance above which a run counts as a long run (km)
    pub const LONG_RUN_KM: f64 = 15.0;
}

/// Training pace derivation from a foundation metric
pub mod pace_zones {
    /// Fractions of velocity at VO2max per zone (Daniels-style)
    pub mod vdot {
        /// Recovery running
        pub const RECOVERY: f64 = 0.62;
        /// Easy / long running
        pub const EASY: f64 = 0.70;
        /// Marathon pace
        pub const MARATHON: f64 = 0.80;
        /// Threshold pace
        pub const THRESHOLD: f64 = 0.88;
        /// Interval (VO2max) pace
        pub const INTERVAL: f64 = 0.975;
        /// Repetition pace
        pub const REPETITION: f64 = 1.05;
    }

    /// Multipliers applied to lactate-threshold pace (sec/km) per zone
    pub mod threshold {
        /// Recovery running
        pub const RECOVERY: f64 = 1.30;
        /// Easy / general aerobic running
        pub const EASY: f64 = 1.20;
        /// Marathon pace
        pub const MARATHON: f64 = 1.08;
        /// Threshold pace
        pub const THRESHOLD: f64 = 1.0;
        /// Interval (VO2max) pace
        pub const INTERVAL: f64 = 0.92;
        /// Repetition pace
        pub const REPETITION: f64 = 0.86;

        /// Fastest supported threshold pace (sec/km), VDOT 85 after rounding inward
        pub const MIN_SUPPORTED_SEC_PER_KM: f64 = 169.0;
        /// Slowest supported threshold pace (sec/km), VDOT 30 after rounding inward
        pub const MAX_SUPPORTED_SEC_PER_KM: f64 = 477.0;
    }
}
