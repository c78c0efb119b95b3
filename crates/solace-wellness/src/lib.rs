//! solace-wellness
//!
//! Longitudinal statistics over daily wellness check-ins: per-dimension
//! averages, the most common exercise duration, and the series behind the
//! dashboard line charts.

pub mod aggregate;
pub mod chart;
pub mod dimension;
pub mod error;
