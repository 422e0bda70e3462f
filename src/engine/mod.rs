//! The balancing algorithm.

pub mod balancer;
