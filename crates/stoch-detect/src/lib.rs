//! Stoch Detect - stopping conditions for population simulations
//!
//! This crate implements the detectors a simulation consults after every
//! successful interaction:
//! - Counting detectors (`immediately`, `never`, `after`)
//! - Streak detection over stable records (`when_stable`)
//! - Rolling-window stability tests over molecule deltas
//!   (`when_stable_within`, `when_stable_within_percent`)
//!
//! # Detector lifecycle
//!
//! ```text
//! D = Detector::after(10)   // Setup phase, factory pending
//! D.initialize(initial)     // Detect phase, predicate bound
//! loop:
//!   D.account(record)       // satisfied = predicate(record)
//!   if D.satisfied(): stop
//! ```
//!
//! # Example
//!
//! ```rust
//! use stoch_core::Interaction;
//! use stoch_detect::Detector;
//!
//! let merge = Interaction::binary(|a: u32, b: u32| (a == b).then(|| vec![a]));
//! let mut detector = Detector::after(2);
//! detector.initialize(&[1, 1, 1]);
//!
//! detector.account(&merge.run(vec![1, 1]));
//! assert!(!detector.satisfied());
//! detector.account(&merge.run(vec![1, 1]));
//! assert!(detector.satisfied());
//! ```

pub mod detector;
pub mod error;
pub mod window;

pub use detector::Detector;
pub use error::{DetectorError, Result};
pub use window::DeltaWindow;
