// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests may unwrap and panic freely
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]

//! Device-orientation controls for 3D scene objects.
//!
//! Turns W3C device-orientation readings (alpha, beta, gamma and the screen
//! rotation) into a quaternion and writes it into a target object each
//! frame, so a camera follows the physical tilt of the device.
//!
//! # Key entry points
//!
//! - [`controls::OrientationControls`] - connect, update, disconnect
//! - [`platform::OrientationPlatform`] - the event-source seam, with
//!   [`platform::ManualPlatform`] for headless use and `WebPlatform` behind
//!   the `web` feature
//! - [`target::Rotatable`] - what the controls rotate
//! - [`options::ControlsOptions`] - gating, heading offset, screen
//!   compensation (TOML)
//! - [`replay`] - drive the controls from a recorded JSON-lines trace

pub mod controls;
pub mod error;
pub mod options;
pub mod platform;
pub mod replay;
pub mod rotation;
pub mod target;

pub use controls::OrientationControls;
pub use error::DevorientError;
