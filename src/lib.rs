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
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Interpolation math: fixed-point/float casts are intentional and bounded
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]

//! Skeletal pose interpolation engine for fixed-tick simulations.
//!
//! Interpose decouples a host simulation's native logic rate (e.g. 30 Hz)
//! from the presentation rate: each logic tick it captures a keyframe per
//! tracked skeletal entity, and each render frame it blends the previous
//! and current keyframes into an intermediate pose using
//! wraparound-correct angular interpolation. Purely a rendering-side
//! transform: simulation timing and gameplay state are never touched, and
//! every hot-path failure degrades to a silent no-op rather than an error.
//!
//! # Key entry points
//!
//! - [`engine::InterpEngine`] - the interpolation engine (slot table,
//!   lifecycle, capture/update)
//! - [`config::InterpConfig`] - runtime configuration (channel toggles,
//!   blend sharpness, TOML presets)
//! - [`angle::Turn16`] - 16-bit wrapping binary angle with shortest-arc
//!   lerp
//! - [`gate::FeatureGate`] - host feature-flag seam gating all work
//!
//! # Call contract
//!
//! Single-threaded and call-order-dependent: `on_logic_tick()` then one
//! `capture()` per active entity, once per simulation step; `update(alpha)`
//! once per render frame; `pose()` queries between updates. The host owns
//! synchronization if it splits simulation and rendering across threads.

pub mod angle;
pub mod blend;
pub mod config;
pub mod engine;
pub mod error;
pub mod gate;
pub mod pose;
pub mod track;
pub mod util;
