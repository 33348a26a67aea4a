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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Viewer math allowances
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::suboptimal_flops)]

//! CPU core of an interactive 3D node scene viewer.
//!
//! Nodeview owns everything except pixels: an orbital perspective
//! camera, reference-frame geometry (axes, grid planes, a parametric
//! surface), a set of node markers fetched once from an HTTP endpoint,
//! per-frame ray picking against those markers, and the hover/selection
//! interaction state machine. A render collaborator feeds raw input
//! events in, calls [`viewer::Viewer::tick`] once per frame, and paints
//! from the returned snapshot.
//!
//! # Key entry points
//!
//! - [`viewer::Viewer`] - owns all state and the per-frame update
//! - [`picking::InteractionState`] - hover/selection state machine
//! - [`nodes::NodeSource`] - capability interface for the node fetch
//! - [`options::Options`] - runtime configuration (camera, colors,
//!   node source, scene geometry)
//!
//! # Visual state
//!
//! Selection and hover are independent boolean facts per marker; the
//! displayed state is always the pure join of the two via
//! [`picking::visual_state`], recomputed every frame and never stored
//! where it could drift.

pub mod camera;
pub mod error;
pub mod input;
pub mod nodes;
pub mod options;
pub mod picking;
pub mod scene;
pub mod viewer;

pub use error::NodeviewError;
