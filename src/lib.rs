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
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
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

//! Display-case carousel: a row of 3D model slots with selection-driven,
//! eased scrolling and click-to-select interaction.
//!
//! The crate is engine-agnostic. It owns slot placement, selection and the
//! scroll animation; a host renderer draws the slots wherever
//! [`carousel::Carousel::slot_world_position`] says and calls
//! [`carousel::Carousel::advance`] once per frame.
//!
//! # Key entry points
//!
//! - [`carousel::Carousel`] - the controller
//! - [`selector::Selector`] - the selection-tracking seam, with
//!   [`selector::IndexSelector`] as the default implementation
//! - [`options::CarouselOptions`] - layout, timing and keybinding presets
//! - [`input::InputProcessor`] - turns host input into
//!   [`carousel::CarouselCommand`]s
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use vitrine::carousel::Carousel;
//! use vitrine::options::CarouselOptions;
//! use vitrine::slot::{DisplayContent, Material, ModelPrefab};
//!
//! let content = DisplayContent::new(
//!     ModelPrefab::new("sneaker"),
//!     vec![
//!         Material::new("red", [0.9, 0.1, 0.1, 1.0]),
//!         Material::new("blue", [0.1, 0.2, 0.9, 1.0]),
//!     ],
//! );
//! let mut carousel = Carousel::new(CarouselOptions::default(), content);
//! carousel.initialize()?;
//! carousel.next_display();
//! carousel.advance(Duration::from_secs(1));
//! assert_eq!(carousel.position().x, -1.0);
//! # Ok::<(), vitrine::error::CarouselError>(())
//! ```

pub mod animation;
pub mod carousel;
pub mod error;
pub mod input;
pub mod options;
pub mod selector;
pub mod slot;
pub mod util;
