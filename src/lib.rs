// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! LMMS (Linux MultiMedia Studio) Information
//!
//! # What is LMMS?
//!
//! LMMS is a free, open-source Digital Audio Workstation (DAW) that was
//! originally developed for Linux but is now available across all major
//! platforms (Windows, Mac, and Linux). It's similar in design and
//! philosophy to FL Studio, featuring a pattern-based music sequencer with
//! piano roll interface.
//!
//! # Pros
//!
//! 1. Completely Free and Open Source
//! 2. Cross-platform compatibility (Windows, Mac, Linux)
//! 3. Low system resource requirements
//! 4. User-friendly interface, especially for FL Studio users
//! 5. Great for electronic music, rap, and trap production
//! 6. Pattern-based workflow that's intuitive for beginners
//! 7. Includes built-in synthesizers and effects
//! 8. Supports MIDI input/output
//! 9. Can export to various formats (including MIDI in newer versions)
//!
//! # Cons
//!
//! 1. Not updated frequently (last stable version 1.2.2 was released in 2020)
//! 2. Limited VST plugin support
//! 3. Not ideal for recording live instruments
//! 4. Can be unstable with complex projects
//! 5. Occasional crashes during import/export
//! 6. Requires additional setup for MIDI sound fonts
//! 7. Limited professional features compared to paid DAWs
//! 8. Not suitable for demanding professional studio work
//! 9. Some features may require a learning curve
//!
//! # Best Use Cases
//!
//! - Electronic music production
//! - Rap and trap music
//! - Beginners learning music production
//! - Home studio projects
//! - Pattern-based music creation
//! - MIDI-based compositions
//!
//! # Not Recommended For
//!
//! - Professional recording studios
//! - Live instrument recording
//! - Complex orchestral arrangements
//! - Professional mixing and mastering
//! - High-end production work
//!
//! **Note:** While LMMS is a powerful free DAW, it's best suited for
//! beginners and hobbyists. For professional studio work, paid alternatives
//! like FL Studio, Logic Pro, or Cubase might be more appropriate.
//!
//! # Quick Start
//!
//! Nothing is printed until asked for:
//!
//! ```no_run
//! use anyhow::Result;
//! use lmms_info::io;
//!
//! fn main() -> Result<()> {
//!     io::print_notice()
//! }
//! ```
//!
//! The notice can also be rendered anywhere a [Display](std::fmt::Display)
//! works:
//!
//! ```
//! use lmms_info::Notice;
//!
//! let text = Notice.to_string();
//! assert!(text.starts_with("This file contains information about LMMS"));
//! ```

pub mod io;
pub mod notice;

pub use notice::Notice;
