//! Property-based tests for the navigation core
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Test Modules
//!
//! - `tab_props`: tab state over arbitrary key sequences
//!   - Active key is always a member of the closed set
//!   - Unknown keys never move the active tab
//!   - `next` then `prev` is the identity; `len` steps wrap around
//!
//! - `session_props`: session controller over arbitrary selections
//!   - Active profile is always one of the known profiles
//!   - Successful selection yields the very element selected
//!   - Failed selection leaves the state untouched
//!   - Landing is shown before connect, whatever the profile
//!
//! - `display_props`: formatting and listing filters
//!   - Currency strings group digits by thousands
//!   - Gauge fill stays within 0..=100
//!   - Filtering returns a subset; sort is descending by return
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod display_props;
mod session_props;
mod tab_props;
