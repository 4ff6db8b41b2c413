//! Presentation helpers: currency formatting, breakdown markup and banners.
//!
//! Nothing here holds state or makes decisions; controllers call these to
//! produce what the [`crate::controller::FormView`] displays.

mod banner;
mod breakdown;
mod currency;

pub use banner::{Banner, BannerKind};
pub use breakdown::{render_amount, render_breakdown};
pub use currency::{RUPEE, format_inr};
