//! Middle-Eastern single-byte codepages.
//!
//! # Available Codepages
//!
//! | Marker     | Static     | Web name       |
//! |------------|------------|----------------|
//! | `Cp1254`   | `CP1254`   | windows-1254   |
//! | `Cp1255`   | `CP1255`   | windows-1255   |
//! | `Cp1256`   | `CP1256`   | windows-1256   |
//! | `Cp28596`  | `CP28596`  | iso-8859-6     |
//! | `Cp28598`  | `CP28598`  | iso-8859-8     |
//! | `Cp28599`  | `CP28599`  | iso-8859-9     |
//! | `Cp38598`  | `CP38598`  | iso-8859-8-i   |
//!
//! # Example
//!
//! ```
//! use bytepage::Encoding;
//! use bytepage::codepages::{Cp1256, CP1256};
//!
//! assert!(Cp1256::can_encode('€'));
//! assert!(!Cp1256::can_encode('中'));
//! assert_eq!(CP1256.decode_to_string(&[0xD3, 0xE1, 0xC7, 0xE3]), "سلام");
//! ```

mod cp1254;
mod cp1255;
mod cp1256;
mod cp28596;
mod cp28598;
mod cp28599;

pub use cp1254::CP1254;
pub use cp1255::CP1255;
pub use cp1256::CP1256;
pub use cp28596::CP28596;
pub use cp28598::{CP28598, CP38598};
pub use cp28599::CP28599;

use crate::codepage::CodePage;
use crate::encoding::Encoding;

/// All codepages in this crate, in codepage-number order.
pub static ALL: [&CodePage; 7] = [
    &CP1254, &CP1255, &CP1256, &CP28596, &CP28598, &CP28599, &CP38598,
];

/// Declares a marker type for a codepage static and registers it.
macro_rules! codepage_marker {
    ($(#[$meta:meta])* $marker:ident => $page:ident, $id:literal, $name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $marker;

        impl Encoding for $marker {
            const NAME: &'static str = $name;
            const CODE_PAGE: u16 = $id;

            #[inline]
            fn page() -> &'static CodePage {
                &$page
            }
        }

        #[cfg(feature = "registry")]
        inventory::submit! {
            crate::registry::EncodingEntry::new(&$page)
        }
    };
}

codepage_marker!(
    /// Windows-1254 (Turkish) marker.
    Cp1254 => CP1254, 1254, "windows-1254"
);
codepage_marker!(
    /// Windows-1255 (Hebrew) marker.
    Cp1255 => CP1255, 1255, "windows-1255"
);
codepage_marker!(
    /// Windows-1256 (Arabic) marker.
    Cp1256 => CP1256, 1256, "windows-1256"
);
codepage_marker!(
    /// ISO-8859-6 (Arabic) marker.
    Cp28596 => CP28596, 28596, "iso-8859-6"
);
codepage_marker!(
    /// ISO-8859-8 (Hebrew, visual) marker.
    Cp28598 => CP28598, 28598, "iso-8859-8"
);
codepage_marker!(
    /// ISO-8859-9 (Turkish) marker.
    Cp28599 => CP28599, 28599, "iso-8859-9"
);
codepage_marker!(
    /// ISO-8859-8-I (Hebrew, logical) marker.
    Cp38598 => CP38598, 38598, "iso-8859-8-i"
);
