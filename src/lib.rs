//! # floem-palette
//!
//! Color-space conversion, perceptual distance, and palette curation for a
//! color picker, with an optional [Floem](https://github.com/lapce/floem)
//! picker behind the `ui` feature.
//!
//! - [`math`]: HSV ⇄ RGB ⇄ hex ⇄ XYZ ⇄ CIE Lab conversions.
//! - [`distance`]: weighted HSV distance and CIE76 delta-E.
//! - [`generator`]: distinct colors around a hue by rejection sampling.
//! - [`curator`]: nearest-neighbor perceptual sort and near-duplicate pruning.
//! - [`store`]: the persisted palette (JSON array of `#RRGGBB`) over a key/value store.
//!
//! The core is stateless. Callers pass a copy of the palette in and get a new
//! order or a kept/removed partition back.
//!
//! ## Usage
//!
//! ```rust
//! use floem_palette::{HexColor, curator, PaletteConfig};
//!
//! let palette: Vec<HexColor> = ["#FF0000", "#FE0101", "#0000FF"]
//!     .iter()
//!     .map(|s| HexColor::parse(s))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! let config = PaletteConfig::default();
//! let outcome = curator::prune_similar(&palette, config.effective_threshold(None));
//! assert_eq!(outcome.kept.len(), 2);
//! ```

mod color;
mod config;
mod constants;
mod error;

pub mod curator;
pub mod distance;
pub mod generator;
pub mod input;
pub mod math;
pub mod store;

#[cfg(feature = "ui")]
mod editor;
#[cfg(feature = "ui")]
mod inputs;
#[cfg(feature = "ui")]
mod palette_view;

pub use color::{HexColor, Hsv, Lab, PaletteColor, Rgb, Xyz};
pub use config::PaletteConfig;
pub use curator::PruneOutcome;
pub use error::{ColorError, StoreErrorCouldNot};
pub use store::{DiskStore, KeyValueStore, MemoryStore, PaletteStore};

#[cfg(feature = "ui")]
pub use ui::palette_picker;

#[cfg(feature = "ui")]
mod ui {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Once;

    use floem::prelude::*;
    use floem::reactive::RwSignal;
    use floem::text::FONT_SYSTEM;

    use crate::{PaletteConfig, PaletteStore, constants};

    static LOAD_LUCIDE_FONT: Once = Once::new();

    /// Creates the top-level picker view: the color editor above the palette.
    ///
    /// The palette signal mirrors `store`; every add, delete, sort, prune, or
    /// clear goes through the store first and only updates the signal on
    /// success.
    pub fn palette_picker(store: PaletteStore, config: PaletteConfig) -> impl IntoView {
        LOAD_LUCIDE_FONT.call_once(|| {
            FONT_SYSTEM
                .lock()
                .db_mut()
                .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
        });

        let initial = store.load().unwrap_or_else(|err| {
            tracing::error!(message = "Could not load palette", error = ?err);
            Vec::new()
        });
        let palette = RwSignal::new(initial);
        let store = Rc::new(RefCell::new(store));
        let current = RwSignal::new(crate::Hsv::new(0.0, 1.0, 1.0));

        v_stack((
            crate::editor::color_editor(current, palette, store.clone()),
            crate::palette_view::palette_view(current, palette, store, config),
        ))
        .style(|s| {
            s.gap(constants::GAP)
                .padding(constants::PADDING)
                .size_full()
                .background(Color::rgb8(242, 242, 242))
        })
    }
}
