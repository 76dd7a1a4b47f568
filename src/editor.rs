//! Color editor: preview swatch plus hex, RGB, and HSV rows, each with add
//! and copy buttons.
//!
//! `current` is the ground truth. Numeric fields commit on Enter or focus
//! loss; the hex field follows every keystroke that forms a valid color.

use std::cell::RefCell;
use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};

use crate::constants;
use crate::input::{parse_hsv_fields, parse_rgb_fields};
use crate::inputs::{copy_to_clipboard, icon_button, number_field, text_field};
use crate::{HexColor, Hsv, PaletteStore};

/// Add `hex` to the store and mirror it into `palette`. Duplicates and
/// store failures are rejected.
pub(crate) fn add_to_palette(
    hex: HexColor,
    palette: RwSignal<Vec<HexColor>>,
    store: &Rc<RefCell<PaletteStore>>,
) -> bool {
    match store.borrow_mut().add(hex.clone()) {
        Ok(true) => {
            palette.update(|colors| colors.push(hex));
            true
        }
        Ok(false) => false,
        Err(err) => {
            tracing::error!(message = "Could not add color", hex = %hex, error = ?err);
            false
        }
    }
}

pub(crate) fn color_editor(
    current: RwSignal<Hsv>,
    palette: RwSignal<Vec<HexColor>>,
    store: Rc<RefCell<PaletteStore>>,
) -> impl IntoView {
    let hex_text = RwSignal::new(String::new());
    let h_text = RwSignal::new(String::new());
    let s_text = RwSignal::new(String::new());
    let v_text = RwSignal::new(String::new());
    let r_text = RwSignal::new(String::new());
    let g_text = RwSignal::new(String::new());
    let b_text = RwSignal::new(String::new());

    // current -> every field
    create_effect(move |_| {
        let hsv = current.get();
        let rgb = hsv.to_rgb();
        let fields = [
            (hex_text, hsv.to_hex().digits().to_string()),
            (h_text, format!("{}", hsv.h.round() as i64)),
            (s_text, format!("{}", (hsv.s * 100.0).round() as i64)),
            (v_text, format!("{}", (hsv.v * 100.0).round() as i64)),
            (r_text, rgb.r.to_string()),
            (g_text, rgb.g.to_string()),
            (b_text, rgb.b.to_string()),
        ];
        for (signal, value) in fields {
            if signal.get_untracked() != value {
                signal.set(value);
            }
        }
    });

    // hex field -> current, on every valid keystroke
    create_effect(move |_| {
        let raw = hex_text.get();
        if let Ok(hex) = HexColor::from_field(&raw) {
            if current.get_untracked().to_hex() != hex {
                current.set(Hsv::from_hex(&hex));
            }
        }
    });

    let hsv_fields = move || {
        parse_hsv_fields(
            &h_text.get_untracked(),
            &s_text.get_untracked(),
            &v_text.get_untracked(),
        )
    };
    let rgb_fields = move || {
        parse_rgb_fields(
            &r_text.get_untracked(),
            &g_text.get_untracked(),
            &b_text.get_untracked(),
        )
    };
    let commit_hsv = move || {
        if let Ok(hsv) = hsv_fields() {
            current.set(hsv);
        }
    };
    let commit_rgb = move || {
        if let Ok(rgb) = rgb_fields() {
            current.set(rgb.to_hsv());
        }
    };

    let store_hex = store.clone();
    let store_rgb = store.clone();
    let store_hsv = store;

    v_stack((
        // Preview swatch
        empty().style(move |st| {
            let rgb = current.get().to_rgb();
            st.width_full()
                .height(48.0)
                .border_radius(constants::RADIUS)
                .border(1.0)
                .border_color(Color::rgb8(180, 180, 180))
                .background(Color::rgb8(rgb.r, rgb.g, rgb.b))
        }),
        // Hex row
        h_stack((
            label(|| "#").style(|s| {
                s.font_size(constants::INPUT_FONT)
                    .font_family("monospace".to_string())
                    .color(Color::rgb8(120, 120, 120))
            }),
            text_field(hex_text, constants::HEX_INPUT_WIDTH, || {}),
            icon_button(lucide_icons::Icon::Plus, move || {
                HexColor::from_field(&hex_text.get_untracked())
                    .is_ok_and(|hex| add_to_palette(hex, palette, &store_hex))
            }),
            icon_button(lucide_icons::Icon::Copy, move || {
                HexColor::from_field(&hex_text.get_untracked())
                    .is_ok_and(|hex| copy_to_clipboard(hex.as_str()))
            }),
        ))
        .style(|st| st.gap(constants::GAP / 2.0).items_center().justify_center()),
        // RGB row
        h_stack((
            number_field("R", r_text, commit_rgb),
            number_field("G", g_text, commit_rgb),
            number_field("B", b_text, commit_rgb),
            icon_button(lucide_icons::Icon::Plus, move || {
                rgb_fields().is_ok_and(|rgb| add_to_palette(rgb.to_hex(), palette, &store_rgb))
            }),
            icon_button(lucide_icons::Icon::Copy, move || {
                rgb_fields().is_ok_and(|rgb| copy_to_clipboard(&rgb.to_copy_text()))
            }),
        ))
        .style(|st| st.gap(constants::GAP / 2.0).items_center().justify_center()),
        // HSV row
        h_stack((
            number_field("H", h_text, commit_hsv),
            number_field("S", s_text, commit_hsv),
            number_field("V", v_text, commit_hsv),
            icon_button(lucide_icons::Icon::Plus, move || {
                hsv_fields().is_ok_and(|hsv| {
                    current.set(hsv);
                    add_to_palette(hsv.to_hex(), palette, &store_hsv)
                })
            }),
            icon_button(lucide_icons::Icon::Copy, move || {
                hsv_fields().is_ok_and(|hsv| copy_to_clipboard(&hsv.to_copy_text()))
            }),
        ))
        .style(|st| st.gap(constants::GAP / 2.0).items_center().justify_center()),
    ))
    .style(|st| st.gap(constants::GAP))
}
