//! Palette panel: swatches, curation toolbar, and rainbow generation buttons.

use std::cell::RefCell;
use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use floem::views::{dyn_stack, h_stack_from_iter};

use crate::constants;
use crate::curator::{prune_similar, sort_by_perceptual_chain};
use crate::editor::add_to_palette;
use crate::generator::generate;
use crate::input::parse_threshold;
use crate::inputs::{copy_to_clipboard, icon_button, text_field};
use crate::{HexColor, Hsv, PaletteConfig, PaletteStore};

fn swatch(
    hex: HexColor,
    current: RwSignal<Hsv>,
    palette: RwSignal<Vec<HexColor>>,
    store: Rc<RefCell<PaletteStore>>,
) -> impl IntoView {
    let rgb = hex.to_rgb();
    let caption = hex.to_string();
    let picked = hex.clone();
    let deleted = hex;

    v_stack((
        empty()
            .style(move |s| {
                s.size(constants::SWATCH_SIZE, constants::SWATCH_SIZE)
                    .border_radius(constants::RADIUS)
                    .border(1.0)
                    .border_color(Color::rgb8(180, 180, 180))
                    .background(Color::rgb8(rgb.r, rgb.g, rgb.b))
                    .cursor(floem::style::CursorStyle::Pointer)
            })
            .on_click_stop(move |_| {
                current.set(Hsv::from_hex(&picked));
                copy_to_clipboard(picked.as_str());
            }),
        label(move || caption.clone()).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(90, 90, 90))
        }),
        icon_button(lucide_icons::Icon::X, move || {
            match store.borrow_mut().remove(&deleted) {
                Ok(_) => {
                    palette.update(|colors| colors.retain(|c| c != &deleted));
                    true
                }
                Err(err) => {
                    tracing::error!(message = "Could not remove color", error = ?err);
                    false
                }
            }
        }),
    ))
    .style(|s| s.items_center().gap(2.0))
}

fn curation_toolbar(
    palette: RwSignal<Vec<HexColor>>,
    store: Rc<RefCell<PaletteStore>>,
    config: Rc<PaletteConfig>,
) -> impl IntoView {
    let threshold_text = RwSignal::new(format!("{}", config.prune_threshold));
    let store_sort = store.clone();
    let store_prune = store.clone();
    let store_clear = store;

    h_stack((
        icon_button(lucide_icons::Icon::ArrowUpDown, move || {
            let sorted = sort_by_perceptual_chain(&palette.get_untracked());
            match store_sort.borrow_mut().save(&sorted) {
                Ok(()) => {
                    palette.set(sorted);
                    true
                }
                Err(err) => {
                    tracing::error!(message = "Could not save sorted palette", error = ?err);
                    false
                }
            }
        }),
        text_field(threshold_text, constants::INPUT_WIDTH, || {}),
        icon_button(lucide_icons::Icon::Scissors, move || {
            let requested = parse_threshold(&threshold_text.get_untracked());
            let threshold = config.effective_threshold(requested);
            let outcome = prune_similar(&palette.get_untracked(), threshold);
            match store_prune.borrow_mut().apply_prune(&outcome) {
                Ok(remaining) => {
                    palette.set(remaining);
                    true
                }
                Err(err) => {
                    tracing::error!(message = "Could not prune palette", error = ?err);
                    false
                }
            }
        }),
        icon_button(lucide_icons::Icon::Trash2, move || {
            match store_clear.borrow_mut().clear() {
                Ok(()) => {
                    palette.set(Vec::new());
                    true
                }
                Err(err) => {
                    tracing::error!(message = "Could not clear palette", error = ?err);
                    false
                }
            }
        }),
    ))
    .style(|s| s.gap(constants::GAP / 2.0).items_center())
}

/// One button per preset hue. Each press adds freshly generated colors at
/// that hue and moves the editor to the last one.
fn rainbow_buttons(
    current: RwSignal<Hsv>,
    palette: RwSignal<Vec<HexColor>>,
    store: Rc<RefCell<PaletteStore>>,
    config: Rc<PaletteConfig>,
) -> impl IntoView {
    let buttons: Vec<_> = config
        .rainbow_hues
        .iter()
        .map(|&hue| {
            let rgb = Hsv::new(hue, 1.0, 1.0).to_rgb();
            let store = store.clone();
            let config = config.clone();
            empty()
                .style(move |s| {
                    s.size(20.0, 20.0)
                        .border_radius(10.0)
                        .background(Color::rgb8(rgb.r, rgb.g, rgb.b))
                        .cursor(floem::style::CursorStyle::Pointer)
                })
                .on_click_stop(move |_| {
                    let colors = generate(hue, config.generate_count, config.min_distance);
                    for hsv in &colors {
                        add_to_palette(hsv.to_hex(), palette, &store);
                    }
                    if let Some(last) = colors.last() {
                        current.set(*last);
                    }
                })
        })
        .collect();

    h_stack_from_iter(buttons).style(|s| s.gap(constants::GAP / 2.0).justify_center())
}

pub(crate) fn palette_view(
    current: RwSignal<Hsv>,
    palette: RwSignal<Vec<HexColor>>,
    store: Rc<RefCell<PaletteStore>>,
    config: PaletteConfig,
) -> impl IntoView {
    let config = Rc::new(config);
    let store_swatches = store.clone();

    v_stack((
        rainbow_buttons(current, palette, store.clone(), config.clone()),
        curation_toolbar(palette, store, config),
        dyn_stack(
            move || palette.get(),
            |hex| hex.clone(),
            move |hex| swatch(hex, current, palette, store_swatches.clone()),
        )
        .style(|s| {
            s.flex_wrap(floem::taffy::FlexWrap::Wrap)
                .gap(constants::GAP)
                .width_full()
        }),
    ))
    .style(|s| s.gap(constants::GAP))
}
