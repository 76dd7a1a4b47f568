//! End to end: the host loads the stored palette, runs the core over a copy,
//! and writes the result back.

use floem_palette::{
    HexColor, MemoryStore, PaletteConfig, PaletteStore, curator, distance, generator, input,
};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn hex(s: &str) -> HexColor {
    HexColor::parse(s).unwrap()
}

#[test]
fn generate_store_sort_and_prune() -> miette::Result<()> {
    let config = PaletteConfig::default();
    let mut store = PaletteStore::new(MemoryStore::default(), config.storage_key.clone());

    let mut rng = StdRng::seed_from_u64(11);
    for hue in [0.0, 120.0, 240.0] {
        let colors =
            generator::generate_with_rng(&mut rng, hue, config.generate_count, config.min_distance);
        for hsv in colors {
            store.add(hsv.to_hex())?;
        }
    }
    assert!(store.add(hex("#FF0000"))?);
    assert!(store.add(hex("#FE0101"))?);
    assert!(!store.add(hex("#fe0101"))?);

    let stored = store.load()?;
    let sorted = curator::sort_by_perceptual_chain(&stored);
    assert_eq!(sorted[0], stored[0]);
    assert_eq!(sorted.len(), stored.len());
    store.save(&sorted)?;
    assert_eq!(store.load()?, sorted);

    let threshold = config.effective_threshold(input::parse_threshold("not a number"));
    assert_eq!(threshold, 10.0);
    let outcome = curator::prune_similar(&store.load()?, threshold);
    assert!(outcome.removed.contains(&hex("#FE0101")) || outcome.removed.contains(&hex("#FF0000")));

    let remaining = store.apply_prune(&outcome)?;
    assert_eq!(remaining, outcome.kept);
    for (i, a) in remaining.iter().enumerate() {
        for b in &remaining[i + 1..] {
            assert!(distance::delta_e(a.to_lab(), b.to_lab()) >= threshold);
        }
    }
    assert!(curator::prune_similar(&remaining, threshold).removed.is_empty());
    Ok(())
}

#[test]
fn field_input_reaches_the_palette_normalized() -> miette::Result<()> {
    let mut store = PaletteStore::new(MemoryStore::default(), "colorPalette");

    let from_hex = HexColor::from_field(" 3b82f6 ")?;
    let from_rgb = input::parse_rgb_fields("59", "130", "246")?.to_hex();
    let from_hsv = input::parse_hsv_fields("0", "100", "100")?.to_hex();

    assert!(store.add(from_hex)?);
    assert!(!store.add(from_rgb)?);
    assert!(store.add(from_hsv)?);
    assert_eq!(store.load()?, vec![hex("#3B82F6"), hex("#FF0000")]);

    assert!(HexColor::from_field("3b82f").is_err());
    assert_eq!(store.load()?.len(), 2);
    Ok(())
}
