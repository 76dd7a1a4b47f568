//! Standalone demo: opens a window with the picker and a palette persisted
//! under `./palette_db`.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_palette::{DiskStore, PaletteConfig, PaletteStore, palette_picker};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt::init();

    let config = PaletteConfig::default();
    let store = PaletteStore::new(DiskStore::open("palette_db")?, config.storage_key.clone());

    floem::Application::new()
        .window(
            move |_| {
                palette_picker(store, config).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((320.0, 560.0))
                    .title("floem-palette"),
            ),
        )
        .run();

    Ok(())
}
