//! Interaction engine for the product landing page.
//!
//! The numeric core (drag tracking, inertial coasting, orientation blending,
//! carousel arc layout, pinned scroll sequences) lives in [`core`] and
//! builds on every target. The browser surfaces that feed it DOM events and
//! apply its output compile only for `wasm32`.

pub mod config;
pub mod constants;
pub mod core;
pub mod error;

#[cfg(target_arch = "wasm32")]
mod carousel;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod hover;
#[cfg(target_arch = "wasm32")]
mod input;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod sequence;
#[cfg(target_arch = "wasm32")]
mod viewer;

#[cfg(target_arch = "wasm32")]
pub use page::*;

#[cfg(target_arch = "wasm32")]
mod page {
    use crate::carousel::CarouselSurface;
    use crate::dom;
    use crate::hover::HoverSurface;
    use crate::overlay::NoiseOverlay;
    use std::cell::{Cell, RefCell};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;

    pub use crate::sequence::{sequence_step, PinnedSequence};
    pub use crate::viewer::{section_progress, ProductViewer, ViewerPose};

    /// Surfaces mounted by `start`, kept alive until `unmount`.
    struct Page {
        _carousel: Option<CarouselSurface>,
        _hover: Option<HoverSurface>,
        _overlay: Option<NoiseOverlay>,
    }

    thread_local! {
        static PAGE: RefCell<Option<Page>> = RefCell::new(None);
        static STARTED: Cell<bool> = Cell::new(false);
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("landing-motion starting");

        spawn_local(async move {
            if let Err(e) = mount_page() {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    fn mount_page() -> anyhow::Result<()> {
        if STARTED.with(|started| started.replace(true)) {
            return Ok(());
        }
        match mount_surfaces() {
            Ok(page) => {
                PAGE.with(|slot| *slot.borrow_mut() = Some(page));
                Ok(())
            }
            Err(e) => {
                // leave the door open for `remount`
                STARTED.with(|started| started.set(false));
                Err(e)
            }
        }
    }

    fn mount_surfaces() -> anyhow::Result<Page> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        Ok(Page {
            _carousel: CarouselSurface::mount(&document)?,
            _hover: HoverSurface::mount(&document)?,
            _overlay: NoiseOverlay::mount(&document)?,
        })
    }

    /// Stop every frame loop and detach every listener `start` installed.
    #[wasm_bindgen]
    pub fn unmount() {
        let page = PAGE.with(|slot| slot.borrow_mut().take());
        if page.is_some() {
            drop(page);
            STARTED.with(|started| started.set(false));
            log::info!("landing-motion unmounted");
        }
    }

    /// Mount again after `unmount`, e.g. after client-side navigation.
    #[wasm_bindgen]
    pub fn remount() -> Result<(), JsValue> {
        unmount();
        mount_page().map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
