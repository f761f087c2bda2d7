// Browser side of tile dragging: ghost elements and hit-testing.
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::gesture::DragGhost;
use crate::error::DomError;

/// Attribute carrying a cell's board position.
pub const TILE_INDEX_ATTR: &str = "data-tile-index";
pub const DRAG_PAYLOAD_MIME: &str = "application/x-puzzle-tile";
pub const DRAG_IMAGE_SIZE_PX: u32 = 250;
pub const DRAG_IMAGE_OFFSET_PX: i32 = 25;

fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

/// Detached copy of a tile attached to `<body>`; removed from the page on drop.
pub struct DomGhost {
    element: HtmlElement,
    half_w: f64,
    half_h: f64,
}

impl DomGhost {
    fn clone_of(source: &HtmlElement) -> Result<Self, DomError> {
        let element: HtmlElement = source
            .clone_node_with_deep(true)?
            .dyn_into()
            .map_err(|_| DomError::Js("tile clone is not an html element".into()))?;
        element.remove_attribute(TILE_INDEX_ATTR)?;
        element.remove_attribute("draggable")?;
        let style = element.style();
        style.set_property("visibility", "visible")?;
        style.set_property("pointer-events", "none")?;
        Ok(Self {
            element,
            half_w: 0.0,
            half_h: 0.0,
        })
    }

    fn attach(self) -> Result<Self, DomError> {
        document()?
            .body()
            .ok_or(DomError::NoBody)?
            .append_child(&self.element)?;
        Ok(self)
    }

    /// Enlarged, off-screen clone handed to `DataTransfer::set_drag_image`.
    pub fn drag_image(source: &HtmlElement) -> Result<Self, DomError> {
        let ghost = Self::clone_of(source)?;
        let size = format!("{DRAG_IMAGE_SIZE_PX}px");
        let style = ghost.element.style();
        style.set_property("position", "absolute")?;
        style.set_property("top", "-1000px")?;
        style.set_property("left", "-1000px")?;
        style.set_property("width", &size)?;
        style.set_property("height", &size)?;
        style.set_property("transform", "scale(0.5)")?;
        style.set_property("opacity", "0.8")?;
        style.set_property("z-index", "-1")?;
        ghost.attach()
    }

    /// Floating copy sized like `source`, centred on the touch point.
    pub fn touch_follower(source: &HtmlElement, x: f64, y: f64) -> Result<Self, DomError> {
        let rect = source.get_bounding_client_rect();
        let mut ghost = Self::clone_of(source)?;
        ghost.half_w = rect.width() / 2.0;
        ghost.half_h = rect.height() / 2.0;
        let style = ghost.element.style();
        style.set_property("position", "fixed")?;
        style.set_property("width", &format!("{}px", rect.width()))?;
        style.set_property("height", &format!("{}px", rect.height()))?;
        style.set_property("opacity", "0.85")?;
        style.set_property("z-index", "1000")?;
        style.set_property("box-shadow", "0 6px 18px rgba(0,0,0,0.45)")?;
        ghost.follow(x, y);
        ghost.attach()
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl DragGhost for DomGhost {
    fn follow(&mut self, x: f64, y: f64) {
        let style = self.element.style();
        let _ = style.set_property("left", &format!("{}px", x - self.half_w));
        let _ = style.set_property("top", &format!("{}px", y - self.half_h));
    }
}

impl Drop for DomGhost {
    fn drop(&mut self) {
        self.element.remove();
    }
}

/// Board position of the tile under a client point, if any.
pub fn tile_index_at(x: f64, y: f64) -> Option<usize> {
    let hit = document().ok()?.element_from_point(x as f32, y as f32)?;
    let tile = hit.closest(&format!("[{TILE_INDEX_ATTR}]")).ok()??;
    tile.get_attribute(TILE_INDEX_ATTR)?.parse().ok()
}

pub fn blur_active_element() {
    let Ok(doc) = document() else {
        return;
    };
    if let Some(el) = doc
        .active_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = el.blur();
    }
}
