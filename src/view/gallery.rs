use raylib::prelude::*;

use super::{Assets, Input, Page, ACCENT, GALLERY_100, GALLERY_950, MUTED};
use super::{draw_button, draw_contain, draw_cover, draw_wrapped, rec, with_alpha};
use crate::constants::GALLERY_COLUMNS;
use crate::layout::{self, Rect};
use crate::routes::Route;
use crate::state::{CardAction, SiteState};

const SCROLL_STEP: f32 = 60.0;

#[derive(Debug, Default)]
pub struct GalleryPage {
    scroll: f32,
}

// Lightbox panel and its "View details" button.
fn lightbox_regions(area: Rect) -> (Rect, Rect, Rect) {
    let panel = area.inset(layout::PADDING);
    let image = Rect::new(panel.x + layout::GAP, panel.y + layout::GAP, panel.w * 0.6, panel.h - 2.0 * layout::GAP);
    let details = Rect::new(image.x + image.w + layout::GAP, panel.y + panel.h - 72.0, 160.0, 40.0);
    (panel, image, details)
}

impl Page for GalleryPage {
    fn handle_input(&mut self, input: &Input, state: &mut SiteState, area: Rect) {
        if state.lightbox.is_open() {
            let (panel, _, details) = lightbox_regions(area);
            if input.pressed(KeyboardKey::KEY_ESCAPE) {
                state.lightbox.close();
            } else if input.pressed(KeyboardKey::KEY_RIGHT) {
                state.lightbox_next();
            } else if input.pressed(KeyboardKey::KEY_LEFT) {
                state.lightbox_previous();
            } else if input.pressed(KeyboardKey::KEY_ENTER) || input.clicked(details) {
                if let Some(id) = state.lightbox.selected_id() {
                    state.navigate(Route::artwork(id));
                }
            } else if input.click.is_some() && !input.clicked(panel) {
                state.lightbox.close();
            }
            return;
        }

        let count = state.catalog().len();
        let max_scroll = layout::grid_max_scroll(area, count, GALLERY_COLUMNS);
        self.scroll = (self.scroll - input.wheel * SCROLL_STEP).clamp(0.0, max_scroll);

        let cells = layout::grid_cells(area, count, GALLERY_COLUMNS, self.scroll);
        let activation = match (input.click, input.secondary_click) {
            (Some(point), _) => Some((point, CardAction::Open)),
            (None, Some(point)) => Some((point, CardAction::Preview)),
            (None, None) => None,
        };
        if let Some(((x, y), action)) = activation {
            if area.contains(x, y) {
                if let Some(index) = layout::hit(&cells, x, y) {
                    // Cells come from the catalog itself, so the id exists
                    let id = state.catalog().artworks()[index].id;
                    if let Err(e) = state.activate_card(id, action) {
                        tracing::warn!("gallery card: {e}");
                    }
                }
            }
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle, state: &SiteState, assets: &Assets, area: Rect) {
        let catalog = state.catalog();
        let cells = layout::grid_cells(area, catalog.len(), GALLERY_COLUMNS, self.scroll);

        for (artwork, cell) in catalog.artworks().iter().zip(cells) {
            if cell.y > area.y + area.h || cell.y + cell.h < area.y {
                continue;
            }
            let image = Rect::new(cell.x, cell.y, cell.w, cell.w * 3.0 / 4.0);
            d.draw_rectangle_rec(rec(cell), Color::WHITE);
            draw_cover(d, assets, &artwork.image_url, image, 1.0);
            d.draw_rectangle_lines_ex(rec(cell), 1.0, GALLERY_100);
            d.draw_text(&artwork.title, (cell.x + 16.0) as i32, (image.y + image.h + 16.0) as i32, 18, GALLERY_950);
            let byline = format!("{}, {}", artwork.artist, artwork.year);
            d.draw_text(&byline, (cell.x + 16.0) as i32, (image.y + image.h + 42.0) as i32, 14, Color::GRAY);
        }

        let Some(artwork) = state.lightbox.selected(catalog) else {
            return;
        };

        // --- Lightbox ---
        d.draw_rectangle_rec(rec(area), with_alpha(GALLERY_950, 0.85));
        let (panel, image, details) = lightbox_regions(area);
        d.draw_rectangle_rounded(rec(panel), 0.03, 8, GALLERY_950);
        draw_contain(d, assets, &artwork.image_url, image);

        let x = image.x + image.w + layout::GAP;
        let max_width = panel.x + panel.w - x - layout::GAP;
        let mut y = panel.y + layout::GAP;
        y = draw_wrapped(d, &artwork.title, x, y, max_width, 28, Color::WHITE) + 4.0;
        d.draw_text(&artwork.artist, x as i32, y as i32, 18, MUTED);
        y += 28.0;
        let meta = format!("{}  |  {}", artwork.year, artwork.medium).to_uppercase();
        d.draw_text(&meta, x as i32, y as i32, 12, ACCENT);
        y += 28.0;
        draw_wrapped(d, &artwork.description, x, y, max_width, 14, MUTED);

        draw_button(d, "View details", details);
        d.draw_text("Esc close   < > browse", x as i32, (details.y + details.h + 10.0) as i32, 12, MUTED);
    }
}
