use raylib::core::text::measure_text;
use raylib::prelude::*;

use super::{Assets, Input, Page, ACCENT, GALLERY_950, MUTED};
use super::{draw_button, draw_contain, draw_decor, draw_wrapped, rec};
use crate::decor::DecorVariant;
use crate::layout::{self, Rect};
use crate::routes::Route;
use crate::state::{Detail, SiteState};

/// Artwork detail, and the not-found page for unknown artworks and paths.
#[derive(Debug, Default)]
pub struct DetailPage;

fn back_button(area: Rect) -> Rect {
    Rect::new(area.x + layout::PADDING, area.y + layout::GAP, 180.0, 40.0)
}

fn browse_button(area: Rect) -> Rect {
    Rect::new(area.x + (area.w - 180.0) / 2.0, area.y + area.h * 0.6, 180.0, 40.0)
}

impl Page for DetailPage {
    fn handle_input(&mut self, input: &Input, state: &mut SiteState, area: Rect) {
        let found = matches!(state.detail(), Some(Detail::Found(_)));
        let button = if found { back_button(area) } else { browse_button(area) };

        if input.clicked(button) || input.pressed(KeyboardKey::KEY_BACKSPACE) || input.pressed(KeyboardKey::KEY_ESCAPE) {
            state.navigate(Route::Gallery);
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle, state: &SiteState, assets: &Assets, area: Rect) {
        d.draw_rectangle_rec(rec(area), GALLERY_950);
        draw_decor(d, DecorVariant::Both, area);

        let Some(Detail::Found(artwork)) = state.detail() else {
            // --- Not found ---
            let center = |text: &str, size: i32| area.x + (area.w - measure_text(text, size) as f32) / 2.0;
            let y = area.y + area.h * 0.25;
            d.draw_text("404", center("404", 72) as i32, y as i32, 72, Color::WHITE);
            let title = "Artwork not found";
            d.draw_text(title, center(title, 24) as i32, (y + 90.0) as i32, 24, MUTED);
            let hint = "The piece you're looking for isn't in our collection, or the link may be incorrect.";
            d.draw_text(hint, center(hint, 16) as i32, (y + 130.0) as i32, 16, Color::GRAY);
            draw_button(d, "Browse Gallery", browse_button(area));
            return;
        };

        let back = back_button(area);
        d.draw_text("< Back to Gallery", back.x as i32, (back.y + 12.0) as i32, 16, MUTED);

        let top = back.y + back.h + layout::GAP;
        let column_w = (area.w - 2.0 * layout::PADDING - layout::PADDING) / 2.0;
        let image = Rect::new(area.x + layout::PADDING, top, column_w, area.y + area.h - top - layout::PADDING);
        draw_contain(d, assets, &artwork.image_url, image);

        let x = image.x + image.w + layout::PADDING;
        let mut y = top + layout::GAP;
        y = draw_wrapped(d, &artwork.title, x, y, column_w, 40, Color::WHITE) + 8.0;
        d.draw_text(&artwork.artist, x as i32, y as i32, 22, MUTED);
        y += 36.0;
        let meta = format!("{}  |  {}", artwork.year, artwork.medium).to_uppercase();
        d.draw_text(&meta, x as i32, y as i32, 14, ACCENT);
        y += 32.0;
        d.draw_rectangle(x as i32, y as i32, 64, 1, ACCENT);
        y += 24.0;
        draw_wrapped(d, &artwork.description, x, y, column_w, 16, Color::GRAY);
    }
}
