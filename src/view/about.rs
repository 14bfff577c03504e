use raylib::core::text::measure_text;
use raylib::prelude::*;

use super::{Assets, Input, Page, ACCENT, GALLERY_100, GALLERY_900, GALLERY_950, MUTED};
use super::{draw_cover, draw_decor, draw_heading, draw_wrapped, rec};
use crate::content::{self, MISSION, PILLARS, STORY};
use crate::decor::DecorVariant;
use crate::layout::{self, Rect};
use crate::state::SiteState;

const SCROLL_STEP: f32 = 60.0;
// Story, mission and team sections stacked
const PAGE_HEIGHT: f32 = 1900.0;

pub(super) const STORY_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1554907984-15263bfd63bd?w=800&h=1000&fit=crop";

#[derive(Debug, Default)]
pub struct AboutPage {
    scroll: f32,
}

impl Page for AboutPage {
    fn handle_input(&mut self, input: &Input, _state: &mut SiteState, area: Rect) {
        let max_scroll = (PAGE_HEIGHT - area.h).max(0.0);
        let mut scroll = self.scroll - input.wheel * SCROLL_STEP;
        if input.pressed(KeyboardKey::KEY_DOWN) {
            scroll += SCROLL_STEP;
        }
        if input.pressed(KeyboardKey::KEY_UP) {
            scroll -= SCROLL_STEP;
        }
        self.scroll = scroll.clamp(0.0, max_scroll);
    }

    fn draw(&self, d: &mut RaylibDrawHandle, _state: &SiteState, assets: &Assets, area: Rect) {
        let top = area.y - self.scroll;
        let inner_w = area.w - 2.0 * layout::PADDING;

        // --- Banner ---
        let banner = Rect::new(area.x, top, area.w, 260.0);
        d.draw_rectangle_rec(rec(banner), GALLERY_950);
        draw_decor(d, DecorVariant::Both, banner);
        draw_heading(
            d,
            "About Us",
            Some("Where art meets community. We believe every masterpiece has a story, and every visitor deserves to be part of it."),
            banner,
            banner.y + 64.0,
            true,
        );

        // --- Story ---
        let story = Rect::new(area.x, banner.y + banner.h, area.w, 560.0);
        d.draw_rectangle_rec(rec(story), Color::WHITE);
        draw_decor(d, DecorVariant::Left, story);
        let text_w = inner_w * 0.55;
        let x = story.x + layout::PADDING;
        let mut y = story.y + layout::PADDING;
        d.draw_text("Our Story", x as i32, y as i32, 36, GALLERY_950);
        y += 56.0;
        for paragraph in STORY {
            y = draw_wrapped(d, paragraph, x, y, text_w, 16, Color::GRAY) + 12.0;
        }
        let photo = Rect::new(x + text_w + layout::PADDING, story.y + layout::PADDING, inner_w - text_w - layout::PADDING, story.h - 2.0 * layout::PADDING);
        draw_cover(d, assets, STORY_IMAGE_URL, photo, 1.0);

        // --- Mission ---
        let mission = Rect::new(area.x, story.y + story.h, area.w, 420.0);
        d.draw_rectangle_rec(rec(mission), GALLERY_100);
        let y = draw_heading(d, "Our Mission", None, mission, mission.y + layout::PADDING, false);
        let max_width = (inner_w * 0.7).min(760.0);
        let quote = format!("\"{MISSION}\"");
        let mut qy = y;
        for line in layout::wrap(&quote, max_width, |s| measure_text(s, 20) as f32) {
            let lw = measure_text(&line, 20) as f32;
            d.draw_text(&line, (mission.x + (mission.w - lw) / 2.0) as i32, qy as i32, 20, GALLERY_900);
            qy += 30.0;
        }
        let card_w = (inner_w - 2.0 * layout::GAP) / 3.0;
        for (i, pillar) in PILLARS.iter().enumerate() {
            let card = Rect::new(mission.x + layout::PADDING + i as f32 * (card_w + layout::GAP), qy + layout::GAP, card_w, 140.0);
            d.draw_rectangle_rec(rec(card), Color::WHITE);
            d.draw_text(pillar.title, (card.x + 20.0) as i32, (card.y + 20.0) as i32, 22, GALLERY_950);
            draw_wrapped(d, pillar.description, card.x + 20.0, card.y + 56.0, card.w - 40.0, 14, Color::GRAY);
        }

        // --- Team ---
        let team = Rect::new(area.x, mission.y + mission.h, area.w, PAGE_HEIGHT - (mission.y + mission.h - top));
        d.draw_rectangle_rec(rec(team), GALLERY_900);
        draw_decor(d, DecorVariant::Right, team);
        let y = draw_heading(
            d,
            "Our Team",
            Some("The passionate people behind every exhibition and experience."),
            team,
            team.y + layout::PADDING,
            true,
        );
        let members = content::team_members();
        let card_w = (inner_w - layout::GAP * (members.len() - 1) as f32) / members.len() as f32;
        for (i, member) in members.iter().enumerate() {
            let x = team.x + layout::PADDING + i as f32 * (card_w + layout::GAP);
            let photo = Rect::new(x, y, card_w, card_w);
            draw_cover(d, assets, &member.image_url, photo, 1.0);
            d.draw_text(&member.name, x as i32, (photo.y + photo.h + 16.0) as i32, 20, Color::WHITE);
            d.draw_text(&member.role, x as i32, (photo.y + photo.h + 42.0) as i32, 14, ACCENT);
            draw_wrapped(d, &member.bio, x, photo.y + photo.h + 66.0, card_w, 12, MUTED);
        }
    }
}
