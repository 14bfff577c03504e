//! Site-wide state driven by the page shell.
//!
//! The home page owns the hero carousel: entering `/` mounts a fresh
//! controller at slide 0 and leaving it unmounts the controller, which cancels
//! its timer. Other pages keep their own small pieces of state here.

use std::time::Duration;

use tracing::{error, info};

use crate::carousel::{Carousel, Crossfade, Transition};
use crate::config::Config;
use crate::constants::FADE_DURATION;
use crate::content::{Artwork, Catalog};
use crate::error::{CarouselError, LookupError};
use crate::forms::{ContactField, ContactForm, NewsletterForm};
use crate::lightbox::Lightbox;
use crate::routes::Route;
use crate::slide::SlideDeck;

#[derive(Debug)]
pub struct Hero {
    pub carousel: Carousel,
    pub fade: Crossfade,
}

impl Hero {
    fn mount(deck: SlideDeck, config: &Config) -> Result<Self, CarouselError> {
        let fade = Crossfade::new(deck.len(), FADE_DURATION);
        let carousel = Carousel::mount(deck, config.slide_interval, config.restart_policy)?;
        Ok(Self { carousel, fade })
    }

    pub fn next(&mut self) -> Transition {
        let t = self.carousel.next();
        self.fade.focus(t.to);
        t
    }

    pub fn previous(&mut self) -> Transition {
        let t = self.carousel.previous();
        self.fade.focus(t.to);
        t
    }

    pub fn go_to(&mut self, index: usize) -> Result<Transition, CarouselError> {
        let t = self.carousel.go_to(index)?;
        self.fade.focus(t.to);
        Ok(t)
    }

    pub fn update(&mut self, dt: Duration) {
        if let Some(t) = self.carousel.advance(dt) {
            self.fade.focus(t.to);
        }
        self.fade.update(dt.as_secs_f32());
    }
}

/// How a gallery card was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// Go to the artwork's own page.
    Open,
    /// Show it in the lightbox without leaving the gallery.
    Preview,
}

/// What the artwork detail route resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail<'a> {
    Found(&'a Artwork),
    NotFound,
}

#[derive(Debug)]
pub struct SiteState {
    config: Config,
    deck: SlideDeck,
    catalog: Catalog,
    route: Route,
    hero: Option<Hero>,
    pub lightbox: Lightbox,
    pub contact: ContactForm,
    pub contact_focus: ContactField,
    pub newsletter: NewsletterForm,
}

impl SiteState {
    pub fn new(config: Config, deck: SlideDeck, catalog: Catalog) -> Self {
        let mut state = Self {
            route: Route::NotFound(String::new()),
            hero: None,
            lightbox: Lightbox::new(),
            contact: ContactForm::new(),
            contact_focus: ContactField::Name,
            newsletter: NewsletterForm::new(),
            config,
            deck,
            catalog,
        };
        let start = state.config.start_route.clone();
        state.navigate(start);
        state
    }

    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        info!(from = %self.route, to = %route, "navigate");

        if route == Route::Home {
            self.hero = match Hero::mount(self.deck.clone(), &self.config) {
                Ok(hero) => Some(hero),
                Err(e) => {
                    error!("hero carousel not mounted: {e}");
                    None
                }
            };
        } else if let Some(mut hero) = self.hero.take() {
            hero.carousel.unmount();
        }
        if route != Route::Gallery {
            self.lightbox.close();
        }
        self.route = route;
    }

    pub fn navigate_to(&mut self, path: &str) {
        self.navigate(Route::parse(path));
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn hero(&self) -> Option<&Hero> {
        self.hero.as_ref()
    }

    pub fn hero_mut(&mut self) -> Option<&mut Hero> {
        self.hero.as_mut()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn detail(&self) -> Option<Detail<'_>> {
        match &self.route {
            Route::Artwork(param) => Some(match self.catalog.find_by_param(param) {
                Some(artwork) => Detail::Found(artwork),
                None => Detail::NotFound,
            }),
            _ => None,
        }
    }

    /// Acts on the gallery card for artwork `id`.
    pub fn activate_card(&mut self, id: u32, action: CardAction) -> Result<(), LookupError> {
        match action {
            CardAction::Open => {
                self.catalog.require(id)?;
                self.navigate(Route::artwork(id));
                Ok(())
            }
            CardAction::Preview => self.open_lightbox(id),
        }
    }

    pub fn open_lightbox(&mut self, id: u32) -> Result<(), LookupError> {
        self.lightbox.open(&self.catalog, id)
    }

    pub fn lightbox_next(&mut self) {
        self.lightbox.next(&self.catalog);
    }

    pub fn lightbox_previous(&mut self) {
        self.lightbox.previous(&self.catalog);
    }

    /// Advances time-based state by one frame.
    pub fn update(&mut self, dt: Duration) {
        if let Some(hero) = self.hero.as_mut() {
            hero.update(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    fn site(start: &str) -> SiteState {
        let config = Config { start_route: Route::parse(start), ..Config::default() };
        SiteState::new(config, content::hero_slides().unwrap(), content::catalog())
    }

    const PERIOD: Duration = Duration::from_millis(5000);

    #[test]
    fn home_mounts_carousel() {
        let s = site("/");
        let hero = s.hero().unwrap();
        assert!(hero.carousel.is_mounted());
        assert_eq!(hero.carousel.current_index(), 0);
    }

    #[test]
    fn zero_interval_leaves_home_without_carousel() {
        let config = Config { slide_interval: Duration::ZERO, ..Config::default() };
        let mut s = SiteState::new(config, content::hero_slides().unwrap(), content::catalog());
        assert_eq!(s.route(), &Route::Home);
        assert!(s.hero().is_none());
        s.update(Duration::from_secs(60));
    }

    #[test]
    fn other_pages_have_no_carousel() {
        let s = site("/gallery");
        assert!(s.hero().is_none());
        assert_eq!(s.route(), &Route::Gallery);
    }

    #[test]
    fn leaving_home_tears_down_and_returning_remounts_at_zero() {
        let mut s = site("/");
        s.update(PERIOD);
        assert_eq!(s.hero().unwrap().carousel.current_index(), 1);

        s.navigate_to("/about");
        assert!(s.hero().is_none());
        s.update(PERIOD * 20);

        s.navigate_to("/");
        let hero = s.hero().unwrap();
        assert_eq!(hero.carousel.current_index(), 0);
        assert_eq!(hero.carousel.time_until_advance(), Some(PERIOD));
    }

    #[test]
    fn navigating_to_same_route_keeps_carousel() {
        let mut s = site("/");
        s.update(PERIOD);
        s.navigate_to("/");
        assert_eq!(s.hero().unwrap().carousel.current_index(), 1);
    }

    #[test]
    fn auto_advance_retargets_fade() {
        let mut s = site("/");
        s.update(PERIOD);
        let hero = s.hero().unwrap();
        assert_eq!(hero.fade.focused(), 1);
    }

    #[test]
    fn manual_hero_actions_focus_fade() {
        let mut s = site("/");
        let hero = s.hero_mut().unwrap();
        hero.previous();
        assert_eq!(hero.fade.focused(), 2);
        hero.go_to(1).unwrap();
        assert_eq!(hero.fade.focused(), 1);
        assert!(hero.go_to(3).is_err());
        assert_eq!(hero.fade.focused(), 1);
    }

    #[test]
    fn detail_resolves_or_falls_back() {
        let s = site("/artwork/5");
        assert!(matches!(s.detail(), Some(Detail::Found(a)) if a.title == "The Persistence of Memory"));

        let s = site("/artwork/nope");
        assert_eq!(s.detail(), Some(Detail::NotFound));

        let s = site("/artwork/");
        assert_eq!(s.detail(), None);
        assert!(matches!(s.route(), Route::NotFound(_)));
    }

    #[test]
    fn leaving_gallery_closes_lightbox() {
        let mut s = site("/gallery");
        s.open_lightbox(3).unwrap();
        s.lightbox_next();
        assert_eq!(s.lightbox.selected_id(), Some(4));
        s.navigate_to("/contact");
        assert!(!s.lightbox.is_open());
    }

    #[test]
    fn card_click_opens_artwork_page() {
        let mut s = site("/gallery");
        s.activate_card(5, CardAction::Open).unwrap();
        assert_eq!(s.route(), &Route::artwork(5));
        assert!(matches!(s.detail(), Some(Detail::Found(a)) if a.id == 5));
        assert!(!s.lightbox.is_open());
    }

    #[test]
    fn card_preview_stays_in_gallery() {
        let mut s = site("/gallery");
        s.activate_card(2, CardAction::Preview).unwrap();
        assert_eq!(s.route(), &Route::Gallery);
        assert_eq!(s.lightbox.selected_id(), Some(2));

        assert_eq!(s.activate_card(99, CardAction::Open), Err(LookupError::UnknownArtwork(99)));
        assert_eq!(s.route(), &Route::Gallery);
    }
}
