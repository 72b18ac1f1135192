use std::time::Instant;

use cardstack_core::{
    CardFrame, Catalog, CoreError, Direction, Navigator, StackPresence,
    TransitionSpec,
};
use rand::Rng;

use crate::app::AppConfig;
use crate::images::CardImages;

/// Application state: one carousel instance plus the images it paints.
#[derive(Debug)]
pub struct State {
    pub carousel: CarouselState,
    pub images: CardImages,
}

impl State {
    pub fn new(config: &AppConfig) -> Self {
        let catalog = Catalog::builtin();
        let images = match &config.image_dir {
            Some(dir) => CardImages::discover(&catalog, dir),
            None => CardImages::empty(catalog.len()),
        };
        let carousel = CarouselState::new(
            catalog,
            config.transition,
            Instant::now(),
            &mut rand::rng(),
        );
        Self { carousel, images }
    }
}

/// Owns the active index for the lifetime of the window and keeps the
/// presence tracker in step with it.
#[derive(Debug)]
pub struct CarouselState {
    catalog: Catalog,
    navigator: Navigator,
    presence: StackPresence,
    last_frame: Instant,
}

impl CarouselState {
    pub fn new<R: Rng + ?Sized>(
        catalog: Catalog,
        spec: TransitionSpec,
        now: Instant,
        rng: &mut R,
    ) -> Self {
        let navigator = Navigator::over(&catalog);
        let presence = StackPresence::mount(
            catalog.len(),
            navigator.active(),
            spec,
            now,
            rng,
        );
        Self {
            catalog,
            navigator,
            presence,
            last_frame: now,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active(&self) -> usize {
        self.navigator.active()
    }

    pub fn presence(&self) -> &StackPresence {
        &self.presence
    }

    pub fn step<R: Rng + ?Sized>(
        &mut self,
        direction: Direction,
        now: Instant,
        rng: &mut R,
    ) {
        self.last_frame = now;
        if self.navigator.step(direction) {
            self.presence.recompose(self.navigator.active(), now, rng);
        }
    }

    pub fn select<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        now: Instant,
        rng: &mut R,
    ) -> Result<(), CoreError> {
        self.last_frame = now;
        if self.navigator.select(index)? {
            self.presence.recompose(self.navigator.active(), now, rng);
        }
        Ok(())
    }

    /// Advance the render clock and drop cards that finished exiting.
    pub fn tick(&mut self, now: Instant) {
        self.last_frame = now;
        let removed = self.presence.prune(now);
        if removed > 0 {
            log::trace!("Pruned {removed} exited cards");
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.presence.is_animating(now)
    }

    /// Cards to paint at the last observed frame time, back to front.
    pub fn frames(&self) -> Vec<CardFrame> {
        self.presence.frame(self.last_frame)
    }
}
