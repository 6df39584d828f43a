//! The display-case carousel controller.
//!
//! A [`Carousel`] owns a row of [`DisplayCase`]s laid out along
//! `display_offset`, delegates "which one is current" to a [`Selector`],
//! and scrolls itself so the current case lands on the resting
//! `target_position`. Scrolling is a smoothstep tween advanced by the host
//! loop through [`Carousel::advance`]; nothing here reads a clock.
//!
//! # Lifecycle
//!
//! A carousel is either uninitialized or initialized.
//! [`initialize`](Carousel::initialize) builds one slot per material
//! variant of its [`DisplayContent`] and
//! [`clean_up`](Carousel::clean_up) reverses it. Every other operation is a
//! no-op while uninitialized.

pub mod command;
pub mod events;

use std::time::Duration;

pub use command::CarouselCommand;
pub use events::{CarouselClicked, CarouselId, DisplayChanged};
use glam::Vec3;

use crate::animation::PositionTransition;
use crate::error::CarouselError;
use crate::options::CarouselOptions;
use crate::selector::{IndexSelector, SelectionChange, Selector};
use crate::slot::{DisplayCase, DisplayContent, SlotId};
use crate::util::listeners::{ListenerId, Listeners};

/// A row of display cases with selection-driven scrolling.
#[derive(Debug)]
pub struct Carousel<S = IndexSelector> {
    id: CarouselId,
    options: CarouselOptions,
    content: DisplayContent,
    selector: S,
    slots: Vec<DisplayCase>,
    /// The carousel's own placement; slots are positioned relative to it.
    position: Vec3,
    /// Resting position with the first slot selected.
    target_position: Vec3,
    /// `display_offset * -selected_index` for the latest selection.
    selection_offset: Vec3,
    initialized: bool,
    transition: PositionTransition,
    display_changed: Listeners<DisplayChanged>,
    clicked: Listeners<CarouselClicked>,
}

impl Carousel<IndexSelector> {
    /// Carousel using the built-in [`IndexSelector`], configured from
    /// `options.selection`.
    #[must_use]
    pub fn new(options: CarouselOptions, content: DisplayContent) -> Self {
        let selector = IndexSelector::new(options.selection.wrap_mode);
        Self::with_selector(options, content, selector)
    }
}

impl<S: Selector> Carousel<S> {
    /// Carousel delegating selection to `selector`.
    #[must_use]
    pub fn with_selector(
        options: CarouselOptions,
        content: DisplayContent,
        selector: S,
    ) -> Self {
        let transition = PositionTransition::new(
            options.animation.duration(),
            options.animation.easing,
        );
        Self {
            id: CarouselId::fresh(),
            options,
            content,
            selector,
            slots: Vec::new(),
            position: Vec3::ZERO,
            target_position: Vec3::ZERO,
            selection_offset: Vec3::ZERO,
            initialized: false,
            transition,
            display_changed: Listeners::new(),
            clicked: Listeners::new(),
        }
    }

    /// Start at `position` instead of the origin.
    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    /// Build one display case per material variant and start tracking
    /// selection.
    ///
    /// The current position becomes the resting target. Calling this on an
    /// initialized carousel logs a warning, changes nothing, and returns
    /// [`CarouselError::AlreadyInitialized`].
    pub fn initialize(&mut self) -> Result<(), CarouselError> {
        if self.initialized {
            log::warn!("{} has already been initialized", self.id);
            return Err(CarouselError::AlreadyInitialized);
        }

        self.generate_displays();
        for (display, material) in
            self.slots.iter_mut().zip(&self.content.materials)
        {
            display.change_model_material(material.clone());
        }

        self.target_position = self.position;
        self.selection_offset = Vec3::ZERO;
        self.transition.reset();

        let ids: Vec<SlotId> = self.slots.iter().map(DisplayCase::id).collect();
        self.selector.initialize(&ids);
        // Subscribe from a clean queue.
        let _ = self.selector.take_changes();

        self.initialized = true;
        log::debug!(
            "{} initialized with {} display cases",
            self.id,
            self.slots.len()
        );
        Ok(())
    }

    /// Drop every display case and return to the uninitialized state.
    pub fn clean_up(&mut self) {
        let dropped = self.slots.len();
        self.slots.clear();
        self.target_position = Vec3::ZERO;
        self.selection_offset = Vec3::ZERO;
        self.transition.reset();

        self.selector.clear();
        self.initialized = false;
        log::debug!("{} cleaned up ({dropped} display cases dropped)", self.id);
    }

    fn generate_displays(&mut self) {
        self.slots.clear();

        let item_offset = self.options.layout.item_offset();
        let display_offset = self.options.layout.display_offset();
        for i in 0..self.content.materials.len() {
            let mut display =
                DisplayCase::new(self.content.model.clone(), item_offset);
            display.set_position(display.position() + display_offset * i as f32);
            self.slots.push(display);
        }
    }

    // ── Per-frame ────────────────────────────────────────────────────────

    /// Advance the scroll animation by one frame of `delta`.
    ///
    /// Also delivers selection changes made directly on the selector since
    /// the last call. Does nothing while uninitialized.
    pub fn advance(&mut self, delta: Duration) {
        if !self.initialized {
            return;
        }

        self.deliver_selection_changes();

        if let Some(position) = self.transition.advance(delta) {
            self.position = position;
            log::trace!(
                "{} at {position} ({:.0}%)",
                self.id,
                self.transition.progress() * 100.0
            );
        }
    }

    /// Re-base the resting position and animate toward it, keeping the
    /// current selection's offset.
    pub fn set_target_position(&mut self, target: Vec3) {
        if !self.initialized {
            log::debug!("{}: set_target_position ignored, not initialized", self.id);
            return;
        }
        self.target_position = target;
        self.transition
            .start(self.position, target + self.selection_offset);
    }

    // ── Selection ────────────────────────────────────────────────────────

    /// Step the selection forward, as the selector defines it.
    pub fn next_display(&mut self) {
        if !self.initialized {
            return;
        }
        self.selector.next_item();
        self.deliver_selection_changes();
    }

    /// Step the selection back, as the selector defines it.
    pub fn previous_display(&mut self) {
        if !self.initialized {
            return;
        }
        self.selector.previous_item();
        self.deliver_selection_changes();
    }

    /// The display case the selector reports as current.
    #[must_use]
    pub fn selected_display(&self) -> Option<&DisplayCase> {
        let current = self.selector.current_item()?;
        self.slot(current)
    }

    /// Handle a click on one of this carousel's display cases: select it,
    /// then notify click listeners.
    ///
    /// Ignored while uninitialized. Slots that do not belong to this
    /// carousel are rejected without side effects.
    pub fn click_slot(&mut self, slot: SlotId) -> Result<(), CarouselError> {
        if !self.initialized {
            log::debug!("{}: click on {slot} ignored, not initialized", self.id);
            return Ok(());
        }
        if self.slot(slot).is_none() || !self.selector.select(slot) {
            return Err(CarouselError::UnknownSlot(slot));
        }
        self.deliver_selection_changes();

        let event = CarouselClicked { carousel: self.id };
        self.clicked.emit(&event);
        Ok(())
    }

    /// Run a command.
    pub fn execute(
        &mut self,
        command: CarouselCommand,
    ) -> Result<(), CarouselError> {
        match command {
            CarouselCommand::NextDisplay => self.next_display(),
            CarouselCommand::PreviousDisplay => self.previous_display(),
            CarouselCommand::ClickSlot(slot) => self.click_slot(slot)?,
            CarouselCommand::SetTargetPosition(target) => {
                self.set_target_position(target);
            }
        }
        Ok(())
    }

    fn deliver_selection_changes(&mut self) {
        for change in self.selector.take_changes() {
            self.on_selection_change(change);
        }
    }

    fn on_selection_change(&mut self, change: SelectionChange) {
        if change.is_reselection() {
            return;
        }

        let index = change
            .current
            .and_then(|id| self.slots.iter().position(|s| s.id() == id))
            .or_else(|| self.selector.current_index())
            .unwrap_or(0);

        self.selection_offset =
            self.options.layout.display_offset() * -(index as f32);
        self.transition
            .start(self.position, self.target_position + self.selection_offset);
        log::debug!(
            "{}: selection {:?} -> {:?}, scrolling to {}",
            self.id,
            change.previous,
            change.current,
            self.transition.end_position()
        );

        self.display_changed.emit(&DisplayChanged {
            previous: change.previous,
            current: change.current,
        });
    }

    // ── Listeners ────────────────────────────────────────────────────────

    /// Call `listener` whenever the selected display case changes to a
    /// different slot.
    pub fn on_display_change(
        &mut self,
        listener: impl FnMut(&DisplayChanged) + 'static,
    ) -> ListenerId {
        self.display_changed.subscribe(listener)
    }

    /// Unregister a display-change listener.
    pub fn remove_display_change_listener(&mut self, id: ListenerId) -> bool {
        self.display_changed.unsubscribe(id)
    }

    /// Call `listener` whenever one of the display cases is clicked.
    pub fn on_click(
        &mut self,
        listener: impl FnMut(&CarouselClicked) + 'static,
    ) -> ListenerId {
        self.clicked.subscribe(listener)
    }

    /// Unregister a click listener.
    pub fn remove_click_listener(&mut self, id: ListenerId) -> bool {
        self.clicked.unsubscribe(id)
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// This carousel's identity.
    #[must_use]
    pub fn id(&self) -> CarouselId {
        self.id
    }

    /// The display cases in display order.
    #[must_use]
    pub fn display_cases(&self) -> &[DisplayCase] {
        &self.slots
    }

    /// Look up a display case by id.
    #[must_use]
    pub fn slot(&self, id: SlotId) -> Option<&DisplayCase> {
        self.slots.iter().find(|s| s.id() == id)
    }

    /// World position of a display case (carousel position + slot offset).
    #[must_use]
    pub fn slot_world_position(&self, id: SlotId) -> Option<Vec3> {
        self.slot(id).map(|s| self.position + s.position())
    }

    /// Current position of the carousel.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Place the carousel instantly. Does not touch the resting target or
    /// any running animation's endpoints.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Resting position with the first slot selected.
    #[must_use]
    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }

    /// Whether [`initialize`](Self::initialize) has run (and
    /// [`clean_up`](Self::clean_up) has not).
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether a scroll animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_running()
    }

    /// The scroll animation state.
    #[must_use]
    pub fn transition(&self) -> &PositionTransition {
        &self.transition
    }

    /// The selection collaborator.
    #[must_use]
    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// Direct access to the selection collaborator. Changes made through it
    /// are picked up on the next [`advance`](Self::advance).
    pub fn selector_mut(&mut self) -> &mut S {
        &mut self.selector
    }

    /// Options this carousel was built with.
    #[must_use]
    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Content shown by this carousel.
    #[must_use]
    pub fn content(&self) -> &DisplayContent {
        &self.content
    }
}
