//! End-to-end carousel behaviour through the public API.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use glam::Vec3;
use vitrine::carousel::{Carousel, CarouselCommand, DisplayChanged};
use vitrine::input::{InputEvent, InputProcessor};
use vitrine::options::CarouselOptions;
use vitrine::selector::{SelectionChange, Selector, WrapMode};
use vitrine::slot::{DisplayCase, DisplayContent, SlotId};

fn assets() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
}

/// Selector that always reports the last item it was told to select and
/// ignores navigation.
#[derive(Default)]
struct PinnedSelector {
    items: Vec<SlotId>,
    current: Option<usize>,
    pending: Vec<SelectionChange>,
    navigation_calls: usize,
}

impl Selector for PinnedSelector {
    fn initialize(&mut self, items: &[SlotId]) {
        self.items = items.to_vec();
        self.current = None;
    }

    fn current_index(&self) -> Option<usize> {
        self.current
    }

    fn current_item(&self) -> Option<SlotId> {
        self.current.map(|i| self.items[i])
    }

    fn next_item(&mut self) {
        self.navigation_calls += 1;
    }

    fn previous_item(&mut self) {
        self.navigation_calls += 1;
    }

    fn select(&mut self, item: SlotId) -> bool {
        let Some(index) = self.items.iter().position(|i| *i == item) else {
            return false;
        };
        let previous = self.current_item();
        self.current = Some(index);
        self.pending.push(SelectionChange {
            previous,
            current: Some(item),
        });
        true
    }

    fn clear(&mut self) {
        self.items.clear();
        self.current = None;
        self.pending.clear();
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn take_changes(&mut self) -> Vec<SelectionChange> {
        std::mem::take(&mut self.pending)
    }
}

#[test]
fn presets_from_assets_drive_layout_and_wrapping() {
    let options =
        CarouselOptions::load(&assets().join("presets/calm.toml")).unwrap();
    let content = DisplayContent::load(&assets().join("content.toml")).unwrap();
    assert_eq!(options.selection.wrap_mode, WrapMode::Clamp);

    let mut carousel = Carousel::new(options, content);
    carousel.initialize().unwrap();

    let slots = carousel.display_cases();
    assert_eq!(slots.len(), 3);
    assert_eq!(slots[2].position(), Vec3::new(3.0, 0.0, 0.0));
    assert_eq!(slots[0].model_position(), Vec3::new(0.0, 1.2, 0.0));
    assert_eq!(slots[1].model().name, "sneaker");

    // Clamped: stepping back from the first slot does not move.
    carousel.previous_display();
    assert!(!carousel.is_animating());

    carousel.next_display();
    carousel.advance(Duration::from_secs(1));
    assert_eq!(carousel.position(), Vec3::new(-1.5, 0.0, 0.0));
}

#[test]
fn input_events_flow_through_to_listeners() {
    let content = DisplayContent::load(&assets().join("content.toml")).unwrap();
    let options = CarouselOptions::default();
    let input = InputProcessor::new(options.keybindings.clone());
    let mut carousel = Carousel::new(options, content);
    carousel.initialize().unwrap();

    let changes: Rc<RefCell<Vec<DisplayChanged>>> = Rc::default();
    let sink = Rc::clone(&changes);
    let _ = carousel.on_display_change(move |e| sink.borrow_mut().push(*e));
    let clicks = Rc::new(RefCell::new(0));
    let click_sink = Rc::clone(&clicks);
    let _ = carousel.on_click(move |_| *click_sink.borrow_mut() += 1);

    let ids: Vec<SlotId> =
        carousel.display_cases().iter().map(DisplayCase::id).collect();
    let events = [
        InputEvent::key("ArrowRight"),
        InputEvent::SlotClicked { slot: ids[1] },
        InputEvent::Scroll { delta: 1.0 },
        InputEvent::key("Space"),
    ];
    for event in &events {
        if let Some(command) = input.handle_event(event) {
            carousel.execute(command).unwrap();
        }
        carousel.advance(Duration::from_millis(100));
    }

    // The click re-selected the already current slot.
    let changes = changes.borrow();
    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].current, Some(ids[1]));
    assert_eq!(changes[1].current, Some(ids[2]));
    assert_eq!(*clicks.borrow(), 1);
}

#[test]
fn custom_selector_plugs_into_the_controller() {
    let content = DisplayContent::load(&assets().join("content.toml")).unwrap();
    let mut carousel = Carousel::with_selector(
        CarouselOptions::default(),
        content,
        PinnedSelector::default(),
    );
    carousel.initialize().unwrap();

    carousel.next_display();
    carousel.previous_display();
    assert_eq!(carousel.selector().navigation_calls, 2);
    assert!(!carousel.is_animating());

    let last = carousel.display_cases()[2].id();
    carousel.execute(CarouselCommand::ClickSlot(last)).unwrap();
    carousel.advance(Duration::from_secs(5));
    assert_eq!(carousel.position(), Vec3::new(-2.0, 0.0, 0.0));
    assert_eq!(carousel.selected_display().map(DisplayCase::id), Some(last));
}

#[test]
fn clean_up_then_reinitialize_yields_new_slot_identities() {
    let content = DisplayContent::load(&assets().join("content.toml")).unwrap();
    let mut carousel = Carousel::new(CarouselOptions::default(), content);
    carousel.initialize().unwrap();
    let old: Vec<SlotId> =
        carousel.display_cases().iter().map(DisplayCase::id).collect();

    carousel.clean_up();
    carousel.initialize().unwrap();
    let new: Vec<SlotId> =
        carousel.display_cases().iter().map(DisplayCase::id).collect();

    assert_eq!(old.len(), new.len());
    assert!(old.iter().all(|id| !new.contains(id)));
    assert!(carousel.click_slot(old[0]).is_err());
}
