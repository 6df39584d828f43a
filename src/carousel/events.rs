//! Notifications a carousel raises to outside listeners.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::slot::SlotId;

static NEXT_CAROUSEL_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarouselId(u64);

impl CarouselId {
    pub(crate) fn fresh() -> Self {
        Self(NEXT_CAROUSEL_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for CarouselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "carousel-{}", self.0)
    }
}

/// The selected display case changed to a different slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayChanged {
    /// Slot selected before the change.
    pub previous: Option<SlotId>,
    /// Slot selected now.
    pub current: Option<SlotId>,
}

/// One of the carousel's display cases was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselClicked {
    /// The carousel that was clicked.
    pub carousel: CarouselId,
}
