//! Component-scoped timer ownership.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use volt_core::{Cancel, TimerSlot};

/// A Dioxus task used as a timer handle.
#[derive(Clone, Copy)]
pub struct TaskTimer(pub Task);

impl Cancel for TaskTimer {
    fn cancel(self) {
        self.0.cancel();
    }
}

pub type SharedTimerSlot = Rc<RefCell<TimerSlot<TaskTimer>>>;

/// Timer slot that lives as long as the calling component.
///
/// The pending task is cancelled on unmount.
pub fn use_timer_slot(label: &'static str) -> SharedTimerSlot {
    let slot = use_hook(|| Rc::new(RefCell::new(TimerSlot::new(label))));

    let on_drop = slot.clone();
    use_drop(move || {
        on_drop.borrow_mut().clear();
    });

    slot
}
