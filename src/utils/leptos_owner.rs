use leptos::logging::log;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Somewhere state can be read and written after an `.await`.
///
/// A component's signals may be disposed while a request is in flight, so
/// both accessors return `None` instead of panicking once the owner is gone.
pub trait StateCell<T> {
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
    fn read_state<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
}

impl<T: 'static> StateCell<T> for RwSignal<T> {
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let result = self.try_update(f);
        if result.is_none() {
            log!(
                "[OWNER] Dropping update for disposed {}",
                std::any::type_name::<T>()
            );
        }
        result
    }

    fn read_state<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn read_state<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}
