use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;
use yew::prelude::*;

/// A value that falls back to its default a fixed time after it was shown.
///
/// The pending timer is owned by the handle, so showing a new value, clearing,
/// or unmounting the component cancels it.
pub struct TransientHandle<T> {
    value: UseStateHandle<T>,
    timer: Rc<RefCell<Option<Timeout>>>,
    duration_ms: u32,
}

impl<T> Clone for TransientHandle<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            timer: self.timer.clone(),
            duration_ms: self.duration_ms,
        }
    }
}

impl<T: Default + 'static> TransientHandle<T> {
    pub fn show(&self, value: T) {
        let state = self.value.clone();
        self.value.set(value);
        let timeout = Timeout::new(self.duration_ms, move || state.set(T::default()));
        // Dropping the previous timeout cancels it
        *self.timer.borrow_mut() = Some(timeout);
    }

    pub fn clear(&self) {
        self.timer.borrow_mut().take();
        self.value.set(T::default());
    }
}

impl<T> Deref for TransientHandle<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

#[hook]
pub fn use_transient<T: Default + 'static>(duration_ms: u32) -> TransientHandle<T> {
    let value = use_state(T::default);
    let timer = use_mut_ref(|| None::<Timeout>);

    {
        let timer = timer.clone();
        use_effect_with((), move |_| {
            move || {
                timer.borrow_mut().take();
            }
        });
    }

    TransientHandle {
        value,
        timer,
        duration_ms,
    }
}
