//! Navigation disclosure state.
//!
//! The header owns one [`NavDisclosure`]; clicking the menu button is the only
//! thing that writes it. Nothing else (resize, anchor clicks, outside clicks)
//! closes the panel.

use leptos::prelude::*;

/// Whether the mobile navigation panel is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Disclosure {
    /// Panel hidden
    #[default]
    Closed,
    /// Panel shown
    Open,
}

impl Disclosure {
    /// Flip between [`Disclosure::Closed`] and [`Disclosure::Open`].
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            Disclosure::Closed => Disclosure::Open,
            Disclosure::Open => Disclosure::Closed,
        }
    }

    /// `true` when the panel is shown.
    pub fn is_open(self) -> bool {
        self == Disclosure::Open
    }
}

impl From<bool> for Disclosure {
    fn from(open: bool) -> Self {
        if open { Disclosure::Open } else { Disclosure::Closed }
    }
}

/// Reactive handle around a [`Disclosure`].
///
/// `Copy`, so it can be moved into as many event handlers and view closures
/// as the header needs.
#[derive(Clone, Copy, Debug)]
pub struct NavDisclosure {
    state: RwSignal<Disclosure>,
}

impl NavDisclosure {
    /// New handle, closed.
    pub fn new() -> Self {
        Self::with_state(Disclosure::Closed)
    }

    /// New handle starting in `state`.
    pub fn with_state(state: Disclosure) -> Self {
        Self {
            state: RwSignal::new(state),
        }
    }

    /// Flip the panel. Cannot fail.
    pub fn toggle(&self) {
        self.state.update(Disclosure::toggle);
        tracing::debug!(state = ?self.state.get_untracked(), "navigation disclosure toggled");
    }

    /// Reactive read; subscribes the calling view to changes.
    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }

    /// Current state without subscribing.
    pub fn get(&self) -> Disclosure {
        self.state.get_untracked()
    }
}

impl Default for NavDisclosure {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use pretty_assertions::assert_eq;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn starts_closed() {
        assert_eq!(Disclosure::default(), Disclosure::Closed);
        assert!(!Disclosure::default().is_open());
    }

    #[test]
    fn one_toggle_opens_two_close() {
        let mut state = Disclosure::Closed;
        state.toggle();
        assert_eq!(state, Disclosure::Open);
        state.toggle();
        assert_eq!(state, Disclosure::Closed);
    }

    #[test]
    fn parity_of_toggles_decides_state() {
        for n in 0..=25usize {
            let state = (0..n).fold(Disclosure::Closed, |s, _| s.toggled());
            assert_eq!(state.is_open(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn from_bool() {
        assert_eq!(Disclosure::from(true), Disclosure::Open);
        assert_eq!(Disclosure::from(false), Disclosure::Closed);
    }

    #[test]
    fn reactive_handle_toggles() {
        let owner = Owner::new();
        owner.with(|| {
            let nav = NavDisclosure::new();
            assert_eq!(nav.get(), Disclosure::Closed);

            nav.toggle();
            assert!(nav.is_open());

            nav.toggle();
            assert_eq!(nav.get(), Disclosure::Closed);
        });
    }

    #[test]
    fn copies_share_state() {
        let owner = Owner::new();
        owner.with(|| {
            let nav = NavDisclosure::new();
            let handler_copy = nav;
            handler_copy.toggle();
            assert_eq!(nav.get(), Disclosure::Open);
        });
    }

    #[test]
    fn toggle_emits_debug_event() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .finish();

        Owner::new().with(|| {
            tracing::subscriber::with_default(subscriber, || NavDisclosure::new().toggle());
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("navigation disclosure toggled"), "{output}");
        assert!(output.contains("state=Open"), "{output}");
    }
}
