//! Navigation history for front ends without a browser.

use std::sync::Mutex;

use qacm_core::ports::Navigator;

/// Stack of visited routes. Going back pops the current one; the root route
/// is never popped.
pub struct HistoryNavigator {
    stack: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            stack: Mutex::new(vec![root.into()]),
        }
    }

    pub fn navigate(&self, route: impl Into<String>) {
        let route = route.into();
        tracing::debug!(route = %route, "Navigate");
        self.stack
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(route);
    }

    pub fn current(&self) -> String {
        let stack = self
            .stack
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        stack.last().cloned().unwrap_or_default()
    }
}

impl Navigator for HistoryNavigator {
    fn previous_state(&self) {
        let mut stack = self
            .stack
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if stack.len() > 1 {
            stack.pop();
        }
        tracing::debug!(route = ?stack.last(), "Navigate back");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_returns_to_previous_route() {
        let history = HistoryNavigator::new("/comment");
        history.navigate("/comment/new");

        history.previous_state();

        assert_eq!(history.current(), "/comment");
    }

    #[test]
    fn test_back_stops_at_root() {
        let history = HistoryNavigator::new("/");
        history.previous_state();
        history.previous_state();
        assert_eq!(history.current(), "/");
    }
}
