/// Keeps Tab cycling inside the modal.
///
/// Only the first and last focusable elements matter: leaving past either end
/// wraps to the other one, everything in between is left to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTrap<F> {
	first: F,
	last: F,
}

impl<F: Clone + PartialEq> FocusTrap<F> {
	/// Build a trap over `focusables` in document order. `None` when empty.
	pub fn over(focusables: &[F]) -> Option<Self> {
		let first = focusables.first()?.clone();
		let last = focusables.last()?.clone();
		Some(Self { first, last })
	}

	/// Where focus must go when Tab (or Shift+Tab if `backwards`) is pressed
	/// while `active` is focused. `None` lets the host move focus normally.
	pub fn redirect(&self, active: Option<&F>, backwards: bool) -> Option<F> {
		if backwards {
			(active == Some(&self.first)).then(|| self.last.clone())
		} else {
			(active == Some(&self.last)).then(|| self.first.clone())
		}
	}

	pub fn first(&self) -> &F {
		&self.first
	}

	pub fn last(&self) -> &F {
		&self.last
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wraps_at_both_ends() {
		let trap = FocusTrap::over(&["input", "close", "link"]).unwrap();

		assert_eq!(trap.redirect(Some(&"link"), false), Some("input"));
		assert_eq!(trap.redirect(Some(&"input"), true), Some("link"));
		assert_eq!(trap.redirect(Some(&"close"), false), None);
		assert_eq!(trap.redirect(Some(&"close"), true), None);
		assert_eq!(trap.redirect(None, false), None);
	}

	#[test]
	fn single_element_wraps_onto_itself() {
		let trap = FocusTrap::over(&[7]).unwrap();
		assert_eq!(trap.redirect(Some(&7), false), Some(7));
		assert_eq!(trap.redirect(Some(&7), true), Some(7));
		assert!(FocusTrap::<u8>::over(&[]).is_none());
	}
}
