//! The host-side contract the controller drives.
//!
//! A surface stands in for the page: it owns the modal markup, the input, the
//! results container, the focus state and the status region used for screen
//! reader announcements. The controller never renders anything itself.

use std::fmt::Debug;

use crate::view::ViewState;

/// Elements the controller needs, located by fixed identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
	Modal,
	Backdrop,
	Input,
	Results,
}

impl Element {
	pub const REQUIRED: [Element; 4] = [
		Element::Modal,
		Element::Backdrop,
		Element::Input,
		Element::Results,
	];

	#[must_use]
	pub fn id(self) -> &'static str {
		match self {
			Self::Modal => "search-modal",
			Self::Backdrop => "search-backdrop",
			Self::Input => "search-input",
			Self::Results => "search-results",
		}
	}
}

pub trait Surface {
	/// Handle to something that can hold focus.
	type Focus: Clone + PartialEq + Debug;
	/// Handle to a live-region announcement, used to remove it later.
	type Announcement;

	fn has_element(&self, element: Element) -> bool;

	fn set_modal_hidden(&mut self, hidden: bool);
	/// Suspend or resume scrolling of the page behind the modal.
	fn set_scroll_locked(&mut self, locked: bool);

	fn active_focus(&self) -> Option<Self::Focus>;
	fn focus(&mut self, target: &Self::Focus);
	fn focus_input(&mut self);
	fn clear_input(&mut self);
	/// Focusable descendants of the modal, in document order.
	fn modal_focusables(&self) -> Vec<Self::Focus>;

	/// Replace the content of the results container.
	fn render(&mut self, view: &ViewState<'_>);
	/// Toggle the selected class and `aria-selected` on a rendered result.
	fn set_result_selected(&mut self, index: usize, selected: bool);
	/// Scroll a rendered result into view, moving the shortest distance.
	fn scroll_result_into_view(&mut self, index: usize);

	/// Add a polite status message for assistive technology.
	fn announce(&mut self, message: &str) -> Self::Announcement;
	fn retract(&mut self, announcement: Self::Announcement);

	/// Follow a result link.
	fn navigate(&mut self, url: &str);
}

/// Identifiers of required elements the surface does not provide.
pub fn missing_elements<S: Surface + ?Sized>(surface: &S) -> Vec<&'static str> {
	Element::REQUIRED
		.into_iter()
		.filter(|element| !surface.has_element(*element))
		.map(Element::id)
		.collect()
}
