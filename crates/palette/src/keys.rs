//! Key model and the dispatch table consulted for every key press.
//!
//! Bindings are grouped by [`ModalState`]: while the modal is closed only the
//! open chord exists, so no navigation or focus trap handling can run.

use crate::model::ModalState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	Char(char),
	Escape,
	Enter,
	Up,
	Down,
	Tab,
	Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
	pub ctrl: bool,
	/// Command on macOS, the Windows/Super key elsewhere.
	pub meta: bool,
	pub shift: bool,
	pub alt: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
	pub key: Key,
	pub modifiers: Modifiers,
}

impl KeyInput {
	#[must_use]
	pub fn new(key: Key) -> Self {
		Self {
			key,
			modifiers: Modifiers::default(),
		}
	}

	#[must_use]
	pub fn ctrl(mut self) -> Self {
		self.modifiers.ctrl = true;
		self
	}

	#[must_use]
	pub fn meta(mut self) -> Self {
		self.modifiers.meta = true;
		self
	}

	#[must_use]
	pub fn shift(mut self) -> Self {
		self.modifiers.shift = true;
		self
	}

	fn platform_modifier(&self) -> bool {
		self.modifiers.ctrl || self.modifiers.meta
	}
}

impl From<Key> for KeyInput {
	fn from(key: Key) -> Self {
		Self::new(key)
	}
}

/// Where a binding listens. Modal bindings see an event before document ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
	Modal,
	Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
	Open,
	Close,
	SelectNext,
	SelectPrevious,
	Activate,
	FocusNext,
	FocusPrevious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
	/// Ctrl or Meta together with the given character.
	PlatformChord(char),
	Plain(Key),
	Tab { shift: bool },
}

impl Trigger {
	fn matches(self, input: &KeyInput) -> bool {
		match self {
			Self::PlatformChord(ch) => input.platform_modifier() && input.key == Key::Char(ch),
			Self::Plain(key) => input.key == key,
			Self::Tab { shift } => input.key == Key::Tab && input.modifiers.shift == shift,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prevent {
	Always,
	Never,
	/// Only when the command actually did something.
	WhenHandled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
	pub scope: Scope,
	pub trigger: Trigger,
	pub command: Command,
	pub prevent: Prevent,
}

const fn bind(scope: Scope, trigger: Trigger, command: Command, prevent: Prevent) -> Binding {
	Binding {
		scope,
		trigger,
		command,
		prevent,
	}
}

const CLOSED_BINDINGS: &[Binding] = &[bind(
	Scope::Document,
	Trigger::PlatformChord('k'),
	Command::Open,
	Prevent::Always,
)];

const OPEN_BINDINGS: &[Binding] = &[
	bind(Scope::Modal, Trigger::Plain(Key::Escape), Command::Close, Prevent::Always),
	bind(Scope::Modal, Trigger::Plain(Key::Down), Command::SelectNext, Prevent::Always),
	bind(Scope::Modal, Trigger::Plain(Key::Up), Command::SelectPrevious, Prevent::Always),
	bind(Scope::Modal, Trigger::Plain(Key::Enter), Command::Activate, Prevent::WhenHandled),
	bind(Scope::Modal, Trigger::Tab { shift: false }, Command::FocusNext, Prevent::WhenHandled),
	bind(Scope::Modal, Trigger::Tab { shift: true }, Command::FocusPrevious, Prevent::WhenHandled),
	bind(Scope::Document, Trigger::PlatformChord('k'), Command::Open, Prevent::Always),
	bind(Scope::Document, Trigger::Plain(Key::Escape), Command::Close, Prevent::Never),
];

/// Bindings active in `state`, modal scope first.
#[must_use]
pub fn bindings(state: ModalState) -> &'static [Binding] {
	match state {
		ModalState::Closed => CLOSED_BINDINGS,
		ModalState::Open => OPEN_BINDINGS,
	}
}

/// Bindings in `state` that fire for `input`, in dispatch order.
pub fn matching(state: ModalState, input: KeyInput) -> impl Iterator<Item = &'static Binding> {
	bindings(state)
		.iter()
		.filter(move |binding| binding.trigger.matches(&input))
}

/// What happened to a key press after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
	/// Commands that ran, in order.
	pub commands: [Option<Command>; 2],
	/// The host must not apply its default handling (e.g. typing into the input).
	pub default_prevented: bool,
}

impl KeyOutcome {
	pub(crate) fn record(&mut self, command: Command) {
		if let Some(slot) = self.commands.iter_mut().find(|slot| slot.is_none()) {
			*slot = Some(command);
		}
	}

	#[must_use]
	pub fn ran(&self, command: Command) -> bool {
		self.commands.contains(&Some(command))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn closed_state_only_listens_for_open_chord() {
		for key in [Key::Escape, Key::Up, Key::Down, Key::Enter, Key::Tab] {
			assert_eq!(matching(ModalState::Closed, KeyInput::new(key)).count(), 0);
		}

		let chord = KeyInput::new(Key::Char('k')).ctrl();
		let commands: Vec<_> = matching(ModalState::Closed, chord)
			.map(|binding| binding.command)
			.collect();
		assert_eq!(commands, vec![Command::Open]);

		let mac_chord = KeyInput::new(Key::Char('k')).meta();
		assert_eq!(matching(ModalState::Closed, mac_chord).count(), 1);
		assert_eq!(matching(ModalState::Closed, KeyInput::new(Key::Char('k'))).count(), 0);
		let shifted = KeyInput::new(Key::Char('K')).ctrl().shift();
		assert_eq!(matching(ModalState::Closed, shifted).count(), 0);
	}

	#[test]
	fn escape_reaches_modal_before_document() {
		let scopes: Vec<_> = matching(ModalState::Open, KeyInput::new(Key::Escape))
			.map(|binding| binding.scope)
			.collect();
		assert_eq!(scopes, vec![Scope::Modal, Scope::Document]);
	}

	#[test]
	fn shift_selects_tab_direction() {
		let forward: Vec<_> = matching(ModalState::Open, KeyInput::new(Key::Tab))
			.map(|binding| binding.command)
			.collect();
		let backward: Vec<_> = matching(ModalState::Open, KeyInput::new(Key::Tab).shift())
			.map(|binding| binding.command)
			.collect();
		assert_eq!(forward, vec![Command::FocusNext]);
		assert_eq!(backward, vec![Command::FocusPrevious]);
	}
}
