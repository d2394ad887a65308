/// Smallest change to `offset` that brings `index` inside a viewport of
/// `visible` items. Leaves the offset alone when the item is already shown.
pub(crate) fn nearest_offset(offset: usize, index: usize, visible: usize) -> usize {
	if visible == 0 {
		return index;
	}
	if index < offset {
		index
	} else if index >= offset + visible {
		index + 1 - visible
	} else {
		offset
	}
}
