//! The display surface a conversation is rendered to.

use askbox_model::Role;

/// Identifies an element appended to a [`Surface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Wraps a raw identifier. Surfaces choose their own numbering.
    #[inline]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// What a rendered element stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Mirrors a message in the transcript.
    Message,
    /// Placeholder shown while waiting for an answer.
    Loading,
    /// One-off failure notice, never part of the transcript.
    Error,
    /// Notice shown after the conversation has been reset.
    Notice,
}

impl EntryKind {
    /// Returns `true` if the element has no counterpart in the transcript.
    #[inline]
    pub fn is_transient(self) -> bool {
        matches!(self, EntryKind::Loading | EntryKind::Error)
    }
}

/// An element to be appended to a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Entry<'a> {
    /// What this element stands for.
    pub kind: EntryKind,
    /// The role the element is attributed to.
    pub role: Role,
    /// The text to display.
    pub content: &'a str,
}

impl Entry<'_> {
    /// Returns the role-based class name, e.g. `message assistant`.
    #[inline]
    pub fn class_name(&self) -> String {
        format!("message {}", self.role)
    }
}

/// A scrollable panel plus an input control.
///
/// The controller is the only writer. Implementations decide how entries
/// look, but must keep them in append order.
pub trait Surface: Send {
    /// Appends an element at the end of the panel.
    fn append(&mut self, entry: Entry<'_>) -> NodeId;

    /// Removes a previously appended element. Unknown ids are ignored.
    fn remove(&mut self, node: NodeId);

    /// Removes every element.
    fn clear(&mut self);

    /// Empties the input control.
    fn clear_input(&mut self);

    /// Scrolls the panel so that the last element is visible.
    fn scroll_to_end(&mut self) {}
}

/// An element kept by [`MemorySurface`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RenderedEntry {
    /// The id returned when the element was appended.
    pub id: NodeId,
    /// What this element stands for.
    pub kind: EntryKind,
    /// The role the element is attributed to.
    pub role: Role,
    /// The displayed text.
    pub content: String,
}

/// A change applied to a [`MemorySurface`], in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceEvent {
    /// An element was appended.
    Appended(RenderedEntry),
    /// An element was removed.
    Removed(NodeId),
    /// All elements were removed.
    Cleared,
    /// The input control was emptied.
    InputCleared,
}

/// A surface that keeps its elements in memory.
///
/// Useful for hosts that draw the conversation themselves. Only the shown
/// elements are kept, which the transcript cap bounds. A surface created
/// with [`MemorySurface::recording`] additionally keeps every change in
/// [`MemorySurface::events`], which grows for as long as the surface lives
/// and is meant for tests.
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    entries: Vec<RenderedEntry>,
    events: Option<Vec<SurfaceEvent>>,
    next_id: u64,
    scrolled_to: Option<NodeId>,
}

impl MemorySurface {
    /// Creates an empty surface that does not record changes.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty surface that records every change.
    #[inline]
    pub fn recording() -> Self {
        Self {
            events: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// Returns the elements currently shown, in display order.
    #[inline]
    pub fn entries(&self) -> &[RenderedEntry] {
        &self.entries
    }

    /// Returns every change applied so far, or nothing if the surface was
    /// not created with [`MemorySurface::recording`].
    #[inline]
    pub fn events(&self) -> &[SurfaceEvent] {
        self.events.as_deref().unwrap_or_default()
    }

    fn record(&mut self, event: SurfaceEvent) {
        if let Some(events) = &mut self.events {
            events.push(event);
        }
    }

    /// Returns the element the panel was last scrolled to, if it is still
    /// shown.
    pub fn scrolled_to(&self) -> Option<&RenderedEntry> {
        let id = self.scrolled_to?;
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Returns `(role, content)` pairs of the shown elements.
    pub fn contents(&self) -> Vec<(Role, &str)> {
        self.entries
            .iter()
            .map(|entry| (entry.role, entry.content.as_str()))
            .collect()
    }
}

impl Surface for MemorySurface {
    fn append(&mut self, entry: Entry<'_>) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;

        let rendered = RenderedEntry {
            id,
            kind: entry.kind,
            role: entry.role,
            content: entry.content.to_owned(),
        };
        if self.events.is_some() {
            self.record(SurfaceEvent::Appended(rendered.clone()));
        }
        self.entries.push(rendered);
        id
    }

    fn remove(&mut self, node: NodeId) {
        let Some(idx) = self.entries.iter().position(|e| e.id == node) else {
            return;
        };
        self.entries.remove(idx);
        self.record(SurfaceEvent::Removed(node));
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.record(SurfaceEvent::Cleared);
    }

    fn clear_input(&mut self) {
        self.record(SurfaceEvent::InputCleared);
    }

    fn scroll_to_end(&mut self) {
        self.scrolled_to = self.entries.last().map(|entry| entry.id);
    }
}
