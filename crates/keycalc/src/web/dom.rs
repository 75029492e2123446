//! Mock DOM for the calculator page
//!
//! Just enough of a document to host the two readouts, the keypad buttons
//! and their attributes, and to record the events a page would receive.

use std::collections::HashMap;

/// Represents a DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Sets an attribute value
    pub fn set_attr(&mut self, key: &str, value: &str) {
        self.attributes.insert(key.to_string(), value.to_string());
    }

    /// Adds a class
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Events the page listens for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Key pressed anywhere on the page
    KeyDown {
        /// The `KeyboardEvent.key` value, e.g. `"7"` or `"Enter"`
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a key-down event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// Most recent events kept by [`MockDom::record_event`]
pub const EVENT_HISTORY_LIMIT: usize = 64;

/// Flat registry of page elements keyed by ID
#[derive(Debug, Default)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an element for ID lookup; elements without an ID are dropped
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Number of registered elements
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Records an event, dropping the oldest once [`EVENT_HISTORY_LIMIT`] is reached
    pub fn record_event(&mut self, event: DomEvent) {
        if self.event_history.len() >= EVENT_HISTORY_LIMIT {
            self.event_history.remove(0);
        }
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Sets an attribute on an element by ID
    pub fn set_element_attr(&mut self, id: &str, key: &str, value: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_attr(key, value);
        }
    }

    /// Adds a class to an element by ID
    pub fn add_element_class(&mut self, id: &str, class: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.add_class(class);
        }
    }

    /// Removes a class from an element by ID
    pub fn remove_element_class(&mut self, id: &str, class: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.remove_class(class);
        }
    }

    /// IDs of all elements carrying `class`, sorted
    #[must_use]
    pub fn ids_with_class(&self, class: &str) -> Vec<String> {
        let mut ids: Vec<String> = self
            .elements
            .values()
            .filter(|e| e.has_class(class))
            .map(|e| e.id.clone())
            .collect();
        ids.sort();
        ids
    }
}
