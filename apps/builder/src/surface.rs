//! In-memory render surface.
//!
//! The form engine's stand-in for the host page: an element tree with
//! stable ids, marker classes, data attributes, and named form controls.
//! The core relies only on the operations exposed here (lookup by id,
//! insertion into a container, detachment, marker-class queries in document
//! order, and control reads/writes). Presentation is the host's business.

use std::collections::BTreeMap;

/// A named input or textarea with its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub name: String,
    pub value: String,
}

/// One element in the render tree.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub data: BTreeMap<String, String>,
    pub control: Option<Control>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: &str) -> Self {
        Element {
            id: Some(id.to_string()),
            ..Default::default()
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn data(mut self, key: &str, value: &str) -> Self {
        self.data.insert(key.to_string(), value.to_string());
        self
    }

    pub fn control(mut self, name: &str, value: &str) -> Self {
        self.control = Some(Control {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// All form controls in this subtree, in document order.
    pub fn controls(&self) -> Vec<&Control> {
        fn walk<'a>(el: &'a Element, out: &mut Vec<&'a Control>) {
            if let Some(control) = &el.control {
                out.push(control);
            }
            for child in &el.children {
                walk(child, out);
            }
        }
        let mut out = Vec::new();
        walk(self, &mut out);
        out
    }
}

/// The rendered page, rooted at the form element.
#[derive(Debug, Clone)]
pub struct Surface {
    root: Element,
}

impl Surface {
    pub fn new(root: Element) -> Self {
        Surface { root }
    }

    /// Locates an element anywhere in the tree by its id.
    pub fn by_id(&self, id: &str) -> Option<&Element> {
        fn find<'a>(el: &'a Element, id: &str) -> Option<&'a Element> {
            if el.id.as_deref() == Some(id) {
                return Some(el);
            }
            el.children.iter().find_map(|c| find(c, id))
        }
        find(&self.root, id)
    }

    pub fn by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        fn find<'a>(el: &'a mut Element, id: &str) -> Option<&'a mut Element> {
            if el.id.as_deref() == Some(id) {
                return Some(el);
            }
            el.children.iter_mut().find_map(|c| find(c, id))
        }
        find(&mut self.root, id)
    }

    /// Appends `element` at the end of the container with id `container_id`.
    /// Returns `false` (and inserts nothing) when the container is missing.
    pub fn append_child(&mut self, container_id: &str, element: Element) -> bool {
        match self.by_id_mut(container_id) {
            Some(container) => {
                container.children.push(element);
                true
            }
            None => false,
        }
    }

    /// Detaches the element with the given id from its parent. Returns
    /// `false` when no such element exists; the root cannot be detached.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        fn remove_in(el: &mut Element, id: &str) -> bool {
            if let Some(pos) = el
                .children
                .iter()
                .position(|c| c.id.as_deref() == Some(id))
            {
                el.children.remove(pos);
                return true;
            }
            el.children.iter_mut().any(|c| remove_in(c, id))
        }
        remove_in(&mut self.root, id)
    }

    /// All elements carrying a marker class, in document order (depth-first,
    /// top to bottom).
    pub fn query_class(&self, class: &str) -> Vec<&Element> {
        fn walk<'a>(el: &'a Element, class: &str, out: &mut Vec<&'a Element>) {
            if el.has_class(class) {
                out.push(el);
            }
            for child in &el.children {
                walk(child, class, out);
            }
        }
        let mut out = Vec::new();
        walk(&self.root, class, &mut out);
        out
    }

    /// The value of the first control with the given name, in document
    /// order. Control names are unique across the form by construction;
    /// first-match lookup is the tie-break if they are not.
    pub fn control_value(&self, name: &str) -> Option<&str> {
        fn find<'a>(el: &'a Element, name: &str) -> Option<&'a str> {
            if let Some(control) = &el.control {
                if control.name == name {
                    return Some(control.value.as_str());
                }
            }
            el.children.iter().find_map(|c| find(c, name))
        }
        find(&self.root, name)
    }

    /// Writes a control value by name. Returns `false` when no control with
    /// that name exists.
    pub fn set_control_value(&mut self, name: &str, value: &str) -> bool {
        fn find<'a>(el: &'a mut Element, name: &str) -> Option<&'a mut Control> {
            if el.control.as_ref().is_some_and(|c| c.name == name) {
                return el.control.as_mut();
            }
            el.children.iter_mut().find_map(|c| find(c, name))
        }
        match find(&mut self.root, name) {
            Some(control) => {
                control.value = value.to_string();
                true
            }
            None => false,
        }
    }
}
