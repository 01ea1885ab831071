// Shared mock element for host-side tests.

#![allow(dead_code)]
use ambient_core::LayoutElement;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct Inner {
    id: RefCell<String>,
    children: Cell<u32>,
    size: Cell<(f64, f64)>,
    classes: RefCell<Vec<String>>,
}

/// Element handle with identity equality, like a DOM node reference.
#[derive(Clone)]
pub struct MockElement(Rc<Inner>);

impl MockElement {
    pub fn new(id: &str, children: u32, width: f64, height: f64) -> Self {
        Self(Rc::new(Inner {
            id: RefCell::new(id.to_string()),
            children: Cell::new(children),
            size: Cell::new((width, height)),
            classes: RefCell::new(Vec::new()),
        }))
    }

    pub fn anonymous(children: u32, width: f64, height: f64) -> Self {
        Self::new("", children, width, height)
    }

    pub fn set_children(&self, n: u32) {
        self.0.children.set(n);
    }

    pub fn set_size(&self, width: f64, height: f64) {
        self.0.size.set((width, height));
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.classes.borrow().clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().iter().any(|c| c == class)
    }
}

impl PartialEq for MockElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for MockElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockElement({:?})", self.0.id.borrow())
    }
}

impl LayoutElement for MockElement {
    fn dom_id(&self) -> Option<String> {
        let id = self.0.id.borrow();
        (!id.is_empty()).then(|| id.clone())
    }

    fn child_count(&self) -> u32 {
        self.0.children.get()
    }

    fn client_size(&self) -> (f64, f64) {
        self.0.size.get()
    }

    fn add_class(&self, class: &str) {
        let mut classes = self.0.classes.borrow_mut();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.classes.borrow_mut().retain(|c| c != class);
    }
}
