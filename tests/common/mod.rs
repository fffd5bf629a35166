#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use embassy_long_press::{dom::Document, ElementId};

// --- Mock DOM (模拟文档) ---

pub struct MockNode {
    pub tag: &'static str,
    pub parent: Option<u32>,
    pub attrs: Vec<(&'static str, &'static str)>,
}

pub fn node(
    tag: &'static str,
    parent: Option<u32>,
    attrs: &[(&'static str, &'static str)],
) -> MockNode {
    MockNode {
        tag,
        parent,
        attrs: attrs.to_vec(),
    }
}

/// 结构固定的模拟文档，属性写入和自定义事件都只做记录。
pub struct MockDocument {
    nodes: Vec<MockNode>,
    pub attribute_writes: RefCell<Vec<(ElementId, String, String)>>,
    pub dispatched: RefCell<Vec<(ElementId, &'static str)>>,
}

impl MockDocument {
    pub fn new(nodes: Vec<MockNode>) -> Self {
        Self {
            nodes,
            attribute_writes: RefCell::new(Vec::new()),
            dispatched: RefCell::new(Vec::new()),
        }
    }

    /// body(0) > button(1) > span(2)；body > div(3)；body > a[href](4)
    pub fn sample() -> Self {
        Self::new(vec![
            node("body", None, &[]),
            node("button", Some(0), &[]),
            node("span", Some(1), &[]),
            node("div", Some(0), &[]),
            node("a", Some(0), &[("href", "#next")]),
        ])
    }

    pub fn dispatched_to(&self, element: ElementId) -> usize {
        self.dispatched
            .borrow()
            .iter()
            .filter(|(target, _)| *target == element)
            .count()
    }

    pub fn pressed_values(&self, element: ElementId) -> Vec<String> {
        self.attribute_writes
            .borrow()
            .iter()
            .filter(|(target, _, _)| *target == element)
            .map(|(_, _, value)| value.clone())
            .collect()
    }
}

impl Document for MockDocument {
    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.nodes[element.0 as usize].parent.map(ElementId)
    }

    fn tag_name(&self, element: ElementId) -> &str {
        self.nodes[element.0 as usize].tag
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<&str> {
        self.nodes[element.0 as usize]
            .attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    fn set_attribute(&self, element: ElementId, name: &str, value: &str) {
        self.attribute_writes
            .borrow_mut()
            .push((element, name.to_string(), value.to_string()));
    }

    fn dispatch_custom_event(&self, element: ElementId, name: &'static str) {
        self.dispatched.borrow_mut().push((element, name));
    }
}

// --- 回调计数 ---

#[derive(Default)]
pub struct Counts {
    pub action: Cell<u32>,
    pub start: Cell<u32>,
    pub finish: Cell<u32>,
    pub cancel: Cell<u32>,
}

pub fn bump(cell: &Cell<u32>) -> impl FnMut() + '_ {
    move || cell.set(cell.get() + 1)
}
