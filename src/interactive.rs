//! 判断元素是否属于“可交互元素”。
//!
//! 规则是固定的：带 `href` 的链接和热区、按钮、除 `type=hidden` 以外的输入框、
//! 下拉框、文本框、`summary`、带 `controls` 的音视频、`iframe`、
//! 可编辑元素（`contenteditable` 不为 `"false"`）以及带 `tabindex` 的任意元素。
//! 标签名和属性值按 ASCII 忽略大小写比较。

use crate::{dom::Document, event::ElementId};

pub fn is_interactive<D: Document + ?Sized>(document: &D, element: ElementId) -> bool {
    let has = |name: &str| document.attribute(element, name).is_some();
    let tag = document.tag_name(element);

    let by_tag = if tag.eq_ignore_ascii_case("a") || tag.eq_ignore_ascii_case("area") {
        has("href")
    } else if tag.eq_ignore_ascii_case("input") {
        !document
            .attribute(element, "type")
            .is_some_and(|ty| ty.eq_ignore_ascii_case("hidden"))
    } else if tag.eq_ignore_ascii_case("audio") || tag.eq_ignore_ascii_case("video") {
        has("controls")
    } else {
        ["button", "select", "textarea", "summary", "iframe"]
            .iter()
            .any(|name| tag.eq_ignore_ascii_case(name))
    };

    by_tag
        || has("tabindex")
        || document
            .attribute(element, "contenteditable")
            .is_some_and(|value| !value.eq_ignore_ascii_case("false"))
}

/// 从 `element` 开始沿父链向上，返回第一个可交互元素（包括自身）。
pub fn closest_interactive<D: Document + ?Sized>(
    document: &D,
    element: ElementId,
) -> Option<ElementId> {
    let mut current = Some(element);
    while let Some(candidate) = current {
        if is_interactive(document, candidate) {
            return Some(candidate);
        }
        current = document.parent(candidate);
    }
    None
}
