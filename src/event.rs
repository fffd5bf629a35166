/// 宿主文档中某个元素的不透明标识。
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

/// 键盘事件携带的按键。
///
/// 只有 `Enter` 与 `Space` 是激活键，其余按键统一归入 `Other`。
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Other,
}

impl Key {
    /// 该按键能否像指针按下一样触发按压。
    pub fn is_activation(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// 宿主派发的原始输入事件类型。
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    PointerDown,
    PointerUp,
    PointerLeave,
    PointerCancel,
    KeyDown(Key),
    KeyUp(Key),
}

/// 一次输入事件：发生在哪个元素上，是什么事件。
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomEvent {
    pub target: ElementId,
    pub kind: EventKind,
}

impl DomEvent {
    pub fn new(target: ElementId, kind: EventKind) -> Self {
        Self { target, kind }
    }
}

/// 按压状态机实际消费的输入。
///
/// 在监听器边界上由 [`PressInput::from_event`] 一次性归类，
/// 非激活键在这里就被丢弃，状态机内部不再检查事件来源。
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressInput {
    PointerDown,
    PointerUp,
    PointerLeave,
    PointerCancel,
    /// 激活键按下（Enter 或 Space）。
    KeyDown,
    /// 激活键抬起。
    KeyUp,
}

impl PressInput {
    pub fn from_event(kind: EventKind) -> Option<Self> {
        match kind {
            EventKind::PointerDown => Some(PressInput::PointerDown),
            EventKind::PointerUp => Some(PressInput::PointerUp),
            EventKind::PointerLeave => Some(PressInput::PointerLeave),
            EventKind::PointerCancel => Some(PressInput::PointerCancel),
            EventKind::KeyDown(key) if key.is_activation() => Some(PressInput::KeyDown),
            EventKind::KeyUp(key) if key.is_activation() => Some(PressInput::KeyUp),
            EventKind::KeyDown(_) | EventKind::KeyUp(_) => None,
        }
    }

    pub fn is_pointer(self) -> bool {
        !matches!(self, PressInput::KeyDown | PressInput::KeyUp)
    }
}
