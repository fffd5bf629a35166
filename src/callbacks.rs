/// 一次按压过程中会被调用的回调。
///
/// `action` 必须提供；其余三个可选，缺省时直接跳过，不算错误。
/// 回调以可变引用的方式借入，因此不需要分配器。
pub struct PressCallbacks<'a> {
    action: &'a mut dyn FnMut(),
    on_start: Option<&'a mut dyn FnMut()>,
    on_finish: Option<&'a mut dyn FnMut()>,
    on_cancel: Option<&'a mut dyn FnMut()>,
}

impl<'a> PressCallbacks<'a> {
    pub fn new(action: &'a mut dyn FnMut()) -> Self {
        Self {
            action,
            on_start: None,
            on_finish: None,
            on_cancel: None,
        }
    }

    /// 按压开始时调用一次。
    pub fn on_start(mut self, callback: &'a mut dyn FnMut()) -> Self {
        self.on_start = Some(callback);
        self
    }

    /// 按压正常结束时调用一次；长按期间被取消也会调用。
    pub fn on_finish(mut self, callback: &'a mut dyn FnMut()) -> Self {
        self.on_finish = Some(callback);
        self
    }

    /// 指针离开或被取消时调用一次。
    pub fn on_cancel(mut self, callback: &'a mut dyn FnMut()) -> Self {
        self.on_cancel = Some(callback);
        self
    }

    pub(crate) fn action(&mut self) {
        (self.action)();
    }

    pub(crate) fn start(&mut self) {
        if let Some(callback) = self.on_start.as_mut() {
            callback();
        }
    }

    pub(crate) fn finish(&mut self) {
        if let Some(callback) = self.on_finish.as_mut() {
            callback();
        }
    }

    pub(crate) fn cancel(&mut self) {
        if let Some(callback) = self.on_cancel.as_mut() {
            callback();
        }
    }
}
