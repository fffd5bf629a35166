use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};

/// 控制器与其释放器之间共享的信号。
///
/// 由调用方提供存储（通常是 `static`），控制器和 [`Disposer`] 都只持有引用。
pub type DisposeSignal = Signal<CriticalSectionRawMutex, ()>;

/// 释放器：调用 [`Disposer::dispose`] 后，对应的控制器或检测器会在下一次轮询时停止，
/// 清掉所有挂起的定时器并移除监听器。
///
/// 可以重复调用，多次调用与一次调用效果相同。
#[derive(Clone, Copy)]
pub struct Disposer<'a> {
    signal: &'a DisposeSignal,
}

impl<'a> Disposer<'a> {
    pub(crate) fn new(signal: &'a DisposeSignal) -> Self {
        Self { signal }
    }

    pub fn dispose(&self) {
        if !self.signal.signaled() {
            trace!("dispose requested");
        }
        self.signal.signal(());
    }

    pub fn is_disposed(&self) -> bool {
        self.signal.signaled()
    }
}

/// 等待释放信号。`Signal::wait` 返回时会清除信号，这里重新置位，
/// 让 [`Disposer::is_disposed`] 在停止后仍然返回 `true`。
pub(crate) async fn disposed(signal: &DisposeSignal) {
    signal.wait().await;
    signal.signal(());
}
