#![no_std]
#![allow(async_fn_in_trait)]

mod fmt;

#[cfg(feature = "ambient")]
pub mod ambient;
pub mod callbacks;
pub mod config;
pub mod dispose;
pub mod dom;
pub mod error;
pub mod event;
pub mod interactive;

pub use callbacks::PressCallbacks;
pub use config::*;
pub use dispose::{DisposeSignal, Disposer};
pub use error::Error;
pub use event::{DomEvent, ElementId, EventKind, Key, PressInput};

use embassy_futures::{
    select::{select, select3, Either, Either3},
    yield_now,
};
use embassy_time::{Instant, Timer};

use crate::dispose::disposed;

/// 一个trait，抽象了按压控制器所监听的目标元素。
///
/// 实现者负责把宿主事件归类为 [`PressInput`]（非激活键应在这里丢弃），
/// 并提供写回按下状态的途径。
pub trait PressTarget {
    /// 等待下一个与按压相关的输入。
    async fn next_input(&mut self) -> PressInput;

    /// 标记或取消目标的按下状态，用于样式和无障碍。
    fn set_pressed(&mut self, pressed: bool);

    /// 移除监听器。控制器停止时恰好调用一次。
    fn detach(&mut self) {}
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PressState {
    Idle,
    /// 延迟定时器挂起中。
    Pressing { start_time: Instant },
    /// 重复定时器挂起中，`next_tick` 是下一次执行动作的时间点。
    LongPress { next_tick: Instant },
}

/// 按压控制器：区分短按和长按，在长按期间按固定周期重复执行动作。
///
/// 通过 [`PressController::new`] 创建后，需要把 [`PressController::run`] 交给执行器运行；
/// 配对的 [`Disposer`] 用来停止它。
pub struct PressController<'a, T: PressTarget> {
    target: T,
    config: PressConfig,
    callbacks: PressCallbacks<'a>,
    dispose: &'a DisposeSignal,
    state: PressState,
    key_down: bool,
}

impl<'a, T: PressTarget> PressController<'a, T> {
    /// 创建控制器及其释放器。
    ///
    /// 每个控制器需要独占一个 `dispose` 信号。
    pub fn new(
        target: T,
        callbacks: PressCallbacks<'a>,
        config: PressConfig,
        dispose: &'a DisposeSignal,
    ) -> (Self, Disposer<'a>) {
        let controller = Self {
            target,
            config,
            callbacks,
            dispose,
            state: PressState::Idle,
            key_down: false,
        };
        (controller, Disposer::new(dispose))
    }

    /// 运行状态机，直到释放器被调用。
    ///
    /// 返回时所有定时器都已丢弃、监听器已移除，目标被交还给调用方。
    pub async fn run(mut self) -> T {
        let dispose = self.dispose;
        loop {
            if dispose.signaled() {
                break;
            }

            match self.state {
                PressState::Idle => {
                    match select(disposed(dispose), self.target.next_input()).await {
                        Either::First(_) => break,
                        Either::Second(input) => self.handle_input(input),
                    }
                }

                PressState::Pressing { start_time } => {
                    // 超大的延迟等同于永不进入长按
                    let long_press_at = start_time
                        .checked_add(self.config.delay)
                        .unwrap_or(Instant::MAX);
                    let delay_timer = Timer::at(long_press_at);
                    match select3(disposed(dispose), self.target.next_input(), delay_timer).await {
                        Either3::First(_) => break,
                        Either3::Second(input) => self.handle_input(input),
                        Either3::Third(_) => {
                            debug!("long press after {:?}", self.config.delay);
                            // 第一次动作就在延迟到期的时刻
                            self.state = PressState::LongPress {
                                next_tick: long_press_at,
                            };
                        }
                    }
                }

                PressState::LongPress { next_tick } => {
                    let repeat_timer = Timer::at(next_tick);
                    match select3(disposed(dispose), self.target.next_input(), repeat_timer).await {
                        Either3::First(_) => break,
                        Either3::Second(input) => self.handle_input(input),
                        Either3::Third(_) => {
                            self.callbacks.action();
                            self.state = PressState::LongPress {
                                next_tick: next_tick
                                    .checked_add(self.config.interval)
                                    .unwrap_or(Instant::MAX),
                            };
                            // 周期为零时定时器总是立即就绪，让出一次以免饿死其他任务
                            yield_now().await;
                        }
                    }
                }
            }
        }

        self.shutdown();
        self.target
    }

    pub fn set_config(&mut self, new_config: PressConfig) {
        self.config = new_config;
    }

    pub fn config(&self) -> PressConfig {
        self.config
    }

    /// 获取目标的不可变引用
    pub fn target(&self) -> &T {
        &self.target
    }

    fn handle_input(&mut self, input: PressInput) {
        match input {
            PressInput::PointerDown => self.start(input.is_pointer()),
            PressInput::KeyDown => {
                if self.key_down {
                    // 按键自动重复
                    return;
                }
                self.key_down = true;
                self.start(input.is_pointer());
            }
            PressInput::PointerUp => self.release(),
            PressInput::KeyUp => {
                self.key_down = false;
                self.release();
            }
            PressInput::PointerLeave | PressInput::PointerCancel => self.cancel(),
        }
    }

    fn start(&mut self, from_pointer: bool) {
        if self.state != PressState::Idle {
            trace!("press already active, ignoring start");
            return;
        }
        trace!("press start");
        self.callbacks.start();
        if from_pointer {
            self.target.set_pressed(true);
        }
        self.state = PressState::Pressing {
            start_time: Instant::now(),
        };
    }

    fn release(&mut self) {
        match self.state {
            PressState::Idle => {}
            PressState::Pressing { .. } => {
                trace!("short press");
                self.state = PressState::Idle;
                self.callbacks.action();
                self.callbacks.finish();
                self.target.set_pressed(false);
            }
            PressState::LongPress { .. } => {
                trace!("long press released");
                self.state = PressState::Idle;
                self.callbacks.finish();
                self.target.set_pressed(false);
            }
        }
    }

    fn cancel(&mut self) {
        let was_long_press = match self.state {
            PressState::Idle => return,
            PressState::Pressing { .. } => false,
            PressState::LongPress { .. } => true,
        };
        trace!("press cancelled");
        self.state = PressState::Idle;
        if was_long_press {
            self.callbacks.finish();
        }
        self.callbacks.cancel();
        self.target.set_pressed(false);
    }

    fn shutdown(&mut self) {
        if self.state != PressState::Idle {
            self.state = PressState::Idle;
            self.target.set_pressed(false);
        }
        self.key_down = false;
        self.target.detach();
        debug!("press controller disposed");
    }
}

/// 等同于 [`PressController::new`]。
pub fn create_long_press_handler<'a, T: PressTarget>(
    target: T,
    callbacks: PressCallbacks<'a>,
    config: PressConfig,
    dispose: &'a DisposeSignal,
) -> (PressController<'a, T>, Disposer<'a>) {
    PressController::new(target, callbacks, config, dispose)
}
