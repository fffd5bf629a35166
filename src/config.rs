use embassy_time::Duration;

/// 长按后重复触发动作的默认周期。
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(75);

/// 从按下到进入长按的默认延迟。
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// 环境长按检测器使用的固定按住时长，与 [`DEFAULT_DELAY`] 相同。
pub const AMBIENT_HOLD_TIME: Duration = DEFAULT_DELAY;

/// 按压期间写到目标元素上的属性名，值为 `"true"` 或 `"false"`。
pub const PRESSED_ATTRIBUTE: &str = "data-pressed";

/// 环境检测器在元素上派发的自定义事件名。
pub const LONG_PRESS_EVENT: &str = "long-press";

/// 按压控制器的时间参数。
///
/// 数值原样交给定时器，不做校验：零周期意味着每次轮询都会立即触发下一次动作。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressConfig {
    /// 进入长按后，相邻两次动作之间的间隔。
    pub interval: Duration,

    /// 按下后需要持续多久才进入长按。
    ///
    /// 在此之前松开视为短按，动作只在松开时执行一次。
    pub delay: Duration,
}

impl PressConfig {
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for PressConfig {
    /// - 重复周期: 75ms
    /// - 长按延迟: 1000ms
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            delay: DEFAULT_DELAY,
        }
    }
}
