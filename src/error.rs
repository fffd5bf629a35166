use core::fmt;

/// 注册监听器时可能出现的错误。
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// 事件通道的订阅者或发布者名额已用完。
    ListenerLimit,
}

impl From<embassy_sync::pubsub::Error> for Error {
    fn from(_: embassy_sync::pubsub::Error) -> Self {
        // 两种错误都意味着通道容量不足
        Error::ListenerLimit
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ListenerLimit => f.write_str("event channel has no free listener slots"),
        }
    }
}

impl core::error::Error for Error {}
