use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    pubsub::{PubSubChannel, Publisher, Subscriber},
};

use crate::{
    config::PRESSED_ATTRIBUTE,
    error::Error,
    event::{DomEvent, ElementId, PressInput},
    PressTarget,
};

/// 宿主文档的抽象：树结构、属性读写以及自定义事件派发。
///
/// 方法都接收 `&self`，需要修改状态的实现应自行使用内部可变性。
pub trait Document {
    /// 父元素，根元素返回 `None`。
    fn parent(&self, element: ElementId) -> Option<ElementId>;

    fn tag_name(&self, element: ElementId) -> &str;

    fn attribute(&self, element: ElementId, name: &str) -> Option<&str>;

    fn set_attribute(&self, element: ElementId, name: &str, value: &str);

    /// 在元素上派发一个不带负载的自定义事件。
    fn dispatch_custom_event(&self, element: ElementId, name: &'static str);
}

/// 宿主向其中派发所有输入事件的广播通道。
pub type DomEventChannel<const MSG_CAP: usize, const SUBS: usize, const PUBS: usize> =
    PubSubChannel<CriticalSectionRawMutex, DomEvent, MSG_CAP, SUBS, PUBS>;
pub type DomEventSubscriber<'a, const MSG_CAP: usize, const SUBS: usize, const PUBS: usize> =
    Subscriber<'a, CriticalSectionRawMutex, DomEvent, MSG_CAP, SUBS, PUBS>;
type DomEventPublisher<'a, const MSG_CAP: usize, const SUBS: usize, const PUBS: usize> =
    Publisher<'a, CriticalSectionRawMutex, DomEvent, MSG_CAP, SUBS, PUBS>;

/// 宿主一侧的事件入口，占用通道的一个发布者名额。
pub struct EventDispatcher<'a, const MSG_CAP: usize, const SUBS: usize, const PUBS: usize> {
    publisher: DomEventPublisher<'a, MSG_CAP, SUBS, PUBS>,
}

impl<'a, const MSG_CAP: usize, const SUBS: usize, const PUBS: usize>
    EventDispatcher<'a, MSG_CAP, SUBS, PUBS>
{
    pub fn new(channel: &'a DomEventChannel<MSG_CAP, SUBS, PUBS>) -> Result<Self, Error> {
        Ok(Self {
            publisher: channel.publisher()?,
        })
    }

    /// 派发一个事件。队列已满时等待所有监听器取走最旧的消息。
    pub async fn dispatch(&self, event: DomEvent) {
        self.publisher.publish(event).await;
    }

    /// 立即派发，队列已满时丢弃最旧的消息。
    pub fn dispatch_immediate(&self, event: DomEvent) {
        self.publisher.publish_immediate(event);
    }
}

/// 挂在单个元素上的监听器，只接收目标为该元素的事件。
///
/// 它实现了 [`PressTarget`]，可以直接交给 [`crate::PressController`]。
/// 按下状态通过 [`PRESSED_ATTRIBUTE`] 属性写回文档。
pub struct ElementListener<
    'a,
    D: Document,
    const MSG_CAP: usize,
    const SUBS: usize,
    const PUBS: usize,
> {
    subscriber: Option<DomEventSubscriber<'a, MSG_CAP, SUBS, PUBS>>,
    document: &'a D,
    target: ElementId,
}

impl<'a, D: Document, const MSG_CAP: usize, const SUBS: usize, const PUBS: usize>
    ElementListener<'a, D, MSG_CAP, SUBS, PUBS>
{
    /// 在通道上注册一个监听器。通道的订阅者名额用完时返回 [`Error::ListenerLimit`]。
    pub fn attach(
        channel: &'a DomEventChannel<MSG_CAP, SUBS, PUBS>,
        document: &'a D,
        target: ElementId,
    ) -> Result<Self, Error> {
        Ok(Self {
            subscriber: Some(channel.subscriber()?),
            document,
            target,
        })
    }

    pub fn target(&self) -> ElementId {
        self.target
    }

    pub fn is_attached(&self) -> bool {
        self.subscriber.is_some()
    }
}

impl<D: Document, const MSG_CAP: usize, const SUBS: usize, const PUBS: usize> PressTarget
    for ElementListener<'_, D, MSG_CAP, SUBS, PUBS>
{
    async fn next_input(&mut self) -> PressInput {
        let Some(subscriber) = self.subscriber.as_mut() else {
            // 已经移除的监听器不会再收到任何事件
            return core::future::pending().await;
        };
        loop {
            let event = subscriber.next_message_pure().await;
            if event.target != self.target {
                continue;
            }
            if let Some(input) = PressInput::from_event(event.kind) {
                return input;
            }
        }
    }

    fn set_pressed(&mut self, pressed: bool) {
        let value = if pressed { "true" } else { "false" };
        self.document.set_attribute(self.target, PRESSED_ATTRIBUTE, value);
    }

    fn detach(&mut self) {
        if self.subscriber.take().is_some() {
            trace!("listener removed from {:?}", self.target);
        }
    }
}

/// 文档级监听器，接收通道上的全部事件。
pub struct DocumentListener<'a, const MSG_CAP: usize, const SUBS: usize, const PUBS: usize> {
    subscriber: DomEventSubscriber<'a, MSG_CAP, SUBS, PUBS>,
}

impl<'a, const MSG_CAP: usize, const SUBS: usize, const PUBS: usize>
    DocumentListener<'a, MSG_CAP, SUBS, PUBS>
{
    pub fn attach(channel: &'a DomEventChannel<MSG_CAP, SUBS, PUBS>) -> Result<Self, Error> {
        Ok(Self {
            subscriber: channel.subscriber()?,
        })
    }

    pub async fn next_event(&mut self) -> DomEvent {
        self.subscriber.next_message_pure().await
    }
}
