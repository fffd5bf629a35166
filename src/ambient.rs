//! 环境长按检测器。
//!
//! 在文档级别监听指针按下，找到命中的最近可交互元素并为它启动一个一次性计时。
//! 按住满 [`AMBIENT_HOLD_TIME`] 后在该元素上派发 [`LONG_PRESS_EVENT`]，随后停止对它的观察；
//! 之后需要一次新的指针按下才会重新开始检测。提前抬起或离开则静默取消。
//!
//! 这个检测器不会自动安装，必须显式调用 [`AmbientDetector::new`] 并运行。

use embassy_futures::select::{select3, Either3};
use embassy_time::{Instant, Timer};

use crate::{
    config::{AMBIENT_HOLD_TIME, LONG_PRESS_EVENT},
    dispose::{disposed, DisposeSignal, Disposer},
    dom::{Document, DocumentListener, DomEventChannel},
    error::Error,
    event::{DomEvent, ElementId, EventKind},
    interactive::closest_interactive,
};

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AmbientWatch {
    element: ElementId,
    deadline: Instant,
}

/// 文档级的一次性长按检测器。
///
/// `WATCHES` 是同时可观察的元素个数上限，表满时新的按下会被忽略。
pub struct AmbientDetector<
    'a,
    D: Document,
    const WATCHES: usize,
    const MSG_CAP: usize,
    const SUBS: usize,
    const PUBS: usize,
> {
    listener: DocumentListener<'a, MSG_CAP, SUBS, PUBS>,
    document: &'a D,
    dispose: &'a DisposeSignal,
    watches: heapless::Vec<AmbientWatch, WATCHES>,
}

impl<
        'a,
        D: Document,
        const WATCHES: usize,
        const MSG_CAP: usize,
        const SUBS: usize,
        const PUBS: usize,
    > AmbientDetector<'a, D, WATCHES, MSG_CAP, SUBS, PUBS>
{
    /// 在通道上注册文档级监听器，返回检测器及其释放器。
    pub fn new(
        channel: &'a DomEventChannel<MSG_CAP, SUBS, PUBS>,
        document: &'a D,
        dispose: &'a DisposeSignal,
    ) -> Result<(Self, Disposer<'a>), Error> {
        let detector = Self {
            listener: DocumentListener::attach(channel)?,
            document,
            dispose,
            watches: heapless::Vec::new(),
        };
        Ok((detector, Disposer::new(dispose)))
    }

    /// 运行检测循环，直到释放器被调用。停止时丢弃所有未到期的观察，不派发任何事件。
    pub async fn run(mut self) {
        let dispose = self.dispose;
        loop {
            if dispose.signaled() {
                break;
            }

            let next_deadline = self.watches.iter().map(|watch| watch.deadline).min();
            let deadline_timer = async {
                match next_deadline {
                    Some(at) => Timer::at(at).await,
                    None => core::future::pending().await,
                }
            };

            match select3(disposed(dispose), self.listener.next_event(), deadline_timer).await {
                Either3::First(_) => break,
                Either3::Second(event) => self.handle_event(event),
                Either3::Third(_) => self.fire_due(Instant::now()),
            }
        }

        if !self.watches.is_empty() {
            debug!("ambient detector dropped {:?} pending watches", self.watches.len());
        }
        self.watches.clear();
        debug!("ambient detector disposed");
    }

    fn handle_event(&mut self, event: DomEvent) {
        match event.kind {
            EventKind::PointerDown => self.arm(event.target),
            EventKind::PointerUp => {
                if let Some(element) = self.closest_watched(event.target) {
                    trace!("ambient watch released on {:?}", element);
                    self.clear(element);
                }
            }
            EventKind::PointerLeave => {
                if self.is_watching(event.target) {
                    trace!("ambient watch left {:?}", event.target);
                    self.clear(event.target);
                }
            }
            _ => {}
        }
    }

    fn arm(&mut self, target: ElementId) {
        let Some(element) = closest_interactive(self.document, target) else {
            return;
        };
        if self.is_watching(element) {
            return;
        }
        let watch = AmbientWatch {
            element,
            deadline: Instant::now() + AMBIENT_HOLD_TIME,
        };
        if self.watches.push(watch).is_err() {
            warn!("ambient watch table full, ignoring {:?}", element);
            return;
        }
        trace!("ambient watch armed on {:?}", element);
    }

    fn fire_due(&mut self, now: Instant) {
        let document = self.document;
        self.watches.retain(|watch| {
            if watch.deadline > now {
                return true;
            }
            debug!("long press detected on {:?}", watch.element);
            document.dispatch_custom_event(watch.element, LONG_PRESS_EVENT);
            false
        });
    }

    fn is_watching(&self, element: ElementId) -> bool {
        self.watches.iter().any(|watch| watch.element == element)
    }

    fn closest_watched(&self, target: ElementId) -> Option<ElementId> {
        let mut current = Some(target);
        while let Some(element) = current {
            if self.is_watching(element) {
                return Some(element);
            }
            current = self.document.parent(element);
        }
        None
    }

    fn clear(&mut self, element: ElementId) {
        self.watches.retain(|watch| watch.element != element);
    }
}

/// 等同于 [`AmbientDetector::new`]。
pub fn init_ambient_detector<
    'a,
    D: Document,
    const WATCHES: usize,
    const MSG_CAP: usize,
    const SUBS: usize,
    const PUBS: usize,
>(
    channel: &'a DomEventChannel<MSG_CAP, SUBS, PUBS>,
    document: &'a D,
    dispose: &'a DisposeSignal,
) -> Result<(AmbientDetector<'a, D, WATCHES, MSG_CAP, SUBS, PUBS>, Disposer<'a>), Error> {
    AmbientDetector::new(channel, document, dispose)
}
