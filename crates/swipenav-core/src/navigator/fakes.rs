//! Recording host fakes shared by the navigator tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use swipenav_common::{MediaError, PanelCoord, Side, Translation, ViewportSize};

use crate::host::{
    IndicatorSurface, MediaHandle, Result, TimerHandle, TransitionScheduler, ViewportSurface,
};
use crate::transition::TransitionTicket;

use super::{NavSettings, Navigator};

#[derive(Debug)]
pub struct ViewportLog {
    pub size: ViewportSize,
    pub translations: Vec<Translation>,
    pub animating: bool,
}

pub struct FakeViewport(pub Rc<RefCell<ViewportLog>>);

impl ViewportSurface for FakeViewport {
    fn size(&self) -> ViewportSize {
        self.0.borrow().size
    }
    fn apply_translation(&mut self, translation: Translation) {
        self.0.borrow_mut().translations.push(translation);
    }
    fn set_animating(&mut self, animating: bool) {
        self.0.borrow_mut().animating = animating;
    }
}

pub struct FakeIndicators(pub Rc<RefCell<HashMap<Side, bool>>>);

impl IndicatorSurface for FakeIndicators {
    fn set_available(&mut self, side: Side, available: bool) {
        self.0.borrow_mut().insert(side, available);
    }
}

pub struct Scheduled {
    pub delay: Duration,
    pub ticket: TransitionTicket,
    pub cancelled: Rc<Cell<bool>>,
}

pub struct FakeScheduler(pub Rc<RefCell<Vec<Scheduled>>>);

struct FakeTimer(Rc<Cell<bool>>);

impl TimerHandle for FakeTimer {
    fn cancel(self: Box<Self>) {
        self.0.set(true);
    }
}

impl TransitionScheduler for FakeScheduler {
    fn schedule(&mut self, delay: Duration, ticket: TransitionTicket) -> Box<dyn TimerHandle> {
        let cancelled = Rc::new(Cell::new(false));
        self.0.borrow_mut().push(Scheduled {
            delay,
            ticket,
            cancelled: cancelled.clone(),
        });
        Box::new(FakeTimer(cancelled))
    }
}

#[derive(Debug)]
pub struct VideoState {
    pub paused: bool,
    pub muted: bool,
    pub refuse: bool,
}

#[derive(Clone)]
pub struct FakeVideo(pub Rc<RefCell<VideoState>>);

impl FakeVideo {
    pub fn new() -> Self {
        FakeVideo(Rc::new(RefCell::new(VideoState {
            paused: true,
            muted: false,
            refuse: false,
        })))
    }

    pub fn playing(&self) -> bool {
        !self.0.borrow().paused
    }
}

impl MediaHandle for FakeVideo {
    fn play(&mut self) -> Result<()> {
        let mut v = self.0.borrow_mut();
        if v.refuse {
            return Err(MediaError::PlaybackRejected("NotAllowedError".into()));
        }
        v.paused = false;
        Ok(())
    }
    fn pause(&mut self) {
        self.0.borrow_mut().paused = true;
    }
    fn is_paused(&self) -> bool {
        self.0.borrow().paused
    }
    fn set_muted(&mut self, muted: bool) {
        self.0.borrow_mut().muted = muted;
    }
}

/// A started navigator on the default grid with the three stock videos
/// bound, plus handles to everything it drives.
pub struct Harness {
    pub nav: Navigator,
    pub viewport: Rc<RefCell<ViewportLog>>,
    pub indicators: Rc<RefCell<HashMap<Side, bool>>>,
    pub scheduled: Rc<RefCell<Vec<Scheduled>>>,
    /// In binding order: (0,1), (0,2), (0,-1).
    pub videos: Vec<FakeVideo>,
}

impl Harness {
    pub fn new() -> Self {
        let viewport = Rc::new(RefCell::new(ViewportLog {
            size: ViewportSize::new(390.0, 844.0),
            translations: Vec::new(),
            animating: false,
        }));
        let indicators = Rc::new(RefCell::new(HashMap::new()));
        let scheduled = Rc::new(RefCell::new(Vec::new()));

        let mut nav = Navigator::new(
            NavSettings::default(),
            Box::new(FakeViewport(viewport.clone())),
            Box::new(FakeIndicators(indicators.clone())),
            Box::new(FakeScheduler(scheduled.clone())),
        );

        let panels = [
            PanelCoord::new(0, 1),
            PanelCoord::new(0, 2),
            PanelCoord::new(0, -1),
        ];
        let mut videos = Vec::new();
        for (index, panel) in panels.into_iter().enumerate() {
            let video = FakeVideo::new();
            nav.bind_media(index, panel, Box::new(video.clone()), true);
            videos.push(video);
        }
        nav.start();

        Self {
            nav,
            viewport,
            indicators,
            scheduled,
            videos,
        }
    }

    /// Fire the most recently scheduled completion.
    pub fn fire(&mut self) -> bool {
        let ticket = self
            .scheduled
            .borrow()
            .last()
            .map(|s| s.ticket)
            .expect("nothing scheduled");
        self.nav.complete_transition(ticket)
    }

    pub fn last_translation(&self) -> Option<Translation> {
        self.viewport.borrow().translations.last().copied()
    }

    pub fn indicator(&self, side: Side) -> Option<bool> {
        self.indicators.borrow().get(&side).copied()
    }
}
