/// Click-driven fingerprint scan animation.
///
/// A tiny tween engine: each `Tween` animates one property of one `Part`
/// from whatever value it holds when the tween starts toward a target.
/// `Scanner` appends tweens on each click and is sampled every frame.
use log::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power1Out,
    Power3Out,
}

impl Ease {
    /// Map linear progress in [0, 1] to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part {
    /// Fingerprint ridges revealed over the attempts.
    Cover,
    /// Faint fingerprint underneath the cover.
    Base,
    Smile,
    Head,
    LeftEye,
    RightEye,
    Tooltip,
    Message,
}

impl Part {
    pub const COUNT: usize = 8;

    fn index(self) -> usize {
        self as usize
    }
}

/// Animated value of one property.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    /// Visible stroke segment as (start %, end %) of the path length.
    Draw(f32, f32),
    Opacity(f32),
    OffsetY(f32),
}

impl Value {
    fn lerp(self, to: Value, t: f32) -> Value {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        match (self, to) {
            (Value::Draw(s0, e0), Value::Draw(s1, e1)) => Value::Draw(mix(s0, s1), mix(e0, e1)),
            (Value::Opacity(a), Value::Opacity(b)) => Value::Opacity(mix(a, b)),
            (Value::OffsetY(a), Value::OffsetY(b)) => Value::OffsetY(mix(a, b)),
            _ => to,
        }
    }
}

/// Rendered state of a single part.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartView {
    pub draw: (f32, f32),
    pub opacity: f32,
    pub offset_y: f32,
}

impl PartView {
    const HIDDEN_STROKE: PartView = PartView {
        draw: (0.0, 0.0),
        opacity: 1.0,
        offset_y: 0.0,
    };

    fn get(&self, like: Value) -> Value {
        match like {
            Value::Draw(..) => Value::Draw(self.draw.0, self.draw.1),
            Value::Opacity(_) => Value::Opacity(self.opacity),
            Value::OffsetY(_) => Value::OffsetY(self.offset_y),
        }
    }

    fn set(&mut self, value: Value) {
        match value {
            Value::Draw(s, e) => self.draw = (s, e),
            Value::Opacity(o) => self.opacity = o,
            Value::OffsetY(y) => self.offset_y = y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanView {
    pub parts: [PartView; Part::COUNT],
    /// Page background switches to the light "unlocked" colour.
    pub light_background: bool,
}

impl ScanView {
    pub fn part(&self, part: Part) -> &PartView {
        &self.parts[part.index()]
    }

    fn part_mut(&mut self, part: Part) -> &mut PartView {
        &mut self.parts[part.index()]
    }
}

impl Default for ScanView {
    /// Nothing drawn except the base print and the tooltip.
    fn default() -> Self {
        let mut view = ScanView {
            parts: [PartView::HIDDEN_STROKE; Part::COUNT],
            light_background: false,
        };
        view.part_mut(Part::Base).draw = (0.0, 100.0);
        view.part_mut(Part::Tooltip).draw = (0.0, 100.0);
        view.part_mut(Part::Message).draw = (0.0, 100.0);
        view.part_mut(Part::Message).opacity = 0.0;
        view
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub part: Part,
    pub to: Value,
    /// Absolute start on the scanner clock, in seconds.
    pub start: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl Tween {
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }
}

/// Tweens ordered by start time.  Sampling replays every started tween over
/// the base view, so each picks up where earlier ones left the property.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    tweens: Vec<Tween>,
}

impl Timeline {
    pub fn push(&mut self, tween: Tween) {
        let at = self.tweens.partition_point(|t| t.start <= tween.start);
        self.tweens.insert(at, tween);
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Clock time at which every tween has finished.
    pub fn end(&self) -> f32 {
        self.tweens.iter().map(Tween::end).fold(0.0, f32::max)
    }

    pub fn sample(&self, t: f32, view: &mut ScanView) {
        for tween in self.tweens.iter().filter(|tw| tw.start <= t) {
            let part = view.part_mut(tween.part);
            let from = part.get(tween.to);
            let progress = if tween.duration <= 0.0 {
                1.0
            } else {
                (t - tween.start) / tween.duration
            };
            part.set(from.lerp(tween.to, tween.ease.apply(progress)));
        }
    }
}

// ── Scanner ──────────────────────────────────────────────────────────────────

pub const MAX_ATTEMPTS: u8 = 3;

/// Cover progress reached after each of the three clicks.
const ATTEMPT_COVER: [f32; MAX_ATTEMPTS as usize] = [50.0, 80.0, 100.0];

#[derive(Clone, Debug, Default)]
pub struct Scanner {
    attempts: u8,
    clock: f32,
    timeline: Timeline,
    light_at: Option<f32>,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn is_complete(&self) -> bool {
        self.attempts >= MAX_ATTEMPTS
    }

    /// True once every queued tween has run to its end.
    pub fn is_settled(&self) -> bool {
        self.clock >= self.timeline.end()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn advance(&mut self, dt: f32) {
        self.clock += dt.max(0.0);
    }

    /// Register one click on the print.  Returns `false` once complete.
    pub fn click(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }

        let now = self.clock;
        let cover = ATTEMPT_COVER[self.attempts as usize];
        self.timeline.push(Tween {
            part: Part::Cover,
            to: Value::Draw(0.0, cover),
            start: now,
            duration: 1.0,
            ease: Ease::Power1Out,
        });
        self.attempts += 1;
        info!("scan attempt {} ({}%)", self.attempts, cover);

        if self.is_complete() {
            self.queue_completion(now);
        }
        true
    }

    fn queue_completion(&mut self, at: f32) {
        use Part::*;

        let mut tween = |part: Part, to: Value, offset: f32, duration: f32| {
            self.timeline.push(Tween {
                part,
                to,
                start: at + offset,
                duration,
                ease: Ease::Power3Out,
            });
        };

        tween(Cover, Value::Draw(102.0, 102.0), 1.0, 1.5);
        tween(Base, Value::Opacity(0.0), 1.0, 0.5);
        tween(Smile, Value::Draw(45.0, 55.0), 1.0, 1.0);
        for part in [Head, LeftEye, RightEye] {
            tween(part, Value::Draw(0.0, 100.0), 1.25, 1.5);
        }
        tween(Cover, Value::Opacity(0.0), 1.7, 0.5);
        tween(Base, Value::Opacity(0.0), 1.7, 0.5);
        for part in [LeftEye, RightEye, Smile] {
            tween(part, Value::OffsetY(-12.0), 2.5, 0.5);
        }
        tween(Tooltip, Value::OffsetY(-12.0), 2.5, 0.5);
        tween(Tooltip, Value::Opacity(0.0), 2.5, 0.5);
        tween(Message, Value::OffsetY(-12.0), 2.5, 0.5);
        tween(Message, Value::Opacity(1.0), 2.5, 0.5);
        for part in [LeftEye, RightEye, Smile] {
            tween(part, Value::OffsetY(0.0), 4.0, 1.5);
        }

        self.light_at = Some(at);
        info!("scan complete");
    }

    pub fn view(&self) -> ScanView {
        let mut view = ScanView::default();
        self.timeline.sample(self.clock, &mut view);
        view.light_background = self.light_at.is_some_and(|at| self.clock >= at);
        view
    }
}
