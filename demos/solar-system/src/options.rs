/// Option panel state: lighting mode, orbit guides and animation speed.
///
/// The panel itself lives in the page. Each control posts
/// `game_set_option(kind, value)`; the current state goes back to the page
/// as a `GameEvent` every tick so the controls never drift from the model.

use orrery_engine::{GameEvent, LightState, NodeId, QueryParams, Scene};

// ── Custom event kinds from the page ─────────────────────────────────

pub const OPTION_REAL_VIEW: u32 = 1;
pub const OPTION_SHOW_PATH: u32 = 2;
pub const OPTION_SPEED: u32 = 3;

// ── Game event kinds to the page ─────────────────────────────────────

/// a = real view (0/1), b = show path (0/1), c = speed.
pub const EVENT_VIEW_STATE: f32 = 1.0;
/// a = slider maximum.
pub const EVENT_SPEED_RANGE: f32 = 2.0;

/// Slider maximum when `ms` is missing or unusable.
pub const DEFAULT_MAX_SPEED: f32 = 20.0;

/// Ambient fill when realistic lighting is off.
pub const SCHEMATIC_AMBIENT: f32 = 0.5;

/// Query parameter carrying the slider maximum.
pub const MAX_SPEED_PARAM: &str = "ms";

/// Slider maximum from the page query: a positive finite `ms`, else 20.
pub fn parse_max_speed(query: &QueryParams) -> f32 {
    match query.get_f32(MAX_SPEED_PARAM) {
        // A negative bound would leave the slider with no range at all
        Some(ms) if ms.is_finite() && ms > 0.0 => ms,
        _ => DEFAULT_MAX_SPEED,
    }
}

/// "Real view" on means no ambient fill, so the sun's light alone shades
/// each planet.
pub fn ambient_intensity(realistic_lighting: bool) -> f32 {
    if realistic_lighting {
        0.0
    } else {
        SCHEMATIC_AMBIENT
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub realistic_lighting: bool,
    pub show_paths: bool,
    speed: f32,
    max_speed: f32,
}

impl ViewState {
    pub fn new(max_speed: f32) -> Self {
        let max_speed = if max_speed.is_finite() && max_speed > 0.0 {
            max_speed
        } else {
            DEFAULT_MAX_SPEED
        };
        Self {
            realistic_lighting: true,
            show_paths: true,
            speed: 1.0_f32.min(max_speed),
            max_speed,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Set the speed multiplier, clamped to `[0, max_speed]`. NaN is ignored.
    pub fn set_speed(&mut self, speed: f32) -> f32 {
        if !speed.is_nan() {
            self.speed = speed.clamp(0.0, self.max_speed);
        }
        self.speed
    }

    pub fn set_realistic_lighting(&mut self, on: bool, lights: &mut LightState) {
        self.realistic_lighting = on;
        lights.set_ambient_intensity(ambient_intensity(on));
    }

    /// Show or hide every orbit guide together.
    pub fn set_show_paths(&mut self, on: bool, scene: &mut Scene, paths: &[NodeId]) {
        self.show_paths = on;
        for &path in paths {
            scene.set_visible(path, on);
        }
    }

    /// Apply one option change. Returns false for unknown kinds.
    pub fn apply(
        &mut self,
        kind: u32,
        value: f32,
        scene: &mut Scene,
        lights: &mut LightState,
        paths: &[NodeId],
    ) -> bool {
        match kind {
            OPTION_REAL_VIEW => {
                self.set_realistic_lighting(value != 0.0, lights);
                log::debug!("real view: {}", self.realistic_lighting);
            }
            OPTION_SHOW_PATH => {
                self.set_show_paths(value != 0.0, scene, paths);
                log::debug!("show paths: {}", self.show_paths);
            }
            OPTION_SPEED => {
                self.set_speed(value);
                log::debug!("speed: {}", self.speed);
            }
            _ => {
                log::warn!("unknown option kind {}", kind);
                return false;
            }
        }
        true
    }

    pub fn events(&self) -> [GameEvent; 2] {
        let flag = |b: bool| if b { 1.0 } else { 0.0 };
        [
            GameEvent {
                kind: EVENT_VIEW_STATE,
                a: flag(self.realistic_lighting),
                b: flag(self.show_paths),
                c: self.speed,
            },
            GameEvent {
                kind: EVENT_SPEED_RANGE,
                a: self.max_speed,
                b: 0.0,
                c: 0.0,
            },
        ]
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SPEED)
    }
}
