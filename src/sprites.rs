/// Pixel-art sprites: 2D masks of '1' (ink) and '0' (transparent), drawn as
/// filled blocks of `scale` canvas pixels.
use crate::render::Surface;

type Frame = &'static [&'static str];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub frames: &'static [Frame],
    pub scale: f32,
}

impl Sprite {
    pub fn width(&self) -> f32 {
        self.frames[0][0].len() as f32 * self.scale
    }

    pub fn height(&self) -> f32 {
        self.frames[0].len() as f32 * self.scale
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Rasterise frame `index` (wrapped) with its top-left corner at (x, y).
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, x: f32, y: f32, index: usize) {
        let frame = self.frames[index % self.frame_count()];
        for (r, row) in frame.iter().enumerate() {
            for (c, cell) in row.bytes().enumerate() {
                if cell == b'1' {
                    surface.fill_rect(
                        x + c as f32 * self.scale,
                        y + r as f32 * self.scale,
                        self.scale,
                        self.scale,
                    );
                }
            }
        }
    }
}

// ── Horse (player) ───────────────────────────────────────────────────────────

// Galloping, legs extended
const HORSE_RUN_1: Frame = &[
    "000000000000000000001100000000",
    "000000000000000000011111110000",
    "000000000000000000011111110000",
    "000000000000000000001111000000",
    "000000000000000000011111000000",
    "000000000000000000111111000000",
    "000000000001111111111111000000",
    "000001110011111111111111000000",
    "000011111111111111111111000000",
    "000001111111111111111111000000",
    "000000000011111111111110000000",
    "000000000011100000011100000000",
    "000000000111000000011100000000",
    "000000001100000000000110000000",
    "000000001000000000000010000000",
];

// Legs gathered; also used as the ducking pose
const HORSE_RUN_2: Frame = &[
    "000000000000000000001100000000",
    "000000000000000000011111110000",
    "000000000000000000011111110000",
    "000000000000000000001111000000",
    "000000000000000000011111000000",
    "000000000000000000111111000000",
    "000000000001111111111111000000",
    "000001111011111111111111000000",
    "000011111111111111111111000000",
    "000000111111111111111110000000",
    "000000000011111111111100000000",
    "000000000011000000011000000000",
    "000000000011100000111000000000",
    "000000000001100000110000000000",
    "000000000000000000000000000000",
];

// ── Bull (power-up actor) ────────────────────────────────────────────────────

const BULL_RUN_1: Frame = &[
    "00000000000000000000000001000",
    "00000000000000000000000001000",
    "00000000000000000000000011000",
    "00000000000000000000111111110",
    "00000000000011111111111111111",
    "00000000000111111111111111111",
    "00000000011111111111111110000",
    "00000000011111111111111110000",
    "00000000011111111111111110000",
    "00000000011111111111111000000",
    "00000000000110000000011000000",
    "00000000000110000000011000000",
];

const BULL_RUN_2: Frame = &[
    "00000000000000000000000001000",
    "00000000000000000000000001000",
    "00000000000000000000000011000",
    "00000000000000000000111111110",
    "00000000000000111111111111111",
    "00000000000011111111111111111",
    "00000000001111111111111110000",
    "00000000001111111111111110000",
    "00000000001111111111111110000",
    "00000000001111111111111110000",
    "00000000001100000000001110000",
    "00000000011000000000000110000",
];

// ── Obstacles ────────────────────────────────────────────────────────────────

const CACTUS_SMALL: Frame = &[
    "00011000",
    "11011000",
    "11011000",
    "11111011",
    "00111111",
    "00111000",
    "00111000",
    "00111000",
];

const CACTUS_LARGE: Frame = &[
    "00011000",
    "00011000",
    "00111011",
    "00111011",
    "10111011",
    "10111011",
    "11111111",
    "00111000",
    "00111000",
    "00111000",
];

const VULTURE: Frame = &[
    "000000001100",
    "001100011100",
    "011111111100",
    "111111111000",
    "000111100000",
    "000011000000",
];

pub const HORSE: Sprite = Sprite {
    frames: &[HORSE_RUN_1, HORSE_RUN_2],
    scale: 3.0,
};

pub const BULL: Sprite = Sprite {
    frames: &[BULL_RUN_1, BULL_RUN_2],
    scale: 3.0,
};

pub const CACTUS_SMALL_SPRITE: Sprite = Sprite {
    frames: &[CACTUS_SMALL],
    scale: 4.0,
};

pub const CACTUS_LARGE_SPRITE: Sprite = Sprite {
    frames: &[CACTUS_LARGE],
    scale: 4.0,
};

pub const VULTURE_SPRITE: Sprite = Sprite {
    frames: &[VULTURE],
    scale: 4.0,
};
