pub const SNAP_DISTANCE: f32 = 20.0;

pub const SCATTER_MARGIN: f32 = 5.0;

pub const SHAKE_DURATION: f32 = 0.3;
pub const SHAKE_MAGNITUDE: f32 = 10.0;

pub fn splitmix32(mut value: u32) -> u32 {
    value = value.wrapping_add(0x9E37_79B9);
    let mut z = value;
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

pub fn rand_unit(seed: u32, salt: u32) -> f32 {
    let mixed = splitmix32(seed ^ salt);
    let top = mixed >> 8;
    top as f32 / ((1u32 << 24) as f32)
}

pub fn rand_range(seed: u32, salt: u32, min: f32, max: f32) -> f32 {
    min + (max - min) * rand_unit(seed, salt)
}

pub fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

/// Rectangle the pieces are scattered into, captured once at board
/// construction. Later host resizes do not re-derive it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterArea {
    pub min_x: f32,
    pub min_y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScatterArea {
    pub fn new(min_x: f32, min_y: f32, width: f32, height: f32) -> Self {
        Self {
            min_x,
            min_y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn max_x(&self) -> f32 {
        self.min_x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.min_y + self.height
    }
}

pub fn scatter_positions(
    seed: u32,
    total: usize,
    area: ScatterArea,
    margin: f32,
) -> Vec<(f32, f32)> {
    let min_x = area.min_x + margin;
    let mut max_x = area.max_x() - margin;
    let min_y = area.min_y + margin;
    let mut max_y = area.max_y() - margin;
    if max_x < min_x {
        max_x = min_x;
    }
    if max_y < min_y {
        max_y = min_y;
    }

    let mut positions = Vec::with_capacity(total);
    for id in 0..total {
        let salt = (id as u32) << 1;
        let x = rand_range(seed, salt, min_x, max_x);
        let y = rand_range(seed, salt + 1, min_y, max_y);
        positions.push((x, y));
    }
    positions
}
