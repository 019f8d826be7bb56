//! Fill colors of the city.

use city_core::{Color, FaceColors};

/// Building tier by daily count: 1 for 1-3, 2 for 4-6, 3 for 7-9, 4 from 10 up. Zero is 0.
pub fn building_level(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=3 => 1,
        4..=6 => 2,
        7..=9 => 3,
        _ => 4,
    }
}

/// Roof / right wall / left wall colors per tier.
pub fn building_faces(level: u8) -> FaceColors {
    match level {
        0 => FaceColors::new(Color::hex(0x2a4a2a), Color::hex(0x1f451f), Color::hex(0x153015)),
        1 => FaceColors::new(Color::hex(0x7a6a5a), Color::hex(0x6a5a4a), Color::hex(0x4a3a2a)),
        2 => FaceColors::new(Color::hex(0x6a8aaa), Color::hex(0x5a7a9a), Color::hex(0x3a5a7a)),
        3 => FaceColors::new(Color::hex(0x8a7aaa), Color::hex(0x7a6a9a), Color::hex(0x5a4a7a)),
        _ => FaceColors::new(Color::hex(0xaa8a6a), Color::hex(0x9a7a5a), Color::hex(0x7a5a3a)),
    }
}

pub const BACK_GRASS: FaceColors =
    FaceColors::new(Color::hex(0x1f3d24), Color::hex(0x16301b), Color::hex(0x122816));
pub const FRONT_GRASS: FaceColors =
    FaceColors::new(Color::hex(0x24462a), Color::hex(0x1a3520), Color::hex(0x142a19));
pub const GRASS_SPECKLE: Color = Color::hex(0x3a6a3a);

pub const ROAD: FaceColors =
    FaceColors::new(Color::hex(0x2b2b3a), Color::hex(0x23232f), Color::hex(0x1c1c26));
pub const LANE_MARK: Color = Color::hex(0xe0c060);

pub const LAMP_POLE: FaceColors =
    FaceColors::new(Color::hex(0x5a5a6a), Color::hex(0x4a4a5a), Color::hex(0x3a3a48));
pub const LAMP_HEAD: FaceColors =
    FaceColors::new(Color::hex(0xffee88), Color::hex(0xffd966), Color::hex(0xe6c35c));

pub const WINDOW_LIT: Color = Color::hex(0xffdd77);
pub const WINDOW_DARK: Color = Color::hex(0x2a2d40);
pub const BEACON: Color = Color::hex(0xff3333);

pub const VEHICLE_BODY: FaceColors =
    FaceColors::new(Color::hex(0xd0483a), Color::hex(0xb03a2e), Color::hex(0x8c2e25));
pub const VEHICLE_CABIN: FaceColors =
    FaceColors::new(Color::hex(0x9fc6e0), Color::hex(0x7fa6c0), Color::hex(0x5f86a0));
pub const HEADLIGHT: Color = Color::hex(0xfff4c0);

pub const WEEKDAY_LABEL: Color = Color::hex(0x8b949e);
pub const COUNT_LABEL: Color = Color::hex(0x58a6ff);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn building_level_thresholds() {
        let levels: Vec<u8> = [0, 1, 3, 4, 6, 7, 9, 10, 500].iter().map(|&c| building_level(c)).collect();
        assert_eq!(levels, vec![0, 1, 1, 2, 2, 3, 3, 4, 4]);
    }
}
