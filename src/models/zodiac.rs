//! Zodiac sign lookup and the element/quality tables derived from it.

/// Zodiac sign names in ecliptic order, 30° each starting at 0° Aries.
pub const SIGNS: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

const ELEMENTS: [&str; 4] = ["fire", "earth", "air", "water"];
const QUALITIES: [&str; 3] = ["cardinal", "fixed", "mutable"];

/// Normalize an angle into [0, 360).
pub fn normalize_degrees(deg: f64) -> f64 {
    let d = deg % 360.0;
    if d < 0.0 {
        d + 360.0
    } else {
        d
    }
}

/// Sign index (0 = Aries .. 11 = Pisces) for an absolute ecliptic longitude.
pub fn sign_index(abs_pos: f64) -> u8 {
    (normalize_degrees(abs_pos) / 30.0) as u8 % 12
}

/// Sign name for an absolute ecliptic longitude.
pub fn sign_name(abs_pos: f64) -> &'static str {
    SIGNS[sign_index(abs_pos) as usize]
}

/// Degrees within the sign, [0, 30).
pub fn degrees_in_sign(abs_pos: f64) -> f64 {
    normalize_degrees(abs_pos) % 30.0
}

/// Element of a sign: fire/earth/air/water repeats every four signs.
pub fn element(sign_idx: u8) -> &'static str {
    ELEMENTS[(sign_idx % 4) as usize]
}

/// Quality (modality) of a sign: cardinal/fixed/mutable repeats every three signs.
pub fn quality(sign_idx: u8) -> &'static str {
    QUALITIES[(sign_idx % 3) as usize]
}
