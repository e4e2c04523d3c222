// NES master palette and final color composition
//
// The 2C02 outputs one of 64 composite colors (indices $00-$3F). This table
// is a standard RGB approximation of the NTSC output. Grayscale masking
// happens before the lookup (the palette index is ANDed down to the gray
// column); emphasis dims the channels that are not emphasized.

/// NES master palette, one 0xRRGGBB value per index
pub const NES_PALETTE: [u32; 64] = [
    // $00-$0F
    0x666666, 0x002A88, 0x1412A7, 0x3B00A4, 0x5C007E, 0x6E0040, 0x6C0600, 0x561D00,
    0x333500, 0x0B4800, 0x005200, 0x004F08, 0x00404D, 0x000000, 0x000000, 0x000000,
    // $10-$1F
    0xADADAD, 0x155FD9, 0x4240FF, 0x7527FE, 0xA01ACC, 0xB71E7B, 0xB53120, 0x994E00,
    0x6B6D00, 0x388700, 0x0C9300, 0x008F32, 0x007C8D, 0x000000, 0x000000, 0x000000,
    // $20-$2F
    0xFFFEFF, 0x64B0FF, 0x9290FF, 0xC676FF, 0xF36AFF, 0xFE6ECC, 0xFE8170, 0xEA9E22,
    0xBCBE00, 0x88D800, 0x5CE430, 0x45E082, 0x48CDDE, 0x4F4F4F, 0x000000, 0x000000,
    // $30-$3F
    0xFFFEFF, 0xC0DFFF, 0xD3D2FF, 0xE8C8FF, 0xFBC2FF, 0xFEC4EA, 0xFECCC5, 0xF7D8A5,
    0xE4E594, 0xCFEF96, 0xBDF4AB, 0xB3F3CC, 0xB5EBF2, 0xB8B8B8, 0x000000, 0x000000,
];

/// Emphasis bit for red (PPUMASK bit 5)
pub const EMPHASIZE_RED: u8 = 0b001;

/// Emphasis bit for green (PPUMASK bit 6)
pub const EMPHASIZE_GREEN: u8 = 0b010;

/// Emphasis bit for blue (PPUMASK bit 7)
pub const EMPHASIZE_BLUE: u8 = 0b100;

/// Dim the non-emphasized channels of an RGB color
///
/// `bits` holds the three emphasis latches (red, green, blue from low to
/// high). Each channel whose bit is clear while any bit is set loses a
/// quarter of its intensity, approximating the 2C02's voltage attenuation.
pub fn apply_emphasis(rgb: u32, bits: u8) -> u32 {
    if bits == 0 {
        return rgb;
    }

    let dim = |channel: u32, emphasized: bool| -> u32 {
        if emphasized {
            channel
        } else {
            channel * 3 / 4
        }
    };

    let r = dim((rgb >> 16) & 0xFF, bits & EMPHASIZE_RED != 0);
    let g = dim((rgb >> 8) & 0xFF, bits & EMPHASIZE_GREEN != 0);
    let b = dim(rgb & 0xFF, bits & EMPHASIZE_BLUE != 0);
    (r << 16) | (g << 8) | b
}

/// Pack an 0xRRGGBB color into the framebuffer's 0xRRGGBBAA format
#[inline]
pub fn to_rgba(rgb: u32) -> u32 {
    (rgb << 8) | 0xFF
}
