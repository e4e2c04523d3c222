// PPU timing and geometry constants (NTSC)

/// Screen width in pixels
pub(super) const SCREEN_WIDTH: usize = 256;

/// Screen height in pixels
pub(super) const SCREEN_HEIGHT: usize = 240;

/// Size of one nametable in bytes (1KB)
pub(super) const NAMETABLE_SIZE: usize = 1024;

/// Size of palette RAM in bytes
pub(super) const PALETTE_SIZE: usize = 32;

/// Size of the pattern-table region in bytes (two 4KB tables)
pub(super) const PATTERN_SIZE: usize = 0x2000;

/// PPU cycles per scanline (cycles 0-340)
pub(super) const CYCLES_PER_SCANLINE: u16 = 341;

/// Scanlines per frame (NTSC: 0-261)
pub(super) const SCANLINES_PER_FRAME: u16 = 262;

/// Total PPU cycles per frame: 341 × 262 = 89,342
#[allow(dead_code)]
pub(super) const CYCLES_PER_FRAME: u32 =
    (CYCLES_PER_SCANLINE as u32) * (SCANLINES_PER_FRAME as u32);

/// Last visible scanline
pub(super) const LAST_VISIBLE_SCANLINE: u16 = 239;

/// Post-render scanline (idle)
pub(super) const POSTRENDER_SCANLINE: u16 = 240;

/// First vblank scanline; the vblank flag rises at cycle 1
pub(super) const FIRST_VBLANK_SCANLINE: u16 = 241;

/// Last vblank scanline
pub(super) const LAST_VBLANK_SCANLINE: u16 = 260;

/// Pre-render scanline (also written as -1)
pub(super) const PRERENDER_SCANLINE: u16 = 261;
