//! VRAM routing: nametable mirroring, palette mirrors, CHR storage

use super::*;

#[test]
fn test_chr_load_and_read() {
    let mut ppu = Ppu::new();
    ppu.load_chr(0x0000, &[0x11, 0x22, 0x33]);

    assert_eq!(ppu.read_vram(0x0000), 0x11);
    assert_eq!(ppu.read_vram(0x0002), 0x33);

    ppu.load_chr(0x1FF0, &[0xAB]);
    assert_eq!(ppu.read_vram(0x1FF0), 0xAB);
}

#[test]
fn test_horizontal_mirroring() {
    let mut ppu = Ppu::new();
    ppu.set_mirroring(Mirroring::Horizontal);

    ppu.write_vram(0x2000, 0xAA);
    assert_eq!(ppu.read_vram(0x2400), 0xAA, "$2000 and $2400 share a table");

    ppu.write_vram(0x2800, 0xBB);
    assert_eq!(ppu.read_vram(0x2C00), 0xBB, "$2800 and $2C00 share a table");

    assert_ne!(
        ppu.read_vram(0x2000),
        ppu.read_vram(0x2800),
        "top and bottom tables are distinct"
    );
}

#[test]
fn test_vertical_mirroring() {
    let mut ppu = Ppu::new();
    ppu.set_mirroring(Mirroring::Vertical);

    ppu.write_vram(0x2000, 0xAA);
    assert_eq!(ppu.read_vram(0x2800), 0xAA, "$2000 and $2800 share a table");

    ppu.write_vram(0x2400, 0xBB);
    assert_eq!(ppu.read_vram(0x2C00), 0xBB, "$2400 and $2C00 share a table");
}

#[test]
fn test_3000_region_mirrors_nametables() {
    let mut ppu = Ppu::new();

    ppu.write_vram(0x2005, 0x42);
    assert_eq!(ppu.read_vram(0x3005), 0x42);

    ppu.write_vram(0x3105, 0x43);
    assert_eq!(ppu.read_vram(0x2105), 0x43);
}

#[test]
fn test_palette_backdrop_mirrors() {
    let mut ppu = Ppu::new();

    // $3F10/$3F14/$3F18/$3F1C alias the background entries
    ppu.write_vram(0x3F00, 0x0F);
    assert_eq!(ppu.read_vram(0x3F10), 0x0F);

    ppu.write_vram(0x3F14, 0x21);
    assert_eq!(ppu.read_vram(0x3F04), 0x21);

    // Non-multiples of four stay separate
    ppu.write_vram(0x3F01, 0x11);
    ppu.write_vram(0x3F11, 0x22);
    assert_eq!(ppu.read_vram(0x3F01), 0x11);
    assert_eq!(ppu.read_vram(0x3F11), 0x22);
}

#[test]
fn test_palette_region_wraps_every_32_bytes() {
    let mut ppu = Ppu::new();

    ppu.write_vram(0x3F02, 0x2A);
    assert_eq!(ppu.read_vram(0x3F22), 0x2A);
    assert_eq!(ppu.read_vram(0x3FE2), 0x2A);
}

#[test]
fn test_address_space_wraps_at_14_bits() {
    let mut ppu = Ppu::new();

    ppu.write_vram(0x2000, 0x5A);
    assert_eq!(ppu.read_vram(0x6000), 0x5A, "bit 14 and above are masked");
}
