//! Shared fixtures: minimal JPEG files carrying an EXIF APP1 segment, and a
//! binary launcher isolated from the developer's own config and environment.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const TAG_ORIENTATION: u16 = 0x0112;
const TAG_DATETIME: u16 = 0x0132;
const TAG_EXIF_IFD: u16 = 0x8769;
const TAG_DATETIME_ORIGINAL: u16 = 0x9003;

const TYPE_ASCII: u16 = 2;
const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;

/// Timestamps to embed; with neither set only an Orientation tag is written.
#[derive(Default)]
pub struct Exif<'a> {
    pub original: Option<&'a str>,
    pub datetime: Option<&'a str>,
}

fn entry(out: &mut Vec<u8>, tag: u16, typ: u16, count: u32, value: u32) {
    out.extend_from_slice(&tag.to_be_bytes());
    out.extend_from_slice(&typ.to_be_bytes());
    out.extend_from_slice(&count.to_be_bytes());
    out.extend_from_slice(&value.to_be_bytes());
}

fn ascii(s: &str) -> Vec<u8> {
    let mut v = s.as_bytes().to_vec();
    v.push(0);
    v
}

/// Big-endian TIFF block: IFD0 (DateTime / ExifIFD pointer) and an optional Exif IFD.
fn tiff(exif: &Exif<'_>) -> Vec<u8> {
    let dt = exif.datetime.map(ascii);
    let orig = exif.original.map(ascii);

    let mut n0 = 0u16;
    if dt.is_some() {
        n0 += 1;
    }
    if orig.is_some() {
        n0 += 1;
    }
    let orientation_only = n0 == 0;
    if orientation_only {
        n0 = 1;
    }

    let ifd0_off = 8u32;
    let ifd0_len = 2 + 12 * u32::from(n0) + 4;
    let exif_ifd_off = ifd0_off + ifd0_len;
    let exif_ifd_len = if orig.is_some() { 2 + 12 + 4 } else { 0 };
    let mut data_off = exif_ifd_off + exif_ifd_len;

    let mut out = Vec::new();
    out.extend_from_slice(b"MM");
    out.extend_from_slice(&42u16.to_be_bytes());
    out.extend_from_slice(&ifd0_off.to_be_bytes());

    // IFD0, entries in ascending tag order.
    out.extend_from_slice(&n0.to_be_bytes());
    if orientation_only {
        entry(&mut out, TAG_ORIENTATION, TYPE_SHORT, 1, 1 << 16);
    }
    let dt_off = data_off;
    if let Some(d) = &dt {
        entry(&mut out, TAG_DATETIME, TYPE_ASCII, d.len() as u32, dt_off);
        data_off += d.len() as u32;
    }
    if orig.is_some() {
        entry(&mut out, TAG_EXIF_IFD, TYPE_LONG, 1, exif_ifd_off);
    }
    out.extend_from_slice(&0u32.to_be_bytes());

    // Exif IFD.
    if let Some(o) = &orig {
        out.extend_from_slice(&1u16.to_be_bytes());
        entry(&mut out, TAG_DATETIME_ORIGINAL, TYPE_ASCII, o.len() as u32, data_off);
        out.extend_from_slice(&0u32.to_be_bytes());
    }

    if let Some(d) = &dt {
        out.extend_from_slice(d);
    }
    if let Some(o) = &orig {
        out.extend_from_slice(o);
    }
    out
}

/// SOI, APP1 "Exif\0\0" + TIFF, EOI.
pub fn jpeg(exif: &Exif<'_>) -> Vec<u8> {
    let tiff = tiff(exif);
    let seg_len = (2 + 6 + tiff.len()) as u16;
    let mut out = vec![0xFF, 0xD8, 0xFF, 0xE1];
    out.extend_from_slice(&seg_len.to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(&tiff);
    out.extend_from_slice(&[0xFF, 0xD9]);
    out
}

/// Write a JPEG whose DateTimeOriginal is `stamp` (`YYYY:MM:DD HH:MM:SS`).
pub fn write_photo(path: &Path, stamp: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let bytes = jpeg(&Exif {
        original: Some(stamp),
        datetime: None,
    });
    fs::write(path, bytes).unwrap();
}

/// Canonical temp root so paths printed by the binary compare equal.
pub fn canonical(p: &Path) -> PathBuf {
    dunce::canonicalize(p).unwrap()
}

/// The binary with HOME pointed at `home` and all PHOTO_TOOL_* variables cleared.
pub fn photo_tool(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("photo_tool"));
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("APPDATA", home.join("AppData"));
    for var in [
        "PHOTO_TOOL_CONFIG",
        "PHOTO_TOOL_PATH",
        "PHOTO_TOOL_TARGET",
        "PHOTO_TOOL_EXT",
        "PHOTO_TOOL_DEPTH",
        "PHOTO_TOOL_PREVIEW",
        "PHOTO_TOOL_LOG_LEVEL",
        "PHOTO_TOOL_LOG_FILE",
    ] {
        cmd.env_remove(var);
    }
    cmd
}
