// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: dumping frame series to disk and reloading them.
//!
//! These tests exercise the full path from pushes on a page-aligned buffer
//! through the raw-storage encoders and back, checking that frame
//! boundaries and bytes survive the trip for every content kind.

use frame_stack::{ContentKind, Frame, FrameStack, ImageDims, PageBuffer, StackError};
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ────────────────────────────────────────────────────

fn base_in(dir: &TempDir, prefix: &str) -> String {
    format!("{}/{prefix}", dir.path().display())
}

/// Deterministic, frame-distinct filler bytes.
fn pattern(frame: usize, len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + frame * 31) as u8).collect()
}

fn file_len(path: &Path) -> usize {
    std::fs::metadata(path).unwrap().len() as usize
}

// ── Blob dumps ─────────────────────────────────────────────────

#[test]
fn dump_all_writes_exactly_used_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.bin");

    let mut buf = [0u8; 300];
    let mut stack = FrameStack::new(&mut buf);
    stack.push(100).unwrap();
    stack.push(150).unwrap();
    assert!(stack.push(60).is_err());

    assert_eq!(stack.dump_all(&path).unwrap(), 250);
    assert_eq!(file_len(&path), 250);
}

#[test]
fn dump_all_preserves_contents_not_boundaries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("all.bin");

    let mut buf = PageBuffer::new(64).unwrap();
    let mut stack = FrameStack::new(&mut buf);
    stack.push_bytes(b"head").unwrap();
    stack.push_bytes(b"tail").unwrap();
    stack.dump_all(&path).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"headtail");
}

// ── Plain and packet series ────────────────────────────────────

#[test]
fn plain_data_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let base = base_in(&dir, "plain_");
    let sizes = [17, 0, 256, 3, 1000];

    let mut src = PageBuffer::new(4096).unwrap();
    let mut stack = FrameStack::new(&mut src);
    for (i, &len) in sizes.iter().enumerate() {
        stack.push_bytes(&pattern(i, len)).unwrap();
    }
    assert_eq!(
        stack
            .dump_frame_series(&base, ContentKind::PlainData, None)
            .unwrap(),
        sizes.len()
    );

    let mut dest = PageBuffer::new(8192).unwrap();
    let mut reloaded = FrameStack::new(&mut dest);
    let total = reloaded
        .load_frame_series(&base, ContentKind::PlainData, sizes.len())
        .unwrap();

    assert_eq!(total, sizes.iter().sum::<usize>());
    assert_eq!(reloaded.frame_count(), sizes.len());
    for (i, &len) in sizes.iter().enumerate() {
        assert_eq!(reloaded.frame_size(i), len);
        assert_eq!(reloaded.frame(i).unwrap(), pattern(i, len).as_slice());
    }
}

#[test]
fn packet_data_uses_pkt_extension() {
    let dir = tempfile::tempdir().unwrap();
    let base = base_in(&dir, "pkt_");

    let mut buf = [0u8; 64];
    let mut stack = FrameStack::new(&mut buf);
    stack.push_bytes(&[1, 2, 3]).unwrap();
    stack.push_bytes(&[4, 5]).unwrap();
    stack
        .dump_frame_series(&base, ContentKind::PacketData, None)
        .unwrap();

    assert_eq!(std::fs::read(format!("{base}0.pkt")).unwrap(), vec![1, 2, 3]);
    assert_eq!(std::fs::read(format!("{base}1.pkt")).unwrap(), vec![4, 5]);
    assert!(!Path::new(&format!("{base}0")).exists());

    let mut dest = [0u8; 64];
    let mut reloaded = FrameStack::new(&mut dest);
    reloaded
        .load_frame_series(&base, ContentKind::PacketData, 2)
        .unwrap();
    assert_eq!(reloaded.frame(0).unwrap(), &[1, 2, 3]);
    assert_eq!(reloaded.frame(1).unwrap(), &[4, 5]);
}

#[test]
fn empty_stack_dumps_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let base = base_in(&dir, "none_");

    let mut buf = [0u8; 8];
    let stack = FrameStack::new(&mut buf);
    assert_eq!(
        stack
            .dump_frame_series(&base, ContentKind::PlainData, None)
            .unwrap(),
        0
    );
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

// ── Picture series ─────────────────────────────────────────────

#[test]
fn rgb_picture_dump_writes_ppm() {
    let dir = tempfile::tempdir().unwrap();
    let base = base_in(&dir, "rgb_");
    let dims = ImageDims::new(3, 2);
    let len = dims.rgb_len().unwrap();

    let mut buf = PageBuffer::new(1024).unwrap();
    let mut stack = FrameStack::new(&mut buf);
    stack.push_bytes(&pattern(0, len)).unwrap();
    stack.push_bytes(&pattern(1, len)).unwrap();
    stack
        .dump_frame_series(&base, ContentKind::RgbPicture, Some(dims))
        .unwrap();

    for i in 0..2 {
        let bytes = std::fs::read(format!("{base}{i}.pgm")).unwrap();
        let header = b"P6\n3 2\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(&bytes[header.len()..], pattern(i, len).as_slice());
    }
}

#[test]
fn rgb_picture_reload_reads_raw_file_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let base = base_in(&dir, "rgb_");
    let dims = ImageDims::new(2, 2);

    let mut buf = [0u8; 256];
    let mut stack = FrameStack::new(&mut buf);
    stack.push_bytes(&[9u8; 12]).unwrap();
    stack
        .dump_frame_series(&base, ContentKind::RgbPicture, Some(dims))
        .unwrap();

    // The header is not parsed on reload: the frame holds header + pixels.
    let mut dest = [0u8; 256];
    let mut reloaded = FrameStack::new(&mut dest);
    reloaded
        .load_frame_series(&base, ContentKind::RgbPicture, 1)
        .unwrap();
    let header_len = dims.ppm_header().len();
    assert_eq!(reloaded.frame_size(0), header_len + 12);
    assert_eq!(&reloaded.frame(0).unwrap()[header_len..], &[9u8; 12]);
}

#[test]
fn rgba_picture_dump_packs_to_rgb() {
    let dir = tempfile::tempdir().unwrap();
    let base = base_in(&dir, "rgba_");
    let dims = ImageDims::new(2, 1);

    let mut buf = [0u8; 64];
    let mut stack = FrameStack::new(&mut buf);
    stack.push_bytes(&[1, 2, 3, 200, 4, 5, 6, 200]).unwrap();
    stack
        .dump_frame_series(&base, ContentKind::RgbaPicture, Some(dims))
        .unwrap();

    let bytes = std::fs::read(format!("{base}0.pgm")).unwrap();
    assert_eq!(bytes, b"P6\n2 1\n255\n\x01\x02\x03\x04\x05\x06");
}

#[test]
fn rgba_picture_reload_uses_plain_names() {
    let dir = tempfile::tempdir().unwrap();
    let base = base_in(&dir, "rgba_");
    std::fs::write(format!("{base}0"), [1, 2, 3, 4]).unwrap();
    std::fs::write(format!("{base}0.pgm"), [9; 32]).unwrap();

    let mut dest = [0u8; 64];
    let mut reloaded = FrameStack::new(&mut dest);
    reloaded
        .load_frame_series(&base, ContentKind::RgbaPicture, 1)
        .unwrap();
    assert_eq!(reloaded.frame(0).unwrap(), &[1, 2, 3, 4]);
}

#[test]
fn picture_dump_requires_dims() {
    let dir = tempfile::tempdir().unwrap();
    let base = base_in(&dir, "img_");

    let mut buf = [0u8; 16];
    let mut stack = FrameStack::new(&mut buf);
    stack.push(12).unwrap();

    let err = stack
        .dump_frame_series(&base, ContentKind::RgbPicture, None)
        .unwrap_err();
    assert!(matches!(
        err,
        StackError::MissingImageDims {
            kind: ContentKind::RgbPicture
        }
    ));
}

#[test]
fn short_picture_frame_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let base = base_in(&dir, "img_");

    let mut buf = [0u8; 16];
    let mut stack = FrameStack::new(&mut buf);
    stack.push(5).unwrap();

    let err = stack
        .dump_frame_series(&base, ContentKind::RgbaPicture, Some(ImageDims::new(2, 1)))
        .unwrap_err();
    assert!(matches!(
        err,
        StackError::Storage(raw_storage::StorageError::ImageTooSmall { expected: 8, actual: 5 })
    ));
}

#[test]
fn oversized_picture_dims_are_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let base = base_in(&dir, "img_");

    let mut buf = [0u8; 16];
    let mut stack = FrameStack::new(&mut buf);
    stack.push(12).unwrap();

    let err = stack
        .dump_frame_series(
            &base,
            ContentKind::RgbPicture,
            Some(ImageDims::new(usize::MAX / 2, 3)),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        StackError::Storage(raw_storage::StorageError::ImageTooLarge { .. })
    ));
    assert!(!Path::new(&format!("{base}0.pgm")).exists());
}

// ── Reload edge cases ──────────────────────────────────────────

#[test]
fn reloaded_frames_report_boundaries() {
    let dir = tempfile::tempdir().unwrap();
    let base = base_in(&dir, "bounds_");
    std::fs::write(format!("{base}0"), [1u8; 6]).unwrap();
    std::fs::write(format!("{base}1"), [2u8; 4]).unwrap();

    let mut dest = [0u8; 32];
    let mut reloaded = FrameStack::new(&mut dest);
    reloaded
        .load_frame_series(&base, ContentKind::PlainData, 2)
        .unwrap();

    let frames: Vec<Frame> = reloaded.frames().collect();
    assert_eq!(
        frames,
        vec![Frame { offset: 0, len: 6 }, Frame { offset: 6, len: 4 }]
    );
}

#[test]
fn missing_file_yields_zero_length_frame() {
    let dir = tempfile::tempdir().unwrap();
    let base = base_in(&dir, "gap_");
    std::fs::write(format!("{base}0"), b"zero").unwrap();
    // No file for index 1.
    std::fs::write(format!("{base}2"), b"two").unwrap();

    let mut dest = [0u8; 64];
    let mut reloaded = FrameStack::new(&mut dest);
    let total = reloaded
        .load_frame_series(&base, ContentKind::PlainData, 3)
        .unwrap();

    assert_eq!(total, 7);
    assert_eq!(reloaded.frame_count(), 3);
    assert_eq!(reloaded.frame_size(1), 0);
    assert_eq!(reloaded.frame(2).unwrap(), b"two");
    assert_eq!(reloaded.handle_at(2), Some(4));
}

#[test]
fn reload_truncates_at_capacity() {
    let dir = tempfile::tempdir().unwrap();
    let base = base_in(&dir, "big_");
    std::fs::write(format!("{base}0"), [1u8; 10]).unwrap();
    std::fs::write(format!("{base}1"), [2u8; 10]).unwrap();

    let mut dest = [0u8; 15];
    let mut reloaded = FrameStack::new(&mut dest);
    reloaded
        .load_frame_series(&base, ContentKind::PlainData, 3)
        .unwrap();

    assert_eq!(reloaded.frame_size(0), 10);
    assert_eq!(reloaded.frame_size(1), 5);
    assert_eq!(reloaded.frame_size(2), 0);
    assert_eq!(reloaded.remaining_space(), 0);
}

#[test]
fn reload_appends_after_existing_frames() {
    let dir = tempfile::tempdir().unwrap();
    let base = base_in(&dir, "more_");
    std::fs::write(format!("{base}0"), b"xyz").unwrap();

    let mut dest = [0u8; 32];
    let mut stack = FrameStack::new(&mut dest);
    stack.push_bytes(b"pre").unwrap();
    stack
        .load_frame_series(&base, ContentKind::PlainData, 1)
        .unwrap();

    assert_eq!(stack.frame_count(), 2);
    assert_eq!(stack.handle_at(1), Some(3));
    assert_eq!(stack.used_bytes(), b"prexyz");
}

#[test]
fn dump_failure_propagates() {
    let dir = tempfile::tempdir().unwrap();
    let base = format!("{}/missing/dir/f_", dir.path().display());

    let mut buf = [0u8; 8];
    let mut stack = FrameStack::new(&mut buf);
    stack.push(4).unwrap();

    let err = stack
        .dump_frame_series(&base, ContentKind::PlainData, None)
        .unwrap_err();
    match err {
        StackError::Storage(e) => assert!(e.is_open_failure()),
        other => panic!("expected storage error, got {other:?}"),
    }
}
