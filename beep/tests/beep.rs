// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use beep::event::{InputEvent, EV_SND, RECORD_SIZE, SND_TONE};
use beep::{Error, Phase, Tone};
use std::time::{Duration, Instant};

// A regular file stands in for the device node, capturing the written events.
fn device() -> tempfile::NamedTempFile {
    tempfile::NamedTempFile::new().expect("temp file should be created")
}

fn written_events(dev: &tempfile::NamedTempFile) -> Vec<InputEvent> {
    let buf = std::fs::read(dev.path()).unwrap();
    assert_eq!(buf.len() % RECORD_SIZE, 0);
    buf.chunks(RECORD_SIZE)
        .map(|c| InputEvent::from_slice(c).unwrap())
        .collect()
}

#[test]
fn default_tone() {
    let dev = device();
    let tone = Tone {
        duration: Duration::ZERO,
        ..Default::default()
    };
    let report = beep::beep(dev.path(), &tone, |_, _| {}).unwrap();

    assert!(report.is_complete());
    assert_eq!(report.off.unwrap(), RECORD_SIZE);
    let evs = written_events(&dev);
    assert_eq!(evs, [InputEvent::tone(1000), InputEvent::tone(0)]);
    for ev in evs {
        assert_eq!(ev.kind, EV_SND);
        assert_eq!(ev.code, SND_TONE);
    }
}

#[test]
fn tone_is_held_for_duration() {
    let dev = device();
    let tone = Tone::from_args(Some("440"), Some("1"));
    let mut stamps = Vec::new();
    let start = Instant::now();
    let report = beep::beep(dev.path(), &tone, |p, r| {
        assert!(r.is_ok());
        stamps.push((p, start.elapsed()));
    })
    .unwrap();

    assert!(report.is_complete());
    assert_eq!(stamps.len(), 2);
    assert_eq!(stamps[0].0, Phase::On);
    assert_eq!(stamps[1].0, Phase::Off);
    assert!(stamps[1].1 - stamps[0].1 >= Duration::from_secs(1));
    assert_eq!(
        written_events(&dev),
        [InputEvent::tone(440), InputEvent::tone(0)]
    );
}

#[test]
fn unopenable_device() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("event99");
    let mut writes = 0;
    let res = beep::beep(&path, &Tone::default(), |_, _| writes += 1);

    match res {
        Err(Error::Open(p, e)) => {
            assert_eq!(p, path);
            assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected open error, got {other:?}"),
    }
    assert_eq!(writes, 0);
    assert!(!path.exists());
}
