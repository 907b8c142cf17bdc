use super::*;

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 2,
        height: 1,
        fps: Fps::new(30, 1).unwrap(),
    }
}

fn frame(v: u8) -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data: vec![v; 8],
        premultiplied: true,
    }
}

#[test]
fn in_memory_sink_keeps_frames_in_push_order() {
    let mut sink = InMemorySink::new();
    assert!(sink.config().is_none());
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame(1)).unwrap();
    sink.push_frame(FrameIndex(3), &frame(2)).unwrap();
    assert!(!sink.is_ended());
    sink.end().unwrap();

    assert_eq!(sink.config(), Some(cfg()));
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 3]);
    assert_eq!(sink.frames()[1].1.data[0], 2);
    assert!(sink.is_ended());
}

#[test]
fn begin_resets_a_reused_sink() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame(1)).unwrap();
    sink.end().unwrap();

    sink.begin(cfg()).unwrap();
    assert!(sink.frames().is_empty());
    assert!(!sink.is_ended());
}

#[test]
fn null_sink_only_counts() {
    let mut sink = NullSink::new();
    sink.begin(cfg()).unwrap();
    for k in 0..4 {
        sink.push_frame(FrameIndex(k), &frame(0)).unwrap();
    }
    sink.end().unwrap();
    assert_eq!(sink.frames(), 4);
}
