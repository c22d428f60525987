use image::{Rgba, RgbaImage};
use omniscan::mailbox::{CapturedFrame, FrameSource, Mailbox, ScanUpdate};

fn frame(tag: u8) -> ScanUpdate {
    let image = RgbaImage::from_pixel(2, 2, Rgba([tag, 0, 0, 255]));
    ScanUpdate::Frame(CapturedFrame::new(image, FrameSource::Camera))
}

fn tag_of(update: ScanUpdate) -> u8 {
    match update {
        ScanUpdate::Frame(frame) => frame.image.get_pixel(0, 0)[0],
        ScanUpdate::Failure(msg) => panic!("expected a frame, got failure: {msg}"),
    }
}

#[test]
fn take_and_clear_never_redelivers() {
    let mailbox = Mailbox::new();
    mailbox.publish(frame(1));
    assert!(mailbox.take().is_some());
    // Second take with no intervening publish yields nothing.
    assert!(mailbox.take().is_none());
}

#[test]
fn last_write_wins() {
    let mailbox = Mailbox::new();
    mailbox.publish(frame(1));
    mailbox.publish(frame(2));
    // The unconsumed first frame was silently replaced.
    assert_eq!(tag_of(mailbox.take().unwrap()), 2);
    assert!(mailbox.take().is_none());
}

#[test]
fn failure_sentinel_travels_through_the_same_slot() {
    let mailbox = Mailbox::new();
    mailbox.publish(frame(1));
    mailbox.publish(ScanUpdate::Failure("camera unplugged".into()));
    match mailbox.take() {
        Some(ScanUpdate::Failure(msg)) => assert_eq!(msg, "camera unplugged"),
        _ => panic!("expected the failure sentinel"),
    }
}

#[test]
fn clear_discards_pending_value() {
    let mailbox = Mailbox::new();
    mailbox.publish(frame(7));
    mailbox.clear();
    assert!(mailbox.take().is_none());
}
