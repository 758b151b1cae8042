//! Assertion utilities for robot testing
//!
//! Offsets are floats computed from widths and touch deltas, so comparisons
//! allow a small tolerance.

use crate::{OffsetCommand, RecordingRenderer};

/// Tolerance used by the offset assertions, in logical pixels.
pub const OFFSET_TOLERANCE: f32 = 0.01;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

fn last_command(renderer: &RecordingRenderer, msg: &str) -> OffsetCommand {
    match renderer.last() {
        Some(command) => command,
        None => panic!("{}: renderer received no commands", msg),
    }
}

/// Assert that the strip was last placed at `expected`, animated or not.
pub fn assert_offset(renderer: &RecordingRenderer, expected: f32, msg: &str) {
    let command = last_command(renderer, msg);
    assert_approx_eq(command.offset, expected, OFFSET_TOLERANCE, msg);
}

/// Assert that the last placement was an instant jump to `expected`.
pub fn assert_instant_offset(renderer: &RecordingRenderer, expected: f32, msg: &str) {
    let command = last_command(renderer, msg);
    assert!(
        !command.animated,
        "{}: expected an instant move to {}, got animated {:?}",
        msg,
        expected,
        command
    );
    assert_approx_eq(command.offset, expected, OFFSET_TOLERANCE, msg);
}

/// Assert that the last placement was an animated snap to `expected`.
pub fn assert_animated_offset(renderer: &RecordingRenderer, expected: f32, msg: &str) {
    let command = last_command(renderer, msg);
    assert!(
        command.animated,
        "{}: expected an animated snap to {}, got instant {:?}",
        msg,
        expected,
        command
    );
    assert_approx_eq(command.offset, expected, OFFSET_TOLERANCE, msg);
}

/// Assert that the renderer has not been touched since it was last drained.
pub fn assert_no_commands(renderer: &RecordingRenderer, msg: &str) {
    assert!(
        renderer.commands().is_empty(),
        "{}: expected no renderer commands, got {:?}",
        msg,
        renderer.commands()
    );
}
