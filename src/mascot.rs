//! ASCII mascot animations.
//!
//! Terminal counterpart of the original app's looping GIF mascots: each
//! identifier maps to a short cycle of ASCII-art frames. The event loop's
//! poll timeout drives the animation tick.
//!
//! An unknown identifier is logged and renders nothing - the countdown
//! itself never depends on the mascot.

use tracing::warn;

const SUN: [&str; 2] = [
    r#"    \ | /
     .-.
 -- (   ) --
     `-'
    / | \
"#,
    r#"    . | .
     .-.
 ~~ (   ) ~~
     `-'
    . | .
"#,
];

const CRAB: [&str; 2] = [
    r#" (\/)   (\/)
   \.-""-./
  ( o    o )
   /`-..-'\
  ^^      ^^
"#,
    r#"(\/)     (\/)
   \.-""-./
  ( o    o )
   /`-..-'\
   ^^    ^^
"#,
];

const POPSICLE: [&str; 2] = [
    r#"   .------.
   | ~ ~ ~~|
   |~~ ~ ~ |
   `--.  .-'
      ||||
      `--'
"#,
    r#"   .------.
   | ~ ~ ~~|
   |~~ ~ ~ |
   `--.  .-'
      ||||
      `--'  ,
"#,
];

const SAILBOAT: [&str; 2] = [
    r#"      |\
      | \
      |__\
   \--------/
~~~~`------'~~~~
"#,
    r#"      |\
      | \
      |__\
   \--------/
~-~-`------'-~-~
"#,
];

const FLOWER: [&str; 2] = [
    r#"   _(_)_
  (_)@(_)
    (_)
     |
   \_|_/
"#,
    r#"   _(_)_
  (_)@(_)
    (_)
      \
   \_|_/
"#,
];

/// Looks up the animation frames for a mascot identifier.
pub fn frames(id: &str) -> Option<&'static [&'static str]> {
    match id {
        "sun" => Some(&SUN),
        "crab" => Some(&CRAB),
        "popsicle" => Some(&POPSICLE),
        "sailboat" => Some(&SAILBOAT),
        "flower" => Some(&FLOWER),
        _ => None,
    }
}

/// Returns the frame to draw for the given animation tick, cycling through
/// the mascot's frames. None for unknown identifiers.
pub fn frame_at(id: &str, tick: usize) -> Option<&'static str> {
    let frames = frames(id)?;
    Some(frames[tick % frames.len()])
}

/// Logs when a selected identifier has no animation. Called once per
/// selection change, not per draw.
pub fn warn_if_unknown(id: &str) {
    if frames(id).is_none() {
        warn!("no mascot animation for identifier '{id}', showing nothing");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MASCOTS;

    #[test]
    fn test_every_listed_mascot_resolves() {
        for id in MASCOTS {
            assert!(frames(id).is_some(), "mascot '{id}' has no animation");
        }
    }

    #[test]
    fn test_unknown_id_resolves_to_none() {
        assert!(frames("g01").is_none());
        assert!(frame_at("g01", 0).is_none());
    }

    #[test]
    fn test_all_animations_have_frames() {
        for id in MASCOTS {
            let frames = frames(id).unwrap();
            assert!(!frames.is_empty());
            for frame in frames {
                assert!(!frame.is_empty());
            }
        }
    }

    #[test]
    fn test_frame_at_cycles() {
        let frames = frames("sun").unwrap();
        assert_eq!(frame_at("sun", 0), Some(frames[0]));
        assert_eq!(frame_at("sun", frames.len()), Some(frames[0]));
        assert_eq!(frame_at("sun", 1), Some(frames[1 % frames.len()]));
    }
}
